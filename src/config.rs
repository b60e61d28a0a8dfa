//! Configuration management for llm-echo
//!
//! Parses TOML configuration files and provides typed access to settings.
//! Every field has a default matching the service's out-of-the-box behavior,
//! so the binary also runs without any configuration file present.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

/// Chat endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    /// Model identifier assumed when the request omits `model`
    ///
    /// The mock backend never invokes a model; this only fills the request's
    /// `model` field so a future provider integration has a value to send.
    #[serde(default = "default_model")]
    pub default_model: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_model: default_model(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

/// CORS policy configuration
///
/// The default is a fully open policy (all origins, methods, and headers,
/// with credentials), suitable only for local and demo use. The policy is
/// injected into the router explicitly rather than hidden in middleware
/// defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; `["*"]` permits any origin
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    /// Whether browsers may send credentials (cookies, auth headers)
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,
}

impl CorsConfig {
    /// True when the policy permits any origin
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allow_credentials: default_allow_credentials(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_allow_credentials() -> bool {
    true
}

/// Observability configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error with file context if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file if it exists, otherwise use defaults
    ///
    /// Matches the behavior of the original service, which ran with no
    /// configuration at all.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration invariants
    pub fn validate(&self) -> AppResult<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(
                "server.port must be non-zero".to_string(),
            ));
        }
        if self.chat.default_model.trim().is_empty() {
            return Err(AppError::Config(
                "chat.default_model must not be empty".to_string(),
            ));
        }
        if self.cors.allowed_origins.is_empty() {
            return Err(AppError::Config(
                "cors.allowed_origins must list at least one origin (use \"*\" for any)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
