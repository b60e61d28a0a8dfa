//! Command-line interface for llm-echo
//!
//! Provides argument parsing and subcommand handling for the llm-echo binary.

use clap::{Parser, Subcommand};

/// Mock LLM chat API that echoes the last message of a conversation
#[derive(Parser)]
#[command(name = "llm-echo")]
#[command(version)]
#[command(about = "Mock LLM chat API that echoes the last message of a conversation")]
#[command(
    long_about = "llm-echo serves a chat-completion-shaped HTTP API that returns a canned \
    echo of the caller's last message, standing in for a real LLM provider during \
    local development and demos."
)]
pub struct Cli {
    /// Path to configuration file (defaults are used if the file is absent)
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a template configuration file
    Config {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Generate template configuration content
pub fn generate_config_template() -> &'static str {
    r#"# llm-echo Configuration
# ======================
#
# Every setting is optional; the values below are the defaults the service
# uses when no configuration file is present.

[server]
# IP address to bind to (0.0.0.0 for all interfaces, 127.0.0.1 for localhost only)
host = "0.0.0.0"

# Port to listen on
port = 8001

[chat]
# Model identifier assumed when a request omits "model". The mock backend
# never calls a model; this only labels requests for logging and for a
# future provider integration.
default_model = "gpt-3.5-turbo"

[cors]
# Allowed browser origins; ["*"] permits any origin. The default open
# policy is intended for local and demo use only.
allowed_origins = ["*"]

# Whether browsers may send credentials (cookies, auth headers)
allow_credentials = true

[observability]
# Log level: trace, debug, info, warn, error (RUST_LOG overrides this)
log_level = "info"
"#
}
