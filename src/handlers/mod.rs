//! HTTP request handlers for the llm-echo API

use crate::config::{Config, CorsConfig};
use crate::error::{AppError, AppResult};
use crate::middleware::request_id_middleware;
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod chat;
pub mod root;

/// Application state shared across all handlers
///
/// Holds the configuration behind an Arc for cheap cloning across Axum handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState from configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Build the application router
///
/// Constructs all routes and layers explicitly from the given state; no
/// global state is touched. The CORS policy comes from configuration rather
/// than a hidden middleware default.
pub fn app(state: AppState) -> AppResult<Router> {
    let cors = cors_layer(&state.config().cors)?;

    Ok(Router::new()
        .route("/", get(root::handler))
        .route("/chat", post(chat::handler))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Translate the configured CORS policy into a tower-http layer
///
/// tower-http rejects the `*` wildcard origin when credentials are allowed;
/// mirroring the request's origin, methods, and headers grants the same open
/// policy without tripping that restriction.
fn cors_layer(cors: &CorsConfig) -> AppResult<CorsLayer> {
    let origin = if cors.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        let origins = cors
            .allowed_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::Config(format!("invalid CORS origin: {e}")))?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(cors.allow_credentials))
}
