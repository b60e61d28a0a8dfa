//! Root liveness endpoint
//!
//! Provides a simple liveness check for monitoring and load balancers.

use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Fixed service banner
    pub message: &'static str,
}

/// Liveness handler
///
/// Always returns 200 OK with the service banner; no state is consulted.
pub async fn handler() -> (StatusCode, Json<RootResponse>) {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: "LLM API is running",
        }),
    )
}
