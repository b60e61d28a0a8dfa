//! Chat endpoint handler
//!
//! Handles POST /chat requests by echoing the last message of the submitted
//! conversation. No model is invoked; the echo stands in for real inference
//! until a provider integration replaces it.

use crate::error::AppError;
use crate::handlers::AppState;
use crate::middleware::RequestId;
use axum::{Extension, Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};

/// Prefix prepended to the echoed message content
const ECHO_PREFIX: &str = "Echo: ";

/// Suffix appended to the echoed message content
///
/// Part of the wire contract; clients built against the original service
/// match on this exact string.
const ECHO_SUFFIX: &str = ". (This is a mock response from api_llm.py)";

/// Role label used for all responses
const ASSISTANT_ROLE: &str = "assistant";

/// A single message in a conversation
///
/// `role` is an open label set ("user", "assistant", "system", ...); no
/// membership check is performed. `content` is free-form text.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Message {
    role: String,
    content: String,
}

impl Message {
    /// Create a new message
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Get the role label
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Get the message content
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Chat request from client
///
/// `messages` is the conversation in order; only the last element drives the
/// response. `model` is accepted for wire compatibility but selects no
/// behavior.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
}

impl ChatRequest {
    /// Get the conversation messages in order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Get the requested model, falling back to the given default
    pub fn model_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.model.as_deref().unwrap_or(default)
    }
}

/// Chat response to client
///
/// Constructed through `echo()` so `role` and the echo framing stay
/// consistent with the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Role label, always "assistant"
    role: String,
    /// Echoed content with the fixed prefix and suffix
    content: String,
}

impl ChatResponse {
    /// Build the echo response for the given last-message content
    pub fn echo(last_content: &str) -> Self {
        Self {
            role: ASSISTANT_ROLE.to_string(),
            content: format!("{ECHO_PREFIX}{last_content}{ECHO_SUFFIX}"),
        }
    }

    /// Get the role label
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Get the response content
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Chat handler
///
/// Rejects an empty conversation with 400; otherwise echoes the content of
/// the final message. Malformed bodies never reach this function - the Json
/// extractor rejects them first.
pub async fn handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(
        request_id = %request_id,
        message_count = request.messages().len(),
        model = request.model_or(&state.config().chat.default_model),
        "Received chat request"
    );

    let last = request
        .messages()
        .last()
        .ok_or_else(|| AppError::Validation("messages must be non-empty".to_string()))?;

    let response = ChatResponse::echo(last.content());

    tracing::info!(
        request_id = %request_id,
        last_role = last.role(),
        response_length = response.content().len(),
        "Returning mock echo response"
    );

    Ok(Json(response))
}
