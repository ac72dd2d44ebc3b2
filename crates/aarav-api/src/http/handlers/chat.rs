//! POST /api/chat -- the chat-turn endpoint.
//!
//! Validates input, delegates to the turn processor, and maps failures
//! to the stable wire bodies (see `http::error`). A missing `sessionId`
//! falls back to the shared literal `"default"`; clients that want their
//! own conversation supply a generated identifier (both shipped clients
//! do).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::state::AppState;

/// Session id used when the client does not supply one.
pub const DEFAULT_SESSION_ID: &str = "default";

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message. Absent or empty is a validation error.
    #[serde(default)]
    pub message: Option<String>,
    /// Opaque session identifier; defaults to `"default"`.
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
}

/// Success body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The assistant's reply text.
    pub response: String,
    /// The effective session identifier for this turn.
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// POST /api/chat -- process one chat turn.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let session_id = body
        .session_id
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string());
    let message = body.message.unwrap_or_default();

    let response = state.processor.handle_turn(&session_id, &message).await?;

    Ok(Json(ChatResponse {
        response,
        session_id,
    }))
}
