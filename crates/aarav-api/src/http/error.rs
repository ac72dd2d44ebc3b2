//! Application error type mapping to HTTP status codes and wire bodies.
//!
//! The wire bodies are part of the endpoint contract:
//! - 400 `{"error": "Message is required"}` for missing/empty input
//! - 500 `{"error": "Sorry, I encountered an error. Please try again.",
//!   "details": "..."}` for provider or internal failures
//!
//! Failures are logged here, at the point where they leave the process;
//! none of them crash it, and the body is always well-formed JSON.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use aarav_types::error::TurnError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Turn processing failed (invalid input or provider failure).
    Turn(TurnError),
    /// Anything else unexpected.
    Internal(String),
}

impl From<TurnError> for AppError {
    fn from(e: TurnError) -> Self {
        AppError::Turn(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Turn(TurnError::InvalidInput) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Message is required" })),
            )
                .into_response(),
            AppError::Turn(TurnError::Provider(e)) => {
                error!(error = %e, "provider call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Sorry, I encountered an error. Please try again.",
                        "details": e.to_string(),
                    })),
                )
                    .into_response()
            }
            AppError::Internal(msg) => {
                error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Sorry, I encountered an error. Please try again.",
                        "details": msg,
                    })),
                )
                    .into_response()
            }
        }
    }
}
