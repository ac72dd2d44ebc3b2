use thiserror::Error;

/// Errors from generation provider calls.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Http(String),

    #[error("provider returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("provider call timed out")]
    Timeout,

    #[error("failed to parse provider response: {0}")]
    Deserialization(String),
}

/// Errors from processing a chat turn.
///
/// A `Provider` error means no assistant turn was appended: the transcript
/// ends on the user message, so the client can retry the same turn.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("message is required")]
    InvalidInput,

    #[error("generation provider failed: {0}")]
    Provider(#[from] ProviderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Api {
            status: 429,
            body: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "provider returned HTTP 429: quota exceeded");
    }

    #[test]
    fn test_turn_error_from_provider_error() {
        let err: TurnError = ProviderError::Timeout.into();
        assert!(matches!(err, TurnError::Provider(ProviderError::Timeout)));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_invalid_input_display() {
        assert_eq!(TurnError::InvalidInput.to_string(), "message is required");
    }
}
