//! GenerationProvider trait definition.
//!
//! The single external collaborator of the turn processor. Uses native
//! async fn in traits (RPITIT, Rust 2024 edition); the object-safe
//! wrapper lives in [`super::box_provider`].

use aarav_types::error::ProviderError;
use aarav_types::provider::{GenerationRequest, GenerationResponse};

/// Trait for generation provider backends.
///
/// Implementations live in aarav-infra (e.g., `GeminiProvider`). The call
/// is the sole I/O-bound suspension point of a chat turn; implementations
/// are expected to bound it with a timeout and surface the timeout as a
/// [`ProviderError`].
pub trait GenerationProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a generation request and receive the full response.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationResponse, ProviderError>> + Send;
}
