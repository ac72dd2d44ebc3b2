//! BoxGenerationProvider -- object-safe dynamic dispatch wrapper.
//!
//! `GenerationProvider` uses RPITIT and cannot be a trait object
//! directly, so this module follows the usual three-step pattern:
//! 1. Define an object-safe `GenerationProviderDyn` trait with boxed
//!    futures
//! 2. Blanket-impl it for all `T: GenerationProvider`
//! 3. `BoxGenerationProvider` wraps `Box<dyn GenerationProviderDyn>` and
//!    delegates
//!
//! This lets the API hold a type-erased provider and lets tests inject
//! stub providers.

use std::future::Future;
use std::pin::Pin;

use aarav_types::error::ProviderError;
use aarav_types::provider::{GenerationRequest, GenerationResponse};

use super::provider::GenerationProvider;

/// Object-safe version of [`GenerationProvider`] with boxed futures.
pub trait GenerationProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResponse, ProviderError>> + Send + 'a>>;
}

/// Blanket implementation: any `GenerationProvider` is a `GenerationProviderDyn`.
impl<T: GenerationProvider> GenerationProviderDyn for T {
    fn name(&self) -> &str {
        GenerationProvider::name(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResponse, ProviderError>> + Send + 'a>> {
        Box::pin(self.generate(request))
    }
}

/// Type-erased generation provider.
pub struct BoxGenerationProvider {
    inner: Box<dyn GenerationProviderDyn + Send + Sync>,
}

impl BoxGenerationProvider {
    /// Wrap a concrete `GenerationProvider` in a type-erased box.
    pub fn new<T: GenerationProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    /// Human-readable provider name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Send a generation request and receive the full response.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ProviderError> {
        self.inner.generate_boxed(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider;

    impl GenerationProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<GenerationResponse, ProviderError> {
            Ok(GenerationResponse {
                text: Some(request.contents.clone()),
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_boxed_provider_delegates() {
        let provider = BoxGenerationProvider::new(EchoProvider);
        assert_eq!(provider.name(), "echo");

        let request = GenerationRequest {
            model: "test".to_string(),
            contents: "hello".to_string(),
            system_instruction: String::new(),
        };
        let response = provider.generate(&request).await.unwrap();
        assert_eq!(response.text.as_deref(), Some("hello"));
    }
}
