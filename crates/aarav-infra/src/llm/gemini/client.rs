//! GeminiProvider -- concrete [`GenerationProvider`] for Google Gemini.
//!
//! Sends requests to the `generateContent` REST endpoint with header
//! authentication. The API key is wrapped in [`secrecy::SecretString`]
//! and is never logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use aarav_core::llm::GenerationProvider;
use aarav_types::error::ProviderError;
use aarav_types::provider::{GenerationRequest, GenerationResponse};

use super::types::{GeminiContent, GeminiRequest};

/// Google Gemini generation provider.
///
/// # API key security
///
/// The key is stored as a [`SecretString`] and only exposed when building
/// the request header. It never appears in Debug output or tracing logs;
/// the struct deliberately does not derive `Debug`.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given call deadline.
    ///
    /// A call that exceeds `timeout` surfaces as
    /// [`ProviderError::Timeout`] and is handled like any other provider
    /// failure.
    pub fn new(api_key: SecretString, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }

    /// Override the base URL (useful for tests or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full endpoint URL for a model.
    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Convert the generic [`GenerationRequest`] into the wire body.
    fn to_gemini_request(request: &GenerationRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::text(request.contents.clone())],
            system_instruction: Some(GeminiContent::text(
                request.system_instruction.clone(),
            )),
        }
    }
}

impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ProviderError> {
        let body = Self::to_gemini_request(request);
        let url = self.url(&request.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<GenerationResponse>()
            .await
            .map_err(|e| ProviderError::Deserialization(e.to_string()))
    }
}
