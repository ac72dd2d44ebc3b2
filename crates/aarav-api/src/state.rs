//! Application state wiring the store, processor, and provider together.
//!
//! The session store and turn processor are constructed once at process
//! start and shared by reference; nothing here is ambient global state.

use std::sync::Arc;
use std::time::Duration;

use aarav_core::chat::TurnProcessor;
use aarav_core::llm::BoxGenerationProvider;
use aarav_core::session::SessionStore;
use aarav_infra::config::api_key_from_env;
use aarav_infra::llm::GeminiProvider;
use aarav_types::config::AppConfig;

/// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<TurnProcessor>,
    pub store: Arc<SessionStore>,
}

impl AppState {
    /// Wire state from pre-built parts (used directly by tests).
    pub fn new(store: Arc<SessionStore>, provider: BoxGenerationProvider, model: String) -> Self {
        let processor = Arc::new(TurnProcessor::new(Arc::clone(&store), provider, model));
        Self { processor, store }
    }

    /// Initialize production state: provider credential from the
    /// environment, Gemini client, fresh session store.
    pub fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let api_key = api_key_from_env().ok_or_else(|| {
            anyhow::anyhow!(
                "no provider credential found; set GEMINI_API_KEY (or GOOGLE_API_KEY)"
            )
        })?;

        let provider = GeminiProvider::new(
            api_key,
            Duration::from_secs(config.request_timeout_secs),
        );

        Ok(Self::new(
            Arc::new(SessionStore::new()),
            BoxGenerationProvider::new(provider),
            config.model.clone(),
        ))
    }
}
