//! Turn processor: the chat-turn protocol over the session store.
//!
//! A turn is: validate input, append the user turn, send the flattened
//! transcript plus the system instruction to the generation provider,
//! append the reply, return it. The session's lock is held across the
//! whole sequence, so two turns on the same session can never interleave
//! their appends; turns on distinct sessions run concurrently.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};

use aarav_types::chat::Turn;
use aarav_types::error::TurnError;
use aarav_types::provider::{extract_reply, GenerationRequest, FALLBACK_REPLY};

use crate::llm::BoxGenerationProvider;
use crate::session::SessionStore;

use super::prompt::system_instruction;

/// Processes chat turns against an injected store and provider.
pub struct TurnProcessor {
    store: Arc<SessionStore>,
    provider: BoxGenerationProvider,
    model: String,
}

impl TurnProcessor {
    /// Create a new turn processor.
    pub fn new(store: Arc<SessionStore>, provider: BoxGenerationProvider, model: String) -> Self {
        Self {
            store,
            provider,
            model,
        }
    }

    /// Access the session store.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Process one user utterance for a session and return the reply.
    ///
    /// On a provider failure no assistant turn is appended: the
    /// transcript ends on the just-submitted user message, so a retry
    /// continues from the same point. A successful call whose response
    /// yields no recognizable text appends [`FALLBACK_REPLY`] instead
    /// (soft failure).
    pub async fn handle_turn(
        &self,
        session_id: &str,
        user_text: &str,
    ) -> Result<String, TurnError> {
        let user_text = user_text.trim();
        if user_text.is_empty() {
            return Err(TurnError::InvalidInput);
        }

        let handle = self.store.get_or_create(session_id);

        // Hold the session lock across the provider await: this is what
        // serializes concurrent turns on one session.
        let mut transcript = handle.lock().await;

        transcript.push(Turn::user(user_text));

        let request = GenerationRequest {
            model: self.model.clone(),
            contents: transcript.flatten(),
            system_instruction: system_instruction(Utc::now()),
        };

        let started = Instant::now();
        let response = self.provider.generate(&request).await?;

        let reply = match extract_reply(&response) {
            Some(text) => text,
            None => {
                warn!(
                    session_id,
                    provider = self.provider.name(),
                    "provider response had no recognizable text, using fallback"
                );
                FALLBACK_REPLY.to_string()
            }
        };

        transcript.push(Turn::assistant(reply.clone()));

        info!(
            session_id,
            provider = self.provider.name(),
            turns = transcript.len(),
            reply_len = reply.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "turn completed"
        );

        Ok(reply)
    }
}
