//! In-memory session store mapping session ids to transcripts.
//!
//! The store is shared mutable state across all concurrent request tasks.
//! Each transcript sits behind its own `tokio::sync::Mutex`, so turns on
//! one session serialize while distinct sessions proceed fully in
//! parallel; there is no global lock.
//!
//! The store lives for the process lifetime: sessions are never evicted
//! or expired (an explicit boundary of the design, not a defect).

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::info;

use aarav_types::chat::{Transcript, Turn};

/// Shared handle to one session's transcript.
pub type SessionHandle = Arc<Mutex<Transcript>>;

/// Owns every session's transcript, keyed by opaque session id.
///
/// Constructed once at process start and passed by reference (via `Arc`)
/// to whatever needs it; never accessed as ambient global state.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<String, SessionHandle>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the transcript handle for `session_id`, creating an empty
    /// one on first reference. Never fails; idempotent for unseen ids.
    pub fn get_or_create(&self, session_id: &str) -> SessionHandle {
        if let Some(existing) = self.sessions.get(session_id) {
            return Arc::clone(&*existing);
        }

        // entry() re-checks under the shard lock, so two racing callers
        // both end up with the same handle.
        let handle = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                info!(session_id, "new session created");
                Arc::new(Mutex::new(Transcript::new()))
            });
        Arc::clone(&*handle)
    }

    /// Append a turn to the session's transcript, creating the session if
    /// needed. The transcript enforces the retention cap on push.
    pub async fn append(&self, session_id: &str, turn: Turn) {
        let handle = self.get_or_create(session_id);
        let mut transcript = handle.lock().await;
        transcript.push(turn);
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Cloned snapshot of a session's turns, if the session exists.
    pub async fn transcript_snapshot(&self, session_id: &str) -> Option<Vec<Turn>> {
        let handle = Arc::clone(&*self.sessions.get(session_id)?);
        let transcript = handle.lock().await;
        Some(transcript.to_vec())
    }
}
