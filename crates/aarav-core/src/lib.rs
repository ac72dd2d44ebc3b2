//! Core conversation logic for the Aarav relay.
//!
//! Holds the session store, the turn processor, the generation provider
//! trait seam, and the system prompt builder. This crate never depends on
//! aarav-infra; concrete provider clients are injected from above.

pub mod chat;
pub mod llm;
pub mod session;
