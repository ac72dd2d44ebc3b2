//! Shared domain types for the Aarav conversational relay.
//!
//! This crate holds the pure data shapes used across the workspace:
//! transcripts and turns, provider wire types, error taxonomy, and
//! configuration. No business logic and no I/O live here.

pub mod chat;
pub mod config;
pub mod error;
pub mod provider;
