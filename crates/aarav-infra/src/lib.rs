//! Infrastructure implementations for the Aarav relay.
//!
//! Concrete generation provider clients and configuration loading.
//! Everything here implements trait seams defined in aarav-core.

pub mod config;
pub mod llm;
