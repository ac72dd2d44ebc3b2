//! Chat turn processing and the system prompt.

pub mod processor;
pub mod prompt;

pub use processor::TurnProcessor;
