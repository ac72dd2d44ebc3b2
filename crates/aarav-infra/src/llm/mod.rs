//! Generation provider clients.

pub mod gemini;

pub use gemini::GeminiProvider;
