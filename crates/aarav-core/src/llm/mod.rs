//! Generation provider abstraction.
//!
//! The trait seam between core turn processing and concrete provider
//! clients (which live in aarav-infra).

pub mod box_provider;
pub mod provider;

pub use box_provider::BoxGenerationProvider;
pub use provider::GenerationProvider;
