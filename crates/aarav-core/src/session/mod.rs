//! Per-session transcript storage.

pub mod store;

pub use store::SessionStore;
