//! Terminal-facing commands.

pub mod chat;
pub mod health;
