//! Interactive terminal chat client.

mod loop_runner;
mod renderer;

pub use loop_runner::run_chat_loop;
