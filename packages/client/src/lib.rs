//! One-shot WebSocket client.
//!
//! Connects to an endpoint, sends one text message, prints the first reply
//! and closes the connection.

pub mod cli;
pub mod domain;
pub mod error;
pub mod runner;
pub mod session;

// Re-export entry points
pub use cli::Cli;
pub use runner::run_client;
