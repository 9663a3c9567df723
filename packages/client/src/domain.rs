//! Invocation parameters of a client run.
//!
//! Both types are created once from command-line input and never change
//! afterwards.

use std::{fmt, str::FromStr};

use clap::ValueEnum;

use crate::error::WorkModeError;

/// Default WebSocket endpoint.
pub const DEFAULT_ADDRESS: &str = "ws://127.0.0.1:9003/";

/// Work mode of the client.
///
/// Only `echo` exists today. Callers match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WorkMode {
    /// Send one message, receive one message, print it
    #[default]
    Echo,
}

impl WorkMode {
    /// Get the mode name as used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::Echo => "echo",
        }
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkMode {
    type Err = WorkModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "echo" => Ok(WorkMode::Echo),
            other => Err(WorkModeError::Unsupported(other.to_string())),
        }
    }
}

/// A single echo exchange: where to connect and what to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoRequest {
    address: String,
    content: String,
}

impl EchoRequest {
    /// Create a new EchoRequest.
    ///
    /// The address is not validated here; a malformed URI surfaces as a
    /// connection error.
    pub fn new(address: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            content: content.into(),
        }
    }

    /// Target WebSocket URI.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Payload to send as one text message.
    pub fn content(&self) -> &str {
        &self.content
    }
}
