//! Command-line arguments.

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::domain::{DEFAULT_ADDRESS, EchoRequest, WorkMode};

/// Send one message to a WebSocket endpoint and print the reply.
#[derive(Debug, Clone, Parser)]
#[command(name = "wsecho", version, about)]
pub struct Cli {
    /// WebSocket address
    #[arg(long, default_value = DEFAULT_ADDRESS)]
    pub address: String,

    /// Work mode
    #[arg(long, value_enum, default_value_t = WorkMode::Echo)]
    pub mode: WorkMode,

    /// Log level for diagnostics on stderr (overridden by RUST_LOG)
    #[arg(long, default_value_t = LevelFilter::WARN)]
    pub log_level: LevelFilter,

    /// Content to send
    pub content: String,
}

impl Cli {
    /// Build the echo request described by these arguments.
    pub fn echo_request(&self) -> EchoRequest {
        EchoRequest::new(self.address.clone(), self.content.clone())
    }
}
