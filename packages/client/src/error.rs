//! Client error definitions.

use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Errors related to work mode parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkModeError {
    /// Unknown mode name
    #[error("Unsupported mode: '{0}' (supported: echo)")]
    Unsupported(String),
}

/// Errors that end a client run
#[derive(Debug, Error)]
pub enum ClientError {
    /// Endpoint unreachable, refused, malformed URI or handshake failure
    #[error("Failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: tungstenite::Error,
    },

    /// Connection dropped while sending
    #[error("Failed to send message: {0}")]
    Send(#[source] tungstenite::Error),

    /// Connection dropped while waiting for the response
    #[error("Failed to receive message: {0}")]
    Receive(#[source] tungstenite::Error),

    /// Peer closed the connection before any data message arrived
    #[error("Connection closed before a response was received")]
    ClosedBeforeResponse,

    /// Binary response that cannot be printed as text
    #[error("Received non-UTF-8 binary response ({len} bytes)")]
    NonUtf8Binary { len: usize },

    /// Writing the result to stdout failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
