//! WebSocket session for a single echo exchange.
//!
//! A session is created by [`EchoSession::connect`], used for one send and
//! one receive, and released by [`EchoSession::close`]. `close` consumes the
//! session, so it can run at most once.

use std::{fmt, time::Duration};

use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{self, protocol::Message},
};

use crate::error::ClientError;

type ClientSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Upper bound for waiting on the peer's close reply.
const CLOSE_TIMEOUT: Duration = Duration::from_secs(5);

/// Lifecycle of an open session.
///
/// `Connected → Sent → Received → Closed`, with `Failed` reachable from any
/// step before `Closed`. A session only exists once the handshake succeeded,
/// so there is no connecting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Handshake completed, nothing sent yet
    Connected,

    /// Content sent, waiting for the reply
    Sent,

    /// First data message received
    Received,

    /// Close handshake done, connection released
    Closed,

    /// Send or receive failed, connection still to be closed
    Failed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Connected => "connected",
            SessionState::Sent => "sent",
            SessionState::Received => "received",
            SessionState::Closed => "closed",
            SessionState::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Single-use WebSocket connection.
pub struct EchoSession {
    socket: ClientSocket,
    state: SessionState,
}

impl EchoSession {
    /// Open a connection to `address`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Connect`] when the URI is malformed, the
    /// endpoint is unreachable, or the handshake fails.
    pub async fn connect(address: &str) -> Result<Self, ClientError> {
        tracing::debug!("Connecting to {}", address);

        let (socket, response) =
            connect_async(address)
                .await
                .map_err(|source| ClientError::Connect {
                    address: address.to_string(),
                    source,
                })?;

        tracing::info!(
            "Connected to {} (handshake status: {})",
            address,
            response.status()
        );

        Ok(Self {
            socket,
            state: SessionState::Connected,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Send `content` and wait for the reply.
    pub async fn exchange(&mut self, content: &str) -> Result<String, ClientError> {
        self.send_text(content).await?;
        self.receive_text().await
    }

    /// Send `content` as one text message.
    pub async fn send_text(&mut self, content: &str) -> Result<(), ClientError> {
        if let Err(e) = self.socket.send(Message::text(content.to_owned())).await {
            self.state = SessionState::Failed;
            return Err(ClientError::Send(e));
        }

        tracing::debug!("Sent {} bytes", content.len());
        self.state = SessionState::Sent;
        Ok(())
    }

    /// Wait for the next data message and return it as text.
    ///
    /// Control frames are skipped. A binary message is accepted when its
    /// payload is valid UTF-8.
    pub async fn receive_text(&mut self) -> Result<String, ClientError> {
        loop {
            let message = match self.socket.next().await {
                Some(Ok(message)) => message,
                Some(Err(e)) => {
                    self.state = SessionState::Failed;
                    return Err(ClientError::Receive(e));
                }
                None => {
                    self.state = SessionState::Failed;
                    return Err(ClientError::ClosedBeforeResponse);
                }
            };

            match message {
                Message::Text(text) => {
                    self.state = SessionState::Received;
                    return Ok(text.as_str().to_owned());
                }
                Message::Binary(data) => {
                    let len = data.len();
                    return match String::from_utf8(data.to_vec()) {
                        Ok(text) => {
                            tracing::debug!("Received binary message ({} bytes) as text", len);
                            self.state = SessionState::Received;
                            Ok(text)
                        }
                        Err(_) => {
                            self.state = SessionState::Failed;
                            Err(ClientError::NonUtf8Binary { len })
                        }
                    };
                }
                Message::Close(frame) => {
                    tracing::debug!("Peer closed the connection: {:?}", frame);
                    self.state = SessionState::Failed;
                    return Err(ClientError::ClosedBeforeResponse);
                }
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {
                    tracing::trace!("Skipping control frame");
                }
            }
        }
    }

    /// Run the close handshake and release the connection.
    ///
    /// Failures are logged, not returned: by the time a session is closed
    /// the outcome of the run is already decided.
    pub async fn close(mut self) {
        tracing::debug!("Closing session (state: {})", self.state);

        match self.socket.close(None).await {
            Ok(()) => {
                let drained = tokio::time::timeout(CLOSE_TIMEOUT, async {
                    while let Some(Ok(message)) = self.socket.next().await {
                        if !message.is_close() {
                            tracing::debug!("Discarding message received while closing");
                        }
                    }
                })
                .await;

                if drained.is_err() {
                    tracing::warn!("Timed out waiting for close reply");
                }
            }
            Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {}
            Err(e) => tracing::warn!("Failed to close connection: {}", e),
        }

        self.state = SessionState::Closed;
        tracing::info!("Session {}", self.state);
    }
}
