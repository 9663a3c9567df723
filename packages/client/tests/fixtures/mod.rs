//! In-process WebSocket test server.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{accept_async, tungstenite::protocol::Message};

/// How the server answers each data message.
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Reply with the same message
    Echo,
    /// Reply with the same message twice
    EchoTwice,
    /// Send a ping, then reply with the same message
    PingThenEcho,
    /// Reply with a fixed binary payload
    Binary(Vec<u8>),
    /// Close the connection without replying
    Close,
    /// Drop the TCP stream without a close frame
    Drop,
}

#[derive(Debug, Default)]
struct Stats {
    connections: AtomicUsize,
    close_frames: AtomicUsize,
    finished: AtomicUsize,
}

pub struct TestServer {
    addr: SocketAddr,
    stats: Arc<Stats>,
}

impl TestServer {
    /// Start a server on an ephemeral port.
    pub async fn start(behavior: Behavior) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let stats = Arc::new(Stats::default());

        let server_stats = stats.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                server_stats.connections.fetch_add(1, Ordering::SeqCst);
                tokio::spawn(handle(stream, behavior.clone(), server_stats.clone()));
            }
        });

        Self { addr, stats }
    }

    pub fn url(&self) -> String {
        format!("ws://{}/", self.addr)
    }

    pub fn connections(&self) -> usize {
        self.stats.connections.load(Ordering::SeqCst)
    }

    pub fn close_frames(&self) -> usize {
        self.stats.close_frames.load(Ordering::SeqCst)
    }

    /// Wait until `count` connections have ended on the server side.
    pub async fn wait_finished(&self, count: usize) {
        let wait = async {
            while self.stats.finished.load(Ordering::SeqCst) < count {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        };
        tokio::time::timeout(Duration::from_secs(5), wait)
            .await
            .expect("server connections did not finish in time");
    }
}

async fn handle(stream: TcpStream, behavior: Behavior, stats: Arc<Stats>) {
    let Ok(mut ws) = accept_async(stream).await else {
        stats.finished.fetch_add(1, Ordering::SeqCst);
        return;
    };

    while let Some(Ok(message)) = ws.next().await {
        match message {
            Message::Close(_) => {
                stats.close_frames.fetch_add(1, Ordering::SeqCst);
            }
            Message::Text(_) | Message::Binary(_) => {
                let sent = match &behavior {
                    Behavior::Echo => ws.send(message).await,
                    Behavior::EchoTwice => match ws.send(message.clone()).await {
                        Ok(()) => ws.send(message).await,
                        Err(e) => Err(e),
                    },
                    Behavior::PingThenEcho => match ws.send(Message::Ping(Vec::new().into())).await {
                        Ok(()) => ws.send(message).await,
                        Err(e) => Err(e),
                    },
                    Behavior::Binary(data) => ws.send(Message::Binary(data.clone().into())).await,
                    Behavior::Close => ws.close(None).await,
                    Behavior::Drop => {
                        drop(ws);
                        stats.finished.fetch_add(1, Ordering::SeqCst);
                        return;
                    }
                };
                if sent.is_err() {
                    break;
                }
            }
            _ => {}
        }
    }

    stats.finished.fetch_add(1, Ordering::SeqCst);
}
