//! One-shot WebSocket echo client.
//!
//! Sends CONTENT to the endpoint, prints the reply and then `exit`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin wsecho -- --address ws://127.0.0.1:9003/ hello
//! ```

use clap::Parser;
use wsecho_client::Cli;
use wsecho_shared::logger::setup_logger;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Argument errors exit here, before any network activity
    let cli = Cli::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), cli.log_level);

    // Process-wide TLS provider for wss:// endpoints
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("TLS crypto provider already installed");
    }

    // Run the client
    if let Err(e) = wsecho_client::run_client(cli).await {
        tracing::error!("Client error: {}", e);
        // Log filters may drop the line above, the user still gets a message
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
