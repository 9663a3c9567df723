//! Client entry point.

use std::io::{self, Write};

use crate::{
    cli::Cli,
    domain::{EchoRequest, WorkMode},
    error::ClientError,
    session::EchoSession,
};

/// Completion marker printed after a successful run.
pub const COMPLETION_MARKER: &str = "exit";

/// Run the client with parsed command-line arguments, printing to stdout.
pub async fn run_client(cli: Cli) -> Result<(), ClientError> {
    let request = cli.echo_request();
    let mut stdout = io::stdout();
    run(cli.mode, &request, &mut stdout).await
}

/// Run `mode` for `request`, writing program output to `out`.
pub async fn run<W: Write>(
    mode: WorkMode,
    request: &EchoRequest,
    out: &mut W,
) -> Result<(), ClientError> {
    tracing::debug!("Running in {} mode", mode);

    match mode {
        WorkMode::Echo => echo(request, out).await,
    }
}

/// Send one message, print the reply, close, print the completion marker.
async fn echo<W: Write>(request: &EchoRequest, out: &mut W) -> Result<(), ClientError> {
    let mut session = EchoSession::connect(request.address()).await?;

    // The session is closed whatever the exchange returned
    let result = exchange_and_print(&mut session, request.content(), out).await;
    session.close().await;
    result?;

    writeln!(out, "{COMPLETION_MARKER}")?;
    out.flush()?;
    Ok(())
}

async fn exchange_and_print<W: Write>(
    session: &mut EchoSession,
    content: &str,
    out: &mut W,
) -> Result<(), ClientError> {
    let received = session.exchange(content).await?;
    writeln!(out, "{received}")?;
    out.flush()?;
    Ok(())
}
