//! Axum HTTP front for the analyzer
//!
//! Serves the same wire shape as the original hosted deployment:
//! `POST /analyzeQuote` for analysis and `GET /hello` as a liveness probe.
//! No auth or rate limiting; a malformed request body degrades to empty
//! quote text instead of an error status.

mod routes;

use crate::analyzer::QuoteAnalyzer;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Shared server state
pub(crate) struct AppState {
    pub analyzer: QuoteAnalyzer,
}

/// Start the server and block until shutdown (ctrl-c)
pub async fn start_server(host: &str, port: u16, analyzer: QuoteAnalyzer) -> Result<()> {
    let state = Arc::new(AppState { analyzer });
    let app = routes::router(state);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid bind address {host}:{port}"))?;
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    log::info!("frontle listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        log::info!("shutdown signal received, stopping server");
    }
}
