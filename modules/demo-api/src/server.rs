//! Server runner: bind, serve, drain on shutdown signal.

use std::time::Duration;

use anyhow::{Context as _, Result};

use crate::api::rest::{AppState, router};
use crate::config::AppConfig;
use crate::signals;

/// Run the HTTP server until a termination signal arrives.
///
/// # Errors
/// Returns an error if the configured address cannot be resolved or bound,
/// or if the server loop fails.
pub async fn run(config: AppConfig) -> Result<()> {
    let addr = config.server.bind_addr()?;
    let request_timeout = Duration::from_secs(config.server.request_timeout_secs);

    let state = AppState::new();
    let app = router(state, request_timeout);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to address {addr}"))?;
    let local_addr = listener.local_addr().context("failed to read bound address")?;
    tracing::info!(addr = %local_addr, "demo API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(signals::wait_for_shutdown())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}
