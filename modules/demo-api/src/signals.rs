//! Termination signal handling for graceful shutdown.

use tokio::signal;

/// Wait until the process receives Ctrl+C or (on unix) SIGTERM.
///
/// Signal handler installation failures are logged and treated as "never
/// fires" rather than aborting the server.
pub async fn wait_for_shutdown() {
    tokio::select! {
        () = wait_ctrl_c() => {},
        () = wait_sigterm() => {},
    }
    tracing::info!("shutdown signal received, draining in-flight requests");
}

async fn wait_ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(%e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("received Ctrl+C");
}

#[cfg(unix)]
async fn wait_sigterm() {
    let Ok(mut sigterm) = signal::unix::signal(signal::unix::SignalKind::terminate()) else {
        tracing::error!("failed to install SIGTERM handler");
        std::future::pending::<()>().await;
        return;
    };
    sigterm.recv().await;
    tracing::info!("received SIGTERM");
}

#[cfg(not(unix))]
async fn wait_sigterm() {
    std::future::pending::<()>().await;
}
