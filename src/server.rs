//! HTTP server initialization and runtime setup.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;
use crate::version::GitVersionProvider;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Git-backed version provider
/// - Axum HTTP server with the block page fallback route
///
/// The asset host address is taken from `SERVER_ADDR` when set, otherwise
/// from the bound socket. When binding to a wildcard address the wildcard
/// would end up in rendered asset URLs, so `SERVER_ADDR` should be set in
/// that case.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let version = Arc::new(GitVersionProvider::new(
        &config.version_repo,
        Duration::from_millis(config.version_timeout_ms),
    ));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    let local_addr = listener.local_addr()?;

    let server_addr = config
        .server_addr
        .clone()
        .unwrap_or_else(|| local_addr.ip().to_string());

    let state = AppState {
        version,
        server_addr,
    };

    let app = app_router(state);

    tracing::info!("Listening on http://{local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
        return;
    }
    tracing::info!("Shutting down");
}
