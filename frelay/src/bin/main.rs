//! frelay binary entry point.
//!
//! Loads TOML configuration, builds the repertory, and runs the axum server
//! with graceful shutdown on ctrl-c.

use std::path::PathBuf;

use anyhow::Result;
use frelay::RelayConfig;
use frelay::config::CONFIG_FILE;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG, default info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = RelayConfig::load(&config_path)?;
    tracing::info!("loaded configuration from {}", config_path.display());

    let handle = frelay::serve(&config).await?;
    shutdown_signal().await;
    handle.shutdown().await?;

    tracing::info!("relay shut down");
    Ok(())
}

/// Wait for ctrl-c signal for graceful shutdown.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
    }
}
