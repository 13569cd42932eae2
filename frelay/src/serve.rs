//! Shared serve entrypoint used by the binary and tests.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use fobserve::{
    FanoutKnowledgeHooks, MetricsObservabilityHooks, SafeKnowledgeHooks,
    TracingObservabilityHooks,
};
use fprovider::{KnowledgeHooks, Repertory};
use tokio::sync::oneshot;

use crate::RelayConfig;
use crate::registry::build_repertory;
use crate::router::{AppState, router};

/// Handle returned by [`serve`]: holds the bound address and shutdown trigger.
pub struct ServeHandle {
    /// The address the relay is listening on.
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    join: Option<tokio::task::JoinHandle<Result<(), std::io::Error>>>,
}

impl ServeHandle {
    /// Trigger graceful shutdown and wait for the server to stop.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(join) = self.join.take() {
            join.await??;
        }
        Ok(())
    }
}

/// Hooks installed by [`serve`]: tracing and metrics, panic-isolated.
pub fn default_hooks() -> Arc<dyn KnowledgeHooks> {
    Arc::new(SafeKnowledgeHooks::new(FanoutKnowledgeHooks::new(
        TracingObservabilityHooks,
        MetricsObservabilityHooks,
    )))
}

/// Build the repertory from `config`, bind `config.server.bind`, and start
/// serving in a spawned task.
pub async fn serve(config: &RelayConfig) -> Result<ServeHandle> {
    let repertory = build_repertory(config, default_hooks())?;
    serve_repertory(
        Arc::new(repertory),
        config.server.provider.as_str(),
        &config.server.bind,
    )
    .await
}

/// Serve an already-built repertory.
pub async fn serve_repertory(
    repertory: Arc<Repertory>,
    provider: &str,
    bind: &str,
) -> Result<ServeHandle> {
    let app = router(AppState::new(repertory, provider));
    let listener = tokio::net::TcpListener::bind(bind).await?;
    let addr = listener.local_addr()?;
    tracing::info!("relay listening on {addr} (provider '{provider}')");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                tracing::info!("received shutdown signal");
            })
            .await
    });

    Ok(ServeHandle {
        addr,
        shutdown_tx: Some(shutdown_tx),
        join: Some(join),
    })
}
