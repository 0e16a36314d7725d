use std::sync::Arc;

use tracing::{error, info};

use crate::catalog::Catalog;
use crate::clients::SessionClient;
use crate::error::BrowserError;

/// The runtime orchestrator for the catalog browser.
///
/// `BrowserSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the session actor
/// - **Dependency Wiring**: handing the shared catalog to the actor
///
/// # Example
///
/// ```ignore
/// let system = BrowserSystem::new(Arc::new(catalog), 32);
///
/// let session = system.session_client.open_session(CatalogQuery::default()).await?;
/// let snapshot = system.session_client.set_stock_only(session, true).await?;
///
/// system.shutdown().await?;
/// ```
pub struct BrowserSystem {
    /// Client for interacting with the Session actor
    pub session_client: SessionClient,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl BrowserSystem {
    /// Spawns the session actor with `catalog` injected as its context.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(catalog: Arc<Catalog>, channel_capacity: usize) -> Self {
        let (session_actor, session_client) = crate::session_actor::new(channel_capacity);
        let handle = tokio::spawn(session_actor.run(catalog));

        Self {
            session_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the channel; the actor drains what is
    /// queued, exits its loop, and the task is awaited. Clones of the client
    /// held elsewhere keep the actor alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), BrowserError> {
        info!("Shutting down system...");
        drop(self.session_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(BrowserError::Shutdown(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
