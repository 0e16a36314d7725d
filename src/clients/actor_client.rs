use async_trait::async_trait;

use crate::framework::{FrameworkError, SessionHandle};
use crate::model::{SessionId, SessionSnapshot};
use crate::session_actor::SessionError;

/// Trait for session clients to inherit the read and close operations.
///
/// Implementors supply the raw handle and an error mapping; `snapshot` and
/// `close_session` come for free.
#[async_trait]
pub trait ActorClient: Send + Sync {
    /// Access the inner raw handle.
    fn inner(&self) -> &SessionHandle;

    /// Map framework errors to [`SessionError`].
    fn map_error(e: FrameworkError) -> SessionError;

    /// Fetch the current state of a session.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self, id: SessionId) -> Result<SessionSnapshot, SessionError> {
        tracing::debug!("Sending request");
        self.inner().snapshot(id).await.map_err(Self::map_error)
    }

    /// Close a session, discarding its basket.
    #[tracing::instrument(skip(self))]
    async fn close_session(&self, id: SessionId) -> Result<(), SessionError> {
        tracing::debug!("Sending request");
        self.inner().close(id).await.map_err(Self::map_error)
    }
}
