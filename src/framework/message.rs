//! # Session Messages
//!
//! The request enum sent from a [`SessionHandle`](super::SessionHandle) to the
//! [`SessionActor`](super::SessionActor). Each variant carries a oneshot
//! sender for the reply.

use tokio::sync::oneshot;

use crate::catalog::CatalogQuery;
use crate::model::{SessionId, SessionSnapshot};
use crate::session_actor::{BasketAction, SessionUpdate};

use super::error::FrameworkError;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// Every variant that changes state replies with the snapshot taken right
/// after the change, so the caller never has to issue a second read.
#[derive(Debug)]
pub enum SessionRequest {
    Open {
        query: CatalogQuery,
        respond_to: Response<SessionId>,
    },
    Snapshot {
        id: SessionId,
        respond_to: Response<SessionSnapshot>,
    },
    Update {
        id: SessionId,
        update: SessionUpdate,
        respond_to: Response<SessionSnapshot>,
    },
    Basket {
        id: SessionId,
        action: BasketAction,
        respond_to: Response<SessionSnapshot>,
    },
    Close {
        id: SessionId,
        respond_to: Response<()>,
    },
}
