//! # Session Handle
//!
//! The raw, cloneable sender side of the session channel. It turns each call
//! into a [`SessionRequest`] and waits on the oneshot reply. Domain code
//! normally goes through [`SessionClient`](crate::clients::SessionClient),
//! which wraps this handle and maps its errors.

use tokio::sync::{mpsc, oneshot};

use crate::catalog::CatalogQuery;
use crate::model::{SessionId, SessionSnapshot};
use crate::session_actor::{BasketAction, SessionUpdate};

use super::error::FrameworkError;
use super::message::{Response, SessionRequest};

#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionHandle {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    pub async fn open(&self, query: CatalogQuery) -> Result<SessionId, FrameworkError> {
        self.request(|respond_to| SessionRequest::Open { query, respond_to })
            .await
    }

    pub async fn snapshot(&self, id: SessionId) -> Result<SessionSnapshot, FrameworkError> {
        self.request(|respond_to| SessionRequest::Snapshot { id, respond_to })
            .await
    }

    pub async fn update(
        &self,
        id: SessionId,
        update: SessionUpdate,
    ) -> Result<SessionSnapshot, FrameworkError> {
        self.request(|respond_to| SessionRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn perform_action(
        &self,
        id: SessionId,
        action: BasketAction,
    ) -> Result<SessionSnapshot, FrameworkError> {
        self.request(|respond_to| SessionRequest::Basket {
            id,
            action,
            respond_to,
        })
        .await
    }

    pub async fn close(&self, id: SessionId) -> Result<(), FrameworkError> {
        self.request(|respond_to| SessionRequest::Close { id, respond_to })
            .await
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> SessionRequest,
    ) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
