//! # Session Client
//!
//! The presentation boundary. Every user action (typing in the search box,
//! picking a sort option, toggling the stock filter, clicking add or remove)
//! maps to one method here, and every method returns the snapshot to render.
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::catalog::{CatalogQuery, SortKey};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, SessionHandle};
use crate::model::{ProductId, SessionId, SessionSnapshot};
use crate::session_actor::{BasketAction, SessionError, SessionUpdate};

/// Client for interacting with the Session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: SessionHandle,
}

impl SessionClient {
    pub fn new(inner: SessionHandle) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient for SessionClient {
    fn inner(&self) -> &SessionHandle {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> SessionError {
        match e {
            FrameworkError::Rejected(e) => e,
            FrameworkError::NotFound(id) => SessionError::NotFound(id),
            other => SessionError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl SessionClient {
    #[instrument(skip(self))]
    pub async fn open_session(&self, query: CatalogQuery) -> Result<SessionId, SessionError> {
        debug!("Sending request");
        self.inner.open(query).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn set_search_term(
        &self,
        id: SessionId,
        text: String,
    ) -> Result<SessionSnapshot, SessionError> {
        self.update(id, SessionUpdate::search_term(text)).await
    }

    #[instrument(skip(self))]
    pub async fn set_sort_key(
        &self,
        id: SessionId,
        key: SortKey,
    ) -> Result<SessionSnapshot, SessionError> {
        self.update(id, SessionUpdate::sort_key(key)).await
    }

    #[instrument(skip(self))]
    pub async fn set_stock_only(
        &self,
        id: SessionId,
        flag: bool,
    ) -> Result<SessionSnapshot, SessionError> {
        self.update(id, SessionUpdate::stock_only(flag)).await
    }

    /// Applies several query changes as one event.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: SessionId,
        update: SessionUpdate,
    ) -> Result<SessionSnapshot, SessionError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Adds one unit of a product to the basket.
    ///
    /// Fails with [`SessionError::OutOfStock`] for products with no stock and
    /// [`SessionError::UnknownProduct`] for ids outside the catalog.
    #[instrument(skip(self))]
    pub async fn add_to_basket(
        &self,
        id: SessionId,
        product_id: ProductId,
    ) -> Result<SessionSnapshot, SessionError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, BasketAction::Add(product_id))
            .await
            .map_err(Self::map_error)
    }

    /// Removes one unit of a product from the basket.
    #[instrument(skip(self))]
    pub async fn remove_from_basket(
        &self,
        id: SessionId,
        product_id: ProductId,
    ) -> Result<SessionSnapshot, SessionError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, BasketAction::Remove(product_id))
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, next_request};
    use crate::framework::SessionRequest;
    use rust_decimal::Decimal;

    fn empty_snapshot(id: SessionId) -> SessionSnapshot {
        SessionSnapshot {
            session_id: id,
            query: CatalogQuery::default(),
            visible_products: Vec::new(),
            result_indicator: "0 Products".to_string(),
            basket_entries: Vec::new(),
            basket_total: Decimal::ZERO,
        }
    }

    #[tokio::test]
    async fn set_search_term_sends_partial_update() {
        let (handle, mut receiver) = create_mock_client(10);
        let client = SessionClient::new(handle);

        let task = tokio::spawn(async move {
            client
                .set_search_term(SessionId(1), "lamp".to_string())
                .await
        });

        match next_request(&mut receiver).await {
            Some(SessionRequest::Update {
                id,
                update,
                respond_to,
            }) => {
                assert_eq!(id, SessionId(1));
                assert_eq!(update, SessionUpdate::search_term("lamp"));
                respond_to.send(Ok(empty_snapshot(id))).unwrap();
            }
            other => panic!("Expected Update request, got {other:?}"),
        }

        let snapshot = task.await.unwrap().unwrap();
        assert_eq!(snapshot.session_id, SessionId(1));
    }

    #[tokio::test]
    async fn add_to_basket_sends_add_action() {
        let (handle, mut receiver) = create_mock_client(10);
        let client = SessionClient::new(handle);

        let task =
            tokio::spawn(async move { client.add_to_basket(SessionId(2), ProductId(7)).await });

        match next_request(&mut receiver).await {
            Some(SessionRequest::Basket {
                id,
                action,
                respond_to,
            }) => {
                assert_eq!(id, SessionId(2));
                assert_eq!(action, BasketAction::Add(ProductId(7)));
                respond_to.send(Ok(empty_snapshot(id))).unwrap();
            }
            other => panic!("Expected Basket request, got {other:?}"),
        }

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn rejection_surfaces_as_session_error() {
        let (handle, mut receiver) = create_mock_client(10);
        let client = SessionClient::new(handle);

        let task =
            tokio::spawn(async move { client.add_to_basket(SessionId(1), ProductId(2)).await });

        if let Some(SessionRequest::Basket { respond_to, .. }) = next_request(&mut receiver).await
        {
            respond_to
                .send(Err(FrameworkError::Rejected(SessionError::OutOfStock(
                    ProductId(2),
                ))))
                .unwrap();
        } else {
            panic!("Expected Basket request");
        }

        let result = task.await.unwrap();
        assert_eq!(result, Err(SessionError::OutOfStock(ProductId(2))));
    }

    #[tokio::test]
    async fn closed_actor_maps_to_communication_error() {
        let (handle, receiver) = create_mock_client(1);
        drop(receiver);
        let client = SessionClient::new(handle);

        let result = client.snapshot(SessionId(1)).await;
        match result {
            Err(SessionError::ActorCommunicationError(msg)) => {
                assert!(msg.contains("Actor closed"))
            }
            other => panic!("Expected ActorCommunicationError, got {other:?}"),
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn update_is_logged_inside_its_own_span() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (handle, mut receiver) = create_mock_client(10);
        let client = SessionClient::new(handle);

        let responder = async {
            if let Some(SessionRequest::Update { id, respond_to, .. }) =
                next_request(&mut receiver).await
            {
                respond_to.send(Ok(empty_snapshot(id))).unwrap();
            }
        };
        let (result, ()) = tokio::join!(
            client.update(SessionId(4), SessionUpdate::stock_only(true)),
            responder
        );
        assert!(result.is_ok());

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        let line = output
            .lines()
            .find(|line| line.contains("Sending request"))
            .expect("no request logged");
        assert!(line.contains("update{"), "{line}");
        assert!(line.contains("stock_only: Some(true)"), "{line}");
    }

    #[test]
    fn not_found_keeps_session_id() {
        let mapped = SessionClient::map_error(FrameworkError::NotFound(SessionId(9)));
        assert_eq!(mapped, SessionError::NotFound(SessionId(9)));
    }
}
