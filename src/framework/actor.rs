//! # Session Actor
//!
//! The "server" half of the session plumbing. It owns every open
//! [`Session`] and the receiver end of the channel, and handles one request
//! at a time. Because nothing else can touch the sessions, no `Mutex` is
//! needed: each event reads the current state, computes the next one and
//! replies with a snapshot before the next message is taken off the queue.
//!
//! # Usage Pattern
//!
//! 1.  **Create**: call [`SessionActor::new`] to get the actor and its [`SessionHandle`].
//! 2.  **Run**: spawn `actor.run(catalog)` in a background task.
//! 3.  **Use**: send requests through the handle (or a [`SessionClient`](crate::clients::SessionClient)).
//!
//! ```rust
//! use catalog_browser::catalog::{Catalog, CatalogQuery};
//! use catalog_browser::framework::SessionActor;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, handle) = SessionActor::new(8);
//!     tokio::spawn(actor.run(Arc::new(Catalog::default())));
//!
//!     let id = handle.open(CatalogQuery::default()).await.unwrap();
//!     let snapshot = handle.snapshot(id).await.unwrap();
//!     assert_eq!(snapshot.result_indicator, "0 Products");
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::model::SessionId;
use crate::session_actor::Session;

use super::client::SessionHandle;
use super::error::FrameworkError;
use super::message::SessionRequest;

pub struct SessionActor {
    receiver: mpsc::Receiver<SessionRequest>,
    sessions: HashMap<SessionId, Session>,
    next_id: u32,
}

impl SessionActor {
    /// Creates a new `SessionActor` and its associated `SessionHandle`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. When it is full,
    ///   callers wait until the actor catches up.
    pub fn new(buffer_size: usize) -> (Self, SessionHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            sessions: HashMap::new(),
            next_id: 1,
        };
        (actor, SessionHandle::new(sender))
    }

    /// Runs the event loop until every handle has been dropped.
    ///
    /// The catalog is injected here rather than in [`SessionActor::new`] so the
    /// actor can be created before the data is loaded.
    pub async fn run(mut self, catalog: Arc<Catalog>) {
        info!(products = catalog.len(), "Session actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Open { query, respond_to } => {
                    debug!(?query, "Open");
                    let id = SessionId(self.next_id);
                    self.next_id += 1;

                    let session = Session::open(id, Arc::clone(&catalog), query);
                    info!(
                        session_id = %id,
                        visible = session.visible().len(),
                        open_sessions = self.sessions.len() + 1,
                        "Opened"
                    );
                    self.sessions.insert(id, session);
                    let _ = respond_to.send(Ok(id));
                }
                SessionRequest::Snapshot { id, respond_to } => {
                    let result = self
                        .sessions
                        .get(&id)
                        .map(Session::snapshot)
                        .ok_or(FrameworkError::NotFound(id));
                    debug!(session_id = %id, found = result.is_ok(), "Snapshot");
                    let _ = respond_to.send(result);
                }
                SessionRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(session_id = %id, ?update, "Update");
                    let Some(session) = self.sessions.get_mut(&id) else {
                        warn!(session_id = %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id)));
                        continue;
                    };
                    if session.apply_update(update) {
                        info!(
                            session_id = %id,
                            search_term = %session.query().search_term,
                            sort_key = %session.query().sort_key,
                            stock_only = session.query().stock_only,
                            visible = session.visible().len(),
                            "Query updated"
                        );
                    }
                    let _ = respond_to.send(Ok(session.snapshot()));
                }
                SessionRequest::Basket {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(session_id = %id, ?action, "Basket");
                    let Some(session) = self.sessions.get_mut(&id) else {
                        warn!(session_id = %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id)));
                        continue;
                    };
                    let result = match session.handle_action(action) {
                        Ok(changed) => {
                            if changed {
                                info!(
                                    session_id = %id,
                                    basket_entries = session.basket().len(),
                                    basket_total = %session.basket().total(),
                                    "Basket updated"
                                );
                            }
                            Ok(session.snapshot())
                        }
                        Err(e) => {
                            warn!(session_id = %id, error = %e, "Basket action rejected");
                            Err(FrameworkError::Rejected(e))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                SessionRequest::Close { id, respond_to } => {
                    debug!(session_id = %id, "Close");
                    match self.sessions.remove(&id) {
                        Some(session) => {
                            info!(
                                session_id = %id,
                                discarded_basket_entries = session.basket().len(),
                                open_sessions = self.sessions.len(),
                                "Closed"
                            );
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            warn!(session_id = %id, "Not found");
                            let _ = respond_to.send(Err(FrameworkError::NotFound(id)));
                        }
                    }
                }
            }
        }

        info!(open_sessions = self.sessions.len(), "Shutdown");
    }
}
