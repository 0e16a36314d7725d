//! # Mock Session Actor
//!
//! Utilities for testing code that talks to the session actor without
//! spawning a real one.
//!
//! Two styles are supported:
//!
//! - [`MockClient`]: queue the replies you expect, hand out its
//!   [`SessionHandle`], then call [`MockClient::verify`].
//! - [`create_mock_client`]: get a handle plus the raw receiver and answer
//!   each [`SessionRequest`] by hand.
//!
//! ```rust
//! use catalog_browser::clients::{ActorClient, SessionClient};
//! use catalog_browser::framework::mock::MockClient;
//! use catalog_browser::model::SessionId;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::new();
//!     mock.expect_close(SessionId(4)).return_ok(());
//!
//!     let client = SessionClient::new(mock.client());
//!     client.close_session(SessionId(4)).await.unwrap();
//!     mock.verify();
//! }
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc;

use crate::model::{SessionId, SessionSnapshot};

use super::client::SessionHandle;
use super::error::FrameworkError;
use super::message::SessionRequest;

/// Represents an expected request and the reply to send back.
#[derive(Debug)]
enum Expectation {
    Open {
        response: Result<SessionId, FrameworkError>,
    },
    Snapshot {
        id: SessionId,
        response: Result<SessionSnapshot, FrameworkError>,
    },
    Update {
        id: SessionId,
        response: Result<SessionSnapshot, FrameworkError>,
    },
    Basket {
        id: SessionId,
        response: Result<SessionSnapshot, FrameworkError>,
    },
    Close {
        id: SessionId,
        response: Result<(), FrameworkError>,
    },
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    failures: Vec<String>,
}

type SharedState = Arc<Mutex<MockState>>;

fn lock(state: &SharedState) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A stand-in for [`SessionActor`](super::SessionActor) that answers from a
/// queue of expectations, in order.
///
/// A request that does not match the next expectation gets no reply (the
/// caller sees [`FrameworkError::ActorDropped`]) and is reported by
/// [`MockClient::verify`].
pub struct MockClient {
    handle: SessionHandle,
    state: SharedState,
    _task: tokio::task::JoinHandle<()>,
}

impl MockClient {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SessionRequest>(100);
        let state = SharedState::default();
        let task_state = Arc::clone(&state);

        let task = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = lock(&task_state);
                let expectation = state.expectations.pop_front();
                if let Err(failure) = answer(request, expectation) {
                    state.failures.push(failure);
                }
            }
        });

        Self {
            handle: SessionHandle::new(sender),
            state,
            _task: task,
        }
    }

    pub fn client(&self) -> SessionHandle {
        self.handle.clone()
    }

    pub fn expect_open(&mut self) -> ExpectationBuilder<SessionId> {
        self.builder(|response| Expectation::Open { response })
    }

    pub fn expect_snapshot(&mut self, id: SessionId) -> ExpectationBuilder<SessionSnapshot> {
        self.builder(move |response| Expectation::Snapshot { id, response })
    }

    pub fn expect_update(&mut self, id: SessionId) -> ExpectationBuilder<SessionSnapshot> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_action(&mut self, id: SessionId) -> ExpectationBuilder<SessionSnapshot> {
        self.builder(move |response| Expectation::Basket { id, response })
    }

    pub fn expect_close(&mut self, id: SessionId) -> ExpectationBuilder<()> {
        self.builder(move |response| Expectation::Close { id, response })
    }

    /// Panics if an expectation was not consumed or a request did not match.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.failures.is_empty() {
            panic!("Unexpected requests: {}", state.failures.join("; "));
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    fn builder<T>(
        &self,
        make: impl FnOnce(Result<T, FrameworkError>) -> Expectation + Send + 'static,
    ) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            state: Arc::clone(&self.state),
            make: Box::new(make),
        }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Completes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T> {
    state: SharedState,
    make: Box<dyn FnOnce(Result<T, FrameworkError>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        let expectation = (self.make)(response);
        lock(&self.state).expectations.push_back(expectation);
    }
}

fn answer(request: SessionRequest, expectation: Option<Expectation>) -> Result<(), String> {
    match (request, expectation) {
        (SessionRequest::Open { respond_to, .. }, Some(Expectation::Open { response })) => {
            let _ = respond_to.send(response);
            Ok(())
        }
        (
            SessionRequest::Snapshot { id, respond_to },
            Some(Expectation::Snapshot { id: expected, response }),
        ) if id == expected => {
            let _ = respond_to.send(response);
            Ok(())
        }
        (
            SessionRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: expected, response }),
        ) if id == expected => {
            let _ = respond_to.send(response);
            Ok(())
        }
        (
            SessionRequest::Basket { id, respond_to, .. },
            Some(Expectation::Basket { id: expected, response }),
        ) if id == expected => {
            let _ = respond_to.send(response);
            Ok(())
        }
        (
            SessionRequest::Close { id, respond_to },
            Some(Expectation::Close { id: expected, response }),
        ) if id == expected => {
            let _ = respond_to.send(response);
            Ok(())
        }
        (request, expectation) => Err(format!(
            "got {request:?}, expected {expectation:?}"
        )),
    }
}

// =============================================================================
// RAW HELPERS
// =============================================================================

/// Creates a handle whose requests land in the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (SessionHandle, mpsc::Receiver<SessionRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionHandle::new(sender), receiver)
}

/// Waits for the next request, returning `None` once every handle is dropped.
pub async fn next_request(receiver: &mut mpsc::Receiver<SessionRequest>) -> Option<SessionRequest> {
    receiver.recv().await
}
