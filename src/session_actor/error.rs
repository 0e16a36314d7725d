//! Error types for the Session actor.

use thiserror::Error;

use crate::model::{ProductId, SessionId};

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// No open session has this id.
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// The product id is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The product has no stock and cannot be added to the basket.
    #[error("Product out of stock: {0}")]
    OutOfStock(ProductId),

    /// An error occurred while communicating with the actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
