//! # Framework Errors
//!
//! Failures of the message plumbing between [`SessionHandle`](super::SessionHandle)
//! and [`SessionActor`](super::SessionActor), plus rejections raised by the
//! session itself.

use crate::model::SessionId;
use crate::session_actor::SessionError;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Session not found: {0}")]
    NotFound(SessionId),
    #[error("Rejected: {0}")]
    Rejected(#[source] SessionError),
}
