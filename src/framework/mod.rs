//! Message plumbing between the presentation layer and the session actor.
//!
//! # Main Components
//!
//! - [`SessionActor`] - Owns every open session and processes requests sequentially
//! - [`SessionHandle`] - Cloneable sender used to reach the actor
//! - [`SessionRequest`] - The message type carried over the channel
//! - [`FrameworkError`] - Transport failures and session rejections
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning the actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::SessionActor;
pub use client::SessionHandle;
pub use error::FrameworkError;
pub use message::{Response, SessionRequest};
