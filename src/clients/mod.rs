//! Type-safe wrappers around [`SessionHandle`](crate::framework::SessionHandle).

pub mod actor_client;
pub mod session_client;

pub use actor_client::*;
pub use session_client::*;
