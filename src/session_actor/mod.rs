//! # Session Actor
//!
//! The per-user browsing state and the events that change it.
//!
//! ## Structure
//!
//! - [`entity`] - [`Session`]: query, visible set and basket for one user
//! - [`actions`] - [`SessionUpdate`] and [`BasketAction`], the events a session accepts
//! - [`error`] - [`SessionError`] for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use catalog_browser::catalog::{Catalog, CatalogQuery};
//! use catalog_browser::session_actor;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::from_json(r#"[
//!         {"id": 1, "name": "Apple", "price": 1.00, "category": "Fruit",
//!          "quantity": 5, "rating": 4, "image_link": "apple.png"}
//!     ]"#)?;
//!
//!     let (actor, client) = session_actor::new(32);
//!     tokio::spawn(actor.run(Arc::new(catalog)));
//!
//!     let session = client.open_session(CatalogQuery::default()).await?;
//!     let snapshot = client.add_to_basket(session, 1.into()).await?;
//!     assert_eq!(snapshot.basket_entries.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::clients::SessionClient;
use crate::framework::SessionActor;

/// Creates a new Session actor and its client.
pub fn new(buffer_size: usize) -> (SessionActor, SessionClient) {
    let (actor, handle) = SessionActor::new(buffer_size);
    (actor, SessionClient::new(handle))
}
