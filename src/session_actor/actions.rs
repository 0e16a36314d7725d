//! Events a session accepts from the presentation layer.
//!
//! Query changes travel as a [`SessionUpdate`]; basket clicks travel as a
//! [`BasketAction`]. Both are applied by [`Session`](super::Session).

use crate::catalog::SortKey;
use crate::model::ProductId;

/// Partial change to the session's query. `None` fields keep their value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionUpdate {
    pub search_term: Option<String>,
    pub sort_key: Option<SortKey>,
    pub stock_only: Option<bool>,
}

impl SessionUpdate {
    pub fn search_term(text: impl Into<String>) -> Self {
        Self {
            search_term: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn sort_key(key: SortKey) -> Self {
        Self {
            sort_key: Some(key),
            ..Self::default()
        }
    }

    pub fn stock_only(flag: bool) -> Self {
        Self {
            stock_only: Some(flag),
            ..Self::default()
        }
    }
}

/// Basket operations on the product with the given id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketAction {
    /// Adds one unit. Fails for unknown or sold-out products.
    Add(ProductId),
    /// Removes one unit. A product not in the basket is ignored.
    Remove(ProductId),
}

impl BasketAction {
    pub fn product_id(self) -> ProductId {
        match self {
            BasketAction::Add(id) | BasketAction::Remove(id) => id,
        }
    }
}
