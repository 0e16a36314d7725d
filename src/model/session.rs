use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

use crate::basket::BasketEntry;
use crate::catalog::CatalogQuery;
use crate::model::Product;

/// Type-safe identifier for browsing sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// Everything the presentation layer renders for one session.
///
/// A new snapshot is produced after every event; it is never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub query: CatalogQuery,
    pub visible_products: Vec<Product>,
    pub result_indicator: String,
    pub basket_entries: Vec<BasketEntry>,
    pub basket_total: Decimal,
}
