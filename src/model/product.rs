//! A single record of the product catalog.
//!
//! Products are supplied once at startup (see [`Catalog`](crate::catalog::Catalog))
//! and never change afterwards. Filtering, sorting and the basket all work on
//! clones of these values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    /// Units in stock. Zero means the product is out of stock.
    pub quantity: u32,
    /// Score between 0 and 5.
    pub rating: f64,
    /// File name relative to the asset directory.
    pub image_link: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the catalog
    /// * `name` - Display name
    /// * `price` - Unit price
    /// * `quantity` - Available stock quantity
    /// * `rating` - Score between 0 and 5
    ///
    /// `category` and `image_link` start empty.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Decimal,
        quantity: u32,
        rating: f64,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            category: String::new(),
            quantity,
            rating,
            image_link: String::new(),
        }
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Resolves `image_link` against the asset directory. The file is not checked.
    pub fn image_path(&self, asset_dir: &Path) -> PathBuf {
        asset_dir.join(&self.image_link)
    }
}
