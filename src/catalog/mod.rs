//! # Catalog Engine
//!
//! Holds the full, read-only product list and derives the visible set from a
//! [`CatalogQuery`].
//!
//! ## Structure
//!
//! - [`query`] - [`SortKey`], [`CatalogQuery`], [`compute_visible`] and [`describe_result_count`]
//! - [`Catalog`] - the loaded product list with id lookup
//!
//! ## Loading
//!
//! The catalog is read once at startup from a JSON array of product records:
//!
//! ```rust
//! use catalog_browser::catalog::{Catalog, CatalogQuery};
//!
//! let catalog = Catalog::from_json(r#"[
//!     {"id": 1, "name": "Apple", "price": 1.00, "category": "Fruit",
//!      "quantity": 5, "rating": 4, "image_link": "apple.png"}
//! ]"#).unwrap();
//!
//! let visible = catalog.visible(&CatalogQuery::default());
//! assert_eq!(visible.len(), 1);
//! ```

pub mod query;

pub use query::*;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::model::{Product, ProductId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error("invalid product {id}: {reason}")]
    InvalidProduct { id: ProductId, reason: String },
}

/// The full product list for a session. Never mutated once built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, checking id uniqueness, prices and ratings.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            validate(product)?;
        }
        Ok(Self { products })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        debug!(path = %path.display(), "Loading catalog");
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn visible(&self, query: &CatalogQuery) -> Vec<Product> {
        query.visible(&self.products)
    }
}

fn validate(product: &Product) -> Result<(), CatalogError> {
    if product.price < Decimal::ZERO {
        return Err(CatalogError::InvalidProduct {
            id: product.id,
            reason: format!("negative price {}", product.price),
        });
    }
    if !product.rating.is_finite() || !(0.0..=5.0).contains(&product.rating) {
        return Err(CatalogError::InvalidProduct {
            id: product.id,
            reason: format!("rating {} outside 0-5", product.rating),
        });
    }
    Ok(())
}
