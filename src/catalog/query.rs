//! Filtering, sorting and result counting over the product list.
//!
//! Everything here is a pure function of its arguments: the source slice is
//! never touched and the same query always yields the same sequence.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use crate::model::Product;

/// Ordering applied to the visible set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    RatingAsc,
    RatingDesc,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key `{0}`")]
pub struct UnknownSortKey(pub String);

impl SortKey {
    /// Every key, in the order the sort menu lists them.
    pub const ALL: [SortKey; 6] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingAsc,
        SortKey::RatingDesc,
    ];

    /// Short option code used by the sort menu (`AtoZ`, `£LtoH`, ...).
    pub fn code(self) -> &'static str {
        match self {
            SortKey::NameAsc => "AtoZ",
            SortKey::NameDesc => "ZtoA",
            SortKey::PriceAsc => "£LtoH",
            SortKey::PriceDesc => "£HtoL",
            SortKey::RatingAsc => "*LtoH",
            SortKey::RatingDesc => "*HtoL",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::NameAsc => "By name (A - Z)",
            SortKey::NameDesc => "By name (Z - A)",
            SortKey::PriceAsc => "By price (low - high)",
            SortKey::PriceDesc => "By price (high - low)",
            SortKey::RatingAsc => "By rating (low - high)",
            SortKey::RatingDesc => "By rating (high - low)",
        }
    }

    /// The key that orders the same field the other way round.
    pub fn reversed(self) -> SortKey {
        match self {
            SortKey::NameAsc => SortKey::NameDesc,
            SortKey::NameDesc => SortKey::NameAsc,
            SortKey::PriceAsc => SortKey::PriceDesc,
            SortKey::PriceDesc => SortKey::PriceAsc,
            SortKey::RatingAsc => SortKey::RatingDesc,
            SortKey::RatingDesc => SortKey::RatingAsc,
        }
    }

    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::NameAsc => compare_names(&a.name, &b.name),
            SortKey::NameDesc => compare_names(&b.name, &a.name),
            SortKey::PriceAsc => a.price.cmp(&b.price),
            SortKey::PriceDesc => b.price.cmp(&a.price),
            SortKey::RatingAsc => a.rating.total_cmp(&b.rating),
            SortKey::RatingDesc => b.rating.total_cmp(&a.rating),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if let Some(key) = SortKey::ALL.into_iter().find(|key| key.code() == value) {
            return Ok(key);
        }
        match value.to_ascii_lowercase().as_str() {
            "name_asc" => Ok(SortKey::NameAsc),
            "name_desc" => Ok(SortKey::NameDesc),
            "price_asc" => Ok(SortKey::PriceAsc),
            "price_desc" => Ok(SortKey::PriceDesc),
            "rating_asc" => Ok(SortKey::RatingAsc),
            "rating_desc" => Ok(SortKey::RatingDesc),
            _ => Err(UnknownSortKey(value.to_string())),
        }
    }
}

/// Locale-style name ordering: letters compare by their base form ignoring
/// case, so `Éclair` sorts between `apple` and `Zebra`. Names that differ only
/// in accents fall back to comparing the accented forms.
fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
}

/// Canonical decomposition with combining marks dropped, then lowercased.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// The user's current filter and ordering choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub search_term: String,
    pub sort_key: SortKey,
    pub stock_only: bool,
}

impl CatalogQuery {
    pub fn sorted_by(sort_key: SortKey) -> Self {
        Self {
            sort_key,
            ..Self::default()
        }
    }

    pub fn visible(&self, full_list: &[Product]) -> Vec<Product> {
        compute_visible(full_list, &self.search_term, self.sort_key, self.stock_only)
    }

    pub fn describe(&self, visible_count: usize) -> String {
        describe_result_count(&self.search_term, visible_count)
    }
}

/// Filters and sorts a copy of `full_list`.
///
/// A non-empty `search_term` keeps products whose name contains it, ignoring
/// case. `stock_only` keeps products with a positive quantity. The sort is
/// stable, so products that compare equal keep their catalog order.
pub fn compute_visible(
    full_list: &[Product],
    search_term: &str,
    sort_key: SortKey,
    stock_only: bool,
) -> Vec<Product> {
    let needle = search_term.to_lowercase();
    let mut visible: Vec<Product> = full_list
        .iter()
        .filter(|product| needle.is_empty() || product.name.to_lowercase().contains(&needle))
        .filter(|product| !stock_only || product.quantity > 0)
        .cloned()
        .collect();
    visible.sort_by(|a, b| sort_key.compare(a, b));
    visible
}

/// Text shown above the product list.
pub fn describe_result_count(search_term: &str, visible_count: usize) -> String {
    if search_term.is_empty() {
        match visible_count {
            1 => "1 Product".to_string(),
            n => format!("{n} Products"),
        }
    } else {
        match visible_count {
            0 => "No search results found".to_string(),
            1 => "1 Result".to_string(),
            n => format!("{n} Results"),
        }
    }
}
