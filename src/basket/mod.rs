//! # Basket Ledger
//!
//! An ordered list of `(product, quantity)` entries with at most one entry per
//! product id. Operations return a new [`Basket`] instead of changing the
//! receiver, so a caller can compare old and new values to detect a change.
//!
//! ```rust
//! use catalog_browser::basket::Basket;
//! use catalog_browser::model::Product;
//! use rust_decimal::Decimal;
//!
//! let apple = Product::new(1, "Apple", Decimal::new(100, 2), 5, 4.0);
//! let basket = Basket::new().add_one(&apple).add_one(&apple);
//!
//! assert_eq!(basket.len(), 1);
//! assert_eq!(basket.total(), Decimal::new(200, 2));
//! ```

use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::{Product, ProductId};

/// One line of the basket. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasketEntry {
    pub product: Product,
    pub quantity: u32,
}

impl BasketEntry {
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Basket {
    entries: Vec<BasketEntry>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`.
    ///
    /// An existing entry keeps its position and gains one unit; otherwise a
    /// new entry with quantity 1 is appended.
    pub fn add_one(&self, product: &Product) -> Basket {
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|entry| entry.product.id == product.id) {
            Some(entry) => entry.quantity += 1,
            None => entries.push(BasketEntry {
                product: product.clone(),
                quantity: 1,
            }),
        }
        Basket { entries }
    }

    /// Removes one unit of `product`, dropping the entry when it reaches zero.
    /// Products not in the basket leave it unchanged.
    pub fn remove_one(&self, product: &Product) -> Basket {
        let entries = self
            .entries
            .iter()
            .filter_map(|entry| match entry.product.id == product.id {
                false => Some(entry.clone()),
                true if entry.quantity > 1 => Some(BasketEntry {
                    product: entry.product.clone(),
                    quantity: entry.quantity - 1,
                }),
                true => None,
            })
            .collect();
        Basket { entries }
    }

    /// Sum of `price * quantity` over every entry.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(BasketEntry::subtotal).sum()
    }

    pub fn entries(&self) -> &[BasketEntry] {
        &self.entries
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.product.id == id)
            .map_or(0, |entry| entry.quantity)
    }

    /// Number of units across all entries.
    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|entry| entry.quantity).sum()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Product {
        Product::new(1, "Apple", Decimal::new(100, 2), 5, 4.0)
    }

    fn pear() -> Product {
        Product::new(2, "Pear", Decimal::new(75, 2), 8, 3.5)
    }

    #[test]
    fn first_add_creates_entry() {
        let basket = Basket::new().add_one(&apple());
        assert_eq!(
            basket.entries(),
            &[BasketEntry {
                product: apple(),
                quantity: 1
            }]
        );
    }

    #[test]
    fn repeated_add_merges_into_one_entry() {
        let basket = Basket::new().add_one(&apple()).add_one(&apple());
        assert_eq!(basket.len(), 1);
        assert_eq!(basket.quantity_of(ProductId(1)), 2);
        assert_eq!(basket.total(), Decimal::new(200, 2));
    }

    #[test]
    fn add_does_not_touch_the_original() {
        let original = Basket::new().add_one(&apple());
        let updated = original.add_one(&apple()).add_one(&pear());
        assert_eq!(original.quantity_of(ProductId(1)), 1);
        assert_eq!(original.len(), 1);
        assert_eq!(updated.len(), 2);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let basket = Basket::new()
            .add_one(&apple())
            .add_one(&pear())
            .add_one(&apple());
        let names: Vec<_> = basket.entries().iter().map(|e| e.product.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Pear"]);
        assert_eq!(basket.item_count(), 3);
    }

    #[test]
    fn remove_decrements_then_deletes() {
        let basket = Basket::new().add_one(&apple()).add_one(&apple());

        let once = basket.remove_one(&apple());
        assert_eq!(once.quantity_of(ProductId(1)), 1);

        let twice = once.remove_one(&apple());
        assert!(twice.is_empty());

        let thrice = twice.remove_one(&apple());
        assert_eq!(thrice, twice);
    }

    #[test]
    fn removing_absent_product_is_a_no_op() {
        let basket = Basket::new().add_one(&apple());
        assert_eq!(basket.remove_one(&pear()), basket);
    }

    #[test]
    fn removal_keeps_other_entries_in_place() {
        let basket = Basket::new().add_one(&apple()).add_one(&pear());
        let without_apple = basket.remove_one(&apple());
        assert_eq!(without_apple.len(), 1);
        assert_eq!(without_apple.entries()[0].product.id, ProductId(2));
    }

    #[test]
    fn total_sums_price_times_quantity() {
        assert_eq!(Basket::new().total(), Decimal::ZERO);

        let basket = Basket::new()
            .add_one(&apple())
            .add_one(&pear())
            .add_one(&pear())
            .add_one(&pear());
        // 1.00 + 3 * 0.75
        assert_eq!(basket.total(), Decimal::new(325, 2));
    }
}
