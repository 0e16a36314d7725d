//! Plain-text rendering of a [`SessionSnapshot`].

use std::path::Path;

use rust_decimal::Decimal;

use crate::basket::BasketEntry;
use crate::catalog::SortKey;
use crate::model::{Product, SessionSnapshot};

pub fn format_price(amount: Decimal) -> String {
    format!("£{:.2}", amount)
}

/// One product line: name, price, rating, and the state of the add button.
pub fn product_card(product: &Product) -> String {
    let button = if product.in_stock() {
        "Add to basket"
    } else {
        "Out of stock"
    };
    format!(
        "[{:>3}] {}  {} ({}/5)  [{}]",
        product.id.0,
        product.name,
        format_price(product.price),
        product.rating,
        button
    )
}

/// Full product view for `show`: the card, then category, stock and the
/// image file resolved against `asset_dir`.
pub fn product_detail(product: &Product, asset_dir: &Path) -> Vec<String> {
    vec![
        product_card(product),
        format!("Category: {}", product.category),
        format!("In stock: {}", product.quantity),
        format!("Image: {}", product.image_path(asset_dir).display()),
    ]
}

pub fn basket_line(entry: &BasketEntry) -> String {
    format!(
        "{} ({}) - {}",
        entry.product.name,
        format_price(entry.product.price),
        entry.quantity
    )
}

/// Result indicator followed by one card per visible product.
pub fn product_list(snapshot: &SessionSnapshot) -> Vec<String> {
    std::iter::once(snapshot.result_indicator.clone())
        .chain(snapshot.visible_products.iter().map(product_card))
        .collect()
}

/// Basket entries followed by the total, or the empty-basket message.
pub fn basket_lines(snapshot: &SessionSnapshot) -> Vec<String> {
    if snapshot.basket_entries.is_empty() {
        return vec!["Your basket is empty".to_string()];
    }
    snapshot
        .basket_entries
        .iter()
        .map(basket_line)
        .chain(std::iter::once(format!(
            "Total: {}",
            format_price(snapshot.basket_total)
        )))
        .collect()
}

pub fn sort_options(current: SortKey) -> Vec<String> {
    SortKey::ALL
        .into_iter()
        .map(|key| {
            let marker = if key == current { '*' } else { ' ' };
            format!("{marker} {:<6} {}", key.code(), key.label())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogQuery;
    use crate::model::SessionId;

    fn apple() -> Product {
        Product::new(1, "Apple", Decimal::new(1, 0), 5, 4.0)
    }

    fn snapshot(basket_entries: Vec<BasketEntry>, basket_total: Decimal) -> SessionSnapshot {
        SessionSnapshot {
            session_id: SessionId(1),
            query: CatalogQuery::default(),
            visible_products: vec![apple(), Product::new(2, "Banana", Decimal::new(5, 1), 0, 3.5)],
            result_indicator: "2 Products".to_string(),
            basket_entries,
            basket_total,
        }
    }

    #[test]
    fn prices_always_show_two_decimals() {
        assert_eq!(format_price(Decimal::new(1, 0)), "£1.00");
        assert_eq!(format_price(Decimal::new(5, 1)), "£0.50");
        assert_eq!(format_price(Decimal::new(1999, 2)), "£19.99");
    }

    #[test]
    fn cards_reflect_stock() {
        let lines = product_list(&snapshot(Vec::new(), Decimal::ZERO));
        assert_eq!(lines[0], "2 Products");
        assert_eq!(lines[1], "[  1] Apple  £1.00 (4/5)  [Add to basket]");
        assert_eq!(lines[2], "[  2] Banana  £0.50 (3.5/5)  [Out of stock]");
    }

    #[test]
    fn detail_resolves_image_against_asset_dir() {
        let mut product = apple();
        product.category = "Fruit".to_string();
        product.image_link = "apple.png".to_string();

        let lines = product_detail(&product, Path::new("Assets/Product_Images"));
        assert_eq!(
            lines,
            vec![
                "[  1] Apple  £1.00 (4/5)  [Add to basket]",
                "Category: Fruit",
                "In stock: 5",
                "Image: Assets/Product_Images/apple.png",
            ]
        );
    }

    #[test]
    fn basket_lines_end_with_total() {
        let entries = vec![BasketEntry {
            product: apple(),
            quantity: 2,
        }];
        let lines = basket_lines(&snapshot(entries, Decimal::new(2, 0)));
        assert_eq!(lines, vec!["Apple (£1.00) - 2", "Total: £2.00"]);
    }

    #[test]
    fn empty_basket_message() {
        let lines = basket_lines(&snapshot(Vec::new(), Decimal::ZERO));
        assert_eq!(lines, vec!["Your basket is empty"]);
    }

    #[test]
    fn sort_menu_marks_current_key() {
        let options = sort_options(SortKey::PriceAsc);
        assert_eq!(options.len(), 6);
        assert!(options[2].starts_with("* £LtoH"));
        assert!(options[0].starts_with("  AtoZ"));
    }
}
