//! State of one browsing session.
//!
//! A [`Session`] ties the query, the visible set and the basket to the shared
//! catalog. Every event swaps in a freshly computed value; nothing is edited
//! in place, so a snapshot taken before an event never observes it.

use std::sync::Arc;

use crate::basket::Basket;
use crate::catalog::{Catalog, CatalogQuery};
use crate::model::{Product, SessionId, SessionSnapshot};

use super::actions::{BasketAction, SessionUpdate};
use super::error::SessionError;

#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    catalog: Arc<Catalog>,
    query: CatalogQuery,
    visible: Vec<Product>,
    basket: Basket,
}

impl Session {
    /// Opens a session with an empty basket and computes its first visible set.
    pub fn open(id: SessionId, catalog: Arc<Catalog>, query: CatalogQuery) -> Self {
        let visible = catalog.visible(&query);
        Self {
            id,
            catalog,
            query,
            visible,
            basket: Basket::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    /// Replaces the query and recomputes the visible set.
    ///
    /// Returns `false` when the update leaves the query unchanged, in which
    /// case the visible set is not recomputed.
    pub fn apply_update(&mut self, update: SessionUpdate) -> bool {
        let query = CatalogQuery {
            search_term: update
                .search_term
                .unwrap_or_else(|| self.query.search_term.clone()),
            sort_key: update.sort_key.unwrap_or(self.query.sort_key),
            stock_only: update.stock_only.unwrap_or(self.query.stock_only),
        };
        if query == self.query {
            return false;
        }
        self.query = query;
        self.recompute();
        true
    }

    /// Applies a basket action and returns whether the basket changed.
    pub fn handle_action(&mut self, action: BasketAction) -> Result<bool, SessionError> {
        let id = action.product_id();
        let product = self
            .catalog
            .get(id)
            .ok_or(SessionError::UnknownProduct(id))?;

        let basket = match action {
            BasketAction::Add(_) if !product.in_stock() => {
                return Err(SessionError::OutOfStock(id));
            }
            BasketAction::Add(_) => self.basket.add_one(product),
            BasketAction::Remove(_) => self.basket.remove_one(product),
        };

        let changed = basket != self.basket;
        self.basket = basket;
        Ok(changed)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            query: self.query.clone(),
            visible_products: self.visible.clone(),
            result_indicator: self.query.describe(self.visible.len()),
            basket_entries: self.basket.entries().to_vec(),
            basket_total: self.basket.total(),
        }
    }

    fn recompute(&mut self) {
        self.visible = self.catalog.visible(&self.query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SortKey;
    use crate::model::ProductId;
    use rust_decimal::Decimal;

    fn session() -> Session {
        let catalog = Catalog::new(vec![
            Product::new(1, "Apple", Decimal::new(100, 2), 5, 4.0),
            Product::new(2, "Banana", Decimal::new(50, 2), 0, 3.0),
            Product::new(3, "Cherry", Decimal::new(300, 2), 2, 4.5),
        ])
        .unwrap();
        Session::open(SessionId(1), Arc::new(catalog), CatalogQuery::default())
    }

    fn visible_ids(session: &Session) -> Vec<u32> {
        session.visible().iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn opening_computes_visible_set() {
        let session = session();
        let snapshot = session.snapshot();
        assert_eq!(visible_ids(&session), vec![1, 2, 3]);
        assert_eq!(snapshot.result_indicator, "3 Products");
        assert!(snapshot.basket_entries.is_empty());
        assert_eq!(snapshot.basket_total, Decimal::ZERO);
    }

    #[test]
    fn updates_recompute_visible_set() {
        let mut session = session();

        assert!(session.apply_update(SessionUpdate::stock_only(true)));
        assert_eq!(visible_ids(&session), vec![1, 3]);

        assert!(session.apply_update(SessionUpdate::sort_key(SortKey::PriceDesc)));
        assert_eq!(visible_ids(&session), vec![3, 1]);

        assert!(session.apply_update(SessionUpdate::search_term("an")));
        assert!(session.visible().is_empty());
        assert_eq!(session.snapshot().result_indicator, "No search results found");
    }

    #[test]
    fn identical_update_reports_no_change() {
        let mut session = session();
        assert!(!session.apply_update(SessionUpdate::sort_key(SortKey::NameAsc)));
        assert!(!session.apply_update(SessionUpdate::default()));
    }

    #[test]
    fn basket_actions_follow_ledger_rules() {
        let mut session = session();
        assert_eq!(session.handle_action(BasketAction::Add(ProductId(1))), Ok(true));
        assert_eq!(session.handle_action(BasketAction::Add(ProductId(1))), Ok(true));
        assert_eq!(session.basket().quantity_of(ProductId(1)), 2);
        assert_eq!(session.snapshot().basket_total, Decimal::new(200, 2));

        assert_eq!(session.handle_action(BasketAction::Remove(ProductId(3))), Ok(false));
        assert_eq!(session.handle_action(BasketAction::Remove(ProductId(1))), Ok(true));
        assert_eq!(session.handle_action(BasketAction::Remove(ProductId(1))), Ok(true));
        assert!(session.basket().is_empty());
    }

    #[test]
    fn sold_out_and_unknown_products_are_rejected() {
        let mut session = session();
        assert_eq!(
            session.handle_action(BasketAction::Add(ProductId(2))),
            Err(SessionError::OutOfStock(ProductId(2)))
        );
        assert_eq!(
            session.handle_action(BasketAction::Add(ProductId(99))),
            Err(SessionError::UnknownProduct(ProductId(99)))
        );
        assert!(session.basket().is_empty());
    }

    #[test]
    fn snapshots_are_detached_from_later_events() {
        let mut session = session();
        let before = session.snapshot();
        session.handle_action(BasketAction::Add(ProductId(3))).unwrap();
        session.apply_update(SessionUpdate::search_term("cherry"));

        assert!(before.basket_entries.is_empty());
        assert_eq!(before.visible_products.len(), 3);
        assert_eq!(session.snapshot().visible_products.len(), 1);
    }
}
