//! Cart engine.
//!
//! The cart is the sole mutable state of the subsystem. It is owned
//! exclusively by [`CartEngine`] and exposed to other components only through
//! read-only snapshots and derived totals. Every mutation persists the cart
//! before returning, so the stored record never lags the in-memory state.

use asfi_core::{Price, ProductId};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::store::CartStore;

/// One product entry in the cart with an associated quantity.
///
/// Lines are keyed by product id: the cart holds at most one line per id,
/// and a line's quantity is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub quantity: u32,
}

impl LineItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Item data supplied by the UI layer when an add-to-cart control fires.
///
/// Quantity is not part of the input: adding always contributes one unit.
/// The field shape is trusted; the UI layer sources it from catalog data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
}

/// Owner of the cart line items, kept in sync with a [`CartStore`].
///
/// Lines keep insertion order, so display order is stable across
/// mutations and reloads.
pub struct CartEngine<S> {
    items: Vec<LineItem>,
    store: S,
}

impl<S: CartStore> CartEngine<S> {
    /// Initialize the cart from the persisted record.
    ///
    /// Fails soft: a missing or unparseable record yields an empty cart.
    /// Lines whose quantity deserialized to zero are dropped to restore the
    /// quantity invariant.
    pub fn load(store: S) -> Self {
        let mut items = store.read();
        let before = items.len();
        items.retain(|line| line.quantity > 0);
        if items.len() < before {
            debug!(
                dropped = before - items.len(),
                "Dropped zero-quantity lines from persisted cart"
            );
        }
        Self { items, store }
    }

    /// Add one unit of a product.
    ///
    /// An existing line with the same id gains one unit; otherwise a new
    /// line with quantity 1 is appended.
    pub fn add_item(&mut self, item: NewItem) {
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.items.push(LineItem {
                id: item.id,
                name: item.name,
                price: item.price,
                image: item.image,
                quantity: 1,
            }),
        }
        self.persist();
    }

    /// Adjust a line's quantity by `delta`; no-op if the id is absent.
    ///
    /// A resulting quantity of zero or below removes the line, exactly like
    /// [`remove_item`](Self::remove_item).
    pub fn update_quantity(&mut self, id: &ProductId, delta: i32) {
        let Some(line) = self.items.iter_mut().find(|line| line.id == *id) else {
            return;
        };
        let updated = i64::from(line.quantity) + i64::from(delta);
        match u32::try_from(updated) {
            Ok(quantity) if quantity > 0 => line.quantity = quantity,
            _ => self.items.retain(|line| line.id != *id),
        }
        self.persist();
    }

    /// Delete the line with this id; no-op if absent.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|line| line.id != *id);
        self.persist();
    }

    /// Empty the cart and delete the persisted record entirely.
    ///
    /// The record is removed rather than overwritten with an empty list, so
    /// a reload sees the same absent-key state as a fresh session.
    pub fn clear(&mut self) {
        self.items.clear();
        if let Err(e) = self.store.clear() {
            error!("Failed to clear cart record: {e}");
        }
    }

    /// Read-only snapshot of the cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Sum of price times quantity across all lines. Excludes delivery.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    fn persist(&mut self) {
        // Mutations have no error surface; a failed write is logged and the
        // in-memory cart stays authoritative.
        if let Err(e) = self.store.write(&self.items) {
            error!("Failed to persist cart record: {e}");
        }
    }
}
