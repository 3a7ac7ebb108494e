//! Cart view projections.
//!
//! Pure derivations of engine state into display structures: the badge, the
//! itemized cart view, and the checkout summary. Applying them to an actual
//! surface is the embedding UI layer's concern.

use asfi_core::{Price, ProductId};

use crate::cart::{CartEngine, LineItem};
use crate::store::CartStore;

/// Cart badge display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Sum of all line quantities.
    pub count: u32,
    /// Subtotal shown next to the count, excluding delivery.
    pub subtotal: Price,
}

impl Badge {
    /// Derive the badge from current engine state.
    #[must_use]
    pub fn project<S: CartStore>(engine: &CartEngine<S>) -> Self {
        Self {
            count: engine.total_item_count(),
            subtotal: engine.subtotal(),
        }
    }
}

/// One cart line as displayed in the cart view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub line_total: Price,
}

impl From<&LineItem> for CartLineView {
    fn from(line: &LineItem) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            image: line.image.clone(),
            unit_price: line.price,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// Itemized display data for the cart view.
///
/// An empty cart renders distinctly: no lines, all totals zero, and no
/// delivery fee, so the caller shows an empty-state message instead of a
/// zero-item table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: Price,
    /// Zero while the cart is empty, the flat fee otherwise.
    pub delivery_fee: Price,
    pub total: Price,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            subtotal: Price::ZERO,
            delivery_fee: Price::ZERO,
            total: Price::ZERO,
        }
    }

    /// Whether the empty-state message should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Project the current engine state.
    #[must_use]
    pub fn project<S: CartStore>(engine: &CartEngine<S>, delivery_fee: Price) -> Self {
        let subtotal = engine.subtotal();
        let fee = if subtotal.is_zero() {
            Price::ZERO
        } else {
            delivery_fee
        };
        Self {
            lines: engine.items().iter().map(CartLineView::from).collect(),
            subtotal,
            delivery_fee: fee,
            total: subtotal + fee,
        }
    }
}

/// One summary line of the checkout view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLineView {
    pub name: String,
    pub quantity: u32,
    pub line_total: Price,
}

impl From<&LineItem> for CheckoutLineView {
    fn from(line: &LineItem) -> Self {
        Self {
            name: line.name.clone(),
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// Itemized totals for the checkout view.
///
/// Checkout is only reachable from a non-empty cart, so the delivery fee is
/// applied unconditionally here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub lines: Vec<CheckoutLineView>,
    pub subtotal: Price,
    pub delivery_fee: Price,
    pub total: Price,
}

impl CheckoutView {
    /// Project the current engine state.
    #[must_use]
    pub fn project<S: CartStore>(engine: &CartEngine<S>, delivery_fee: Price) -> Self {
        let subtotal = engine.subtotal();
        Self {
            lines: engine.items().iter().map(CheckoutLineView::from).collect(),
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }
}

/// Format an amount for display with the taka sign.
#[must_use]
pub fn format_taka(price: Price) -> String {
    format!("৳{price}")
}
