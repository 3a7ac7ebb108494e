//! Checkout flow state machine.
//!
//! A pure phase machine with guarded transitions; the UI binding translates
//! events into transition calls and phase changes into visual updates. The
//! phases are mutually exclusive: at most one modal is shown at a time.

use asfi_core::{OrderId, Price};
use chrono::Utc;
use tracing::{debug, info};

use crate::cart::CartEngine;
use crate::forms::{CheckoutForm, FieldErrors, validate_checkout_form};
use crate::store::CartStore;

/// The flow's current modal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No modal is shown.
    #[default]
    Hidden,
    /// The itemized cart modal.
    Cart,
    /// The checkout form modal.
    Checkout,
    /// The order-placed confirmation modal.
    Success,
}

/// Why a guarded transition was rejected.
///
/// A rejection is a user-facing blocking message; no state changes when one
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// Checkout requested with nothing in the cart.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// The checkout form failed validation.
    #[error("checkout form is invalid")]
    InvalidForm(FieldErrors),

    /// The requested transition does not apply to the current phase.
    #[error("action not available in the current phase")]
    WrongPhase,
}

/// A placed order.
///
/// Orders are display-only: the identifier and total exist for the success
/// view and are discarded when it closes. Nothing is logged or retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    /// Subtotal plus delivery fee at the moment of placement.
    pub total: Price,
}

/// Guarded transitions over [`Phase`].
#[derive(Debug)]
pub struct CheckoutFlow {
    phase: Phase,
    order_prefix: String,
}

impl CheckoutFlow {
    /// Start hidden, with the given order-identifier prefix.
    pub fn new(order_prefix: impl Into<String>) -> Self {
        Self {
            phase: Phase::Hidden,
            order_prefix: order_prefix.into(),
        }
    }

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// "view cart": show the cart modal from any state.
    pub fn view_cart(&mut self) {
        self.phase = Phase::Cart;
    }

    /// "close" / click outside: hide whatever modal is shown.
    pub fn close(&mut self) {
        self.phase = Phase::Hidden;
    }

    /// "back": `Checkout -> Cart`; no-op in any other phase.
    pub fn back_to_cart(&mut self) {
        if self.phase == Phase::Checkout {
            self.phase = Phase::Cart;
        }
    }

    /// "checkout": `Cart -> Checkout`, guarded on a non-empty cart.
    ///
    /// # Errors
    ///
    /// [`TransitionError::EmptyCart`] if the cart holds no lines, or
    /// [`TransitionError::WrongPhase`] outside the cart modal. The phase is
    /// unchanged on error.
    pub fn begin_checkout<S: CartStore>(
        &mut self,
        engine: &CartEngine<S>,
    ) -> Result<(), TransitionError> {
        if self.phase != Phase::Cart {
            return Err(TransitionError::WrongPhase);
        }
        if engine.is_empty() {
            debug!("Checkout rejected: cart is empty");
            return Err(TransitionError::EmptyCart);
        }
        self.phase = Phase::Checkout;
        Ok(())
    }

    /// "place order": `Checkout -> Success`, guarded by form validation.
    ///
    /// On success the cart is cleared (record deleted) and the generated
    /// order is returned for the success view.
    ///
    /// # Errors
    ///
    /// [`TransitionError::InvalidForm`] with every failing field, or
    /// [`TransitionError::WrongPhase`] outside the checkout modal. The cart
    /// and phase are unchanged on error.
    pub fn place_order<S: CartStore>(
        &mut self,
        engine: &mut CartEngine<S>,
        form: &CheckoutForm,
        delivery_fee: Price,
    ) -> Result<Order, TransitionError> {
        if self.phase != Phase::Checkout {
            return Err(TransitionError::WrongPhase);
        }
        validate_checkout_form(form).map_err(TransitionError::InvalidForm)?;

        let order = Order {
            id: self.generate_order_id(),
            total: engine.subtotal() + delivery_fee,
        };
        engine.clear();
        self.phase = Phase::Success;
        info!(order_id = %order.id, "Order placed");
        Ok(order)
    }

    /// Display-grade order identifier: the configured prefix plus the last
    /// eight digits of the current time in milliseconds. Unique enough for a
    /// confirmation screen, not globally.
    fn generate_order_id(&self) -> OrderId {
        let suffix = Utc::now().timestamp_millis().unsigned_abs() % 100_000_000;
        OrderId::new(format!("{}{suffix:08}", self.order_prefix))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use asfi_core::ProductId;

    use crate::cart::NewItem;
    use crate::store::MemoryStore;

    use super::*;

    fn fee() -> Price {
        Price::from_units(50)
    }

    fn flow() -> CheckoutFlow {
        CheckoutFlow::new("ASFI")
    }

    fn cart_with_widget() -> CartEngine<MemoryStore> {
        let mut engine = CartEngine::load(MemoryStore::new());
        engine.add_item(NewItem {
            id: ProductId::new("p1"),
            name: "Widget".to_owned(),
            price: Price::from_units(100),
            image: "x.png".to_owned(),
        });
        engine
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            customer_name: "Rahim Uddin".to_owned(),
            customer_phone: "01712345678".to_owned(),
            delivery_address: "12 Green Road, Dhaka".to_owned(),
        }
    }

    #[test]
    fn test_starts_hidden() {
        assert_eq!(flow().phase(), Phase::Hidden);
    }

    #[test]
    fn test_view_cart_shows_cart_modal() {
        let mut flow = flow();
        flow.view_cart();
        assert_eq!(flow.phase(), Phase::Cart);
    }

    #[test]
    fn test_checkout_rejected_on_empty_cart() {
        let engine = CartEngine::load(MemoryStore::new());
        let mut flow = flow();
        flow.view_cart();

        let result = flow.begin_checkout(&engine);
        assert_eq!(result, Err(TransitionError::EmptyCart));
        assert_eq!(flow.phase(), Phase::Cart);
    }

    #[test]
    fn test_checkout_from_nonempty_cart() {
        let engine = cart_with_widget();
        let mut flow = flow();
        flow.view_cart();

        flow.begin_checkout(&engine).unwrap();
        assert_eq!(flow.phase(), Phase::Checkout);
    }

    #[test]
    fn test_checkout_requires_cart_phase() {
        let engine = cart_with_widget();
        let mut flow = flow();

        let result = flow.begin_checkout(&engine);
        assert_eq!(result, Err(TransitionError::WrongPhase));
        assert_eq!(flow.phase(), Phase::Hidden);
    }

    #[test]
    fn test_back_to_cart() {
        let engine = cart_with_widget();
        let mut flow = flow();
        flow.view_cart();
        flow.begin_checkout(&engine).unwrap();

        flow.back_to_cart();
        assert_eq!(flow.phase(), Phase::Cart);
    }

    #[test]
    fn test_back_to_cart_is_noop_outside_checkout() {
        let mut flow = flow();
        flow.view_cart();
        flow.back_to_cart();
        assert_eq!(flow.phase(), Phase::Cart);
    }

    #[test]
    fn test_place_order_clears_cart_and_succeeds() {
        let mut engine = cart_with_widget();
        let mut flow = flow();
        flow.view_cart();
        flow.begin_checkout(&engine).unwrap();

        let order = flow.place_order(&mut engine, &valid_form(), fee()).unwrap();

        assert_eq!(flow.phase(), Phase::Success);
        assert!(engine.is_empty());
        assert_eq!(engine.total_item_count(), 0);
        assert_eq!(order.total, Price::from_units(150));
        assert!(order.id.as_str().starts_with("ASFI"));
        assert_eq!(order.id.as_str().len(), "ASFI".len() + 8);
    }

    #[test]
    fn test_place_order_rejects_invalid_form() {
        let mut engine = cart_with_widget();
        let mut flow = flow();
        flow.view_cart();
        flow.begin_checkout(&engine).unwrap();

        let result = flow.place_order(&mut engine, &CheckoutForm::default(), fee());

        assert!(matches!(result, Err(TransitionError::InvalidForm(_))));
        assert_eq!(flow.phase(), Phase::Checkout);
        assert_eq!(engine.total_item_count(), 1);
    }

    #[test]
    fn test_place_order_requires_checkout_phase() {
        let mut engine = cart_with_widget();
        let mut flow = flow();

        let result = flow.place_order(&mut engine, &valid_form(), fee());
        assert_eq!(result, Err(TransitionError::WrongPhase));
        assert_eq!(engine.total_item_count(), 1);
    }

    #[test]
    fn test_close_hides_from_any_phase() {
        let engine = cart_with_widget();
        let mut flow = flow();
        flow.view_cart();
        flow.begin_checkout(&engine).unwrap();

        flow.close();
        assert_eq!(flow.phase(), Phase::Hidden);
    }
}
