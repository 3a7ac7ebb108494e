//! UI trigger surface.
//!
//! Each discrete named action the UI layer can raise maps 1:1 to a cart or
//! checkout operation. The UI binding resolves click targets (which button,
//! which product card, whether a click landed on a modal backdrop) before
//! constructing an [`Action`].

use asfi_core::ProductId;

use crate::cart::NewItem;
use crate::forms::{CheckoutForm, ContactForm};

/// A discrete UI action, consumed by [`crate::app::Storefront::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// An add-to-cart control fired with this product's data.
    AddItem(NewItem),
    /// Open the cart modal.
    ViewCart,
    /// Close the cart modal.
    CloseCart,
    /// "Continue shopping": close the cart modal.
    ContinueShopping,
    /// Adjust a cart line's quantity by a signed step.
    UpdateQuantity { id: ProductId, delta: i32 },
    /// Delete a cart line.
    RemoveItem(ProductId),
    /// Proceed from the cart modal to checkout. Guarded: rejected while the
    /// cart is empty.
    Checkout,
    /// Close the checkout modal.
    CloseCheckout,
    /// Return from checkout to the cart modal.
    BackToCart,
    /// Place the order with the entered form. Guarded by form validation.
    PlaceOrder(CheckoutForm),
    /// Dismiss the order confirmation.
    CloseSuccess,
    /// A click landed outside the active modal's bounds.
    ClickOutside,
    /// The contact form was submitted.
    SubmitContactForm(ContactForm),
}
