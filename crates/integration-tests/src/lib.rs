//! Integration tests for the Asfi Firm storefront.
//!
//! # Test Categories
//!
//! - `cart_checkout` - Whole-flow cart and checkout scenarios through the
//!   [`asfi_storefront::app::Storefront`] controller
//! - `persistence` - Cart record durability across storefront restarts
//! - `contact_flow` - Contact form validation and deferred UI resets
//!
//! The tests live in `tests/`; this library only hosts shared fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use asfi_core::{Price, ProductId};
use asfi_storefront::app::Storefront;
use asfi_storefront::cart::NewItem;
use asfi_storefront::config::StorefrontConfig;
use asfi_storefront::forms::CheckoutForm;
use asfi_storefront::store::MemoryStore;

/// A storefront over an in-memory store with default configuration.
#[must_use]
pub fn storefront() -> Storefront<MemoryStore> {
    Storefront::new(MemoryStore::new(), StorefrontConfig::default())
}

/// An add-to-cart payload priced in whole units.
#[must_use]
pub fn item(id: &str, name: &str, units: u64) -> NewItem {
    NewItem {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_units(units),
        image: format!("{id}.png"),
    }
}

/// A checkout form that passes validation.
#[must_use]
pub fn valid_checkout_form() -> CheckoutForm {
    CheckoutForm {
        customer_name: "Rahim Uddin".to_owned(),
        customer_phone: "01712345678".to_owned(),
        delivery_address: "12 Green Road, Dhaka".to_owned(),
    }
}
