//! Storefront configuration.
//!
//! Every knob has a default matching the shipped shop page. There is no
//! environment or file loading layer; embedders construct a config directly
//! and hand it to [`crate::app::Storefront`].

use std::time::Duration;

use asfi_core::Price;

/// Flat delivery charge in currency units.
pub const DEFAULT_DELIVERY_FEE_UNITS: u64 = 50;

/// Prefix for generated order identifiers.
pub const DEFAULT_ORDER_PREFIX: &str = "ASFI";

/// Storefront tuning knobs.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Flat delivery charge applied once the subtotal is non-zero.
    pub delivery_fee: Price,
    /// Prefix for generated order identifiers.
    pub order_prefix: String,
    /// How long an add-to-cart control shows its "added" state.
    pub added_feedback: Duration,
    /// Simulated latency before the contact form reports success.
    pub contact_submit_delay: Duration,
    /// How long the contact success state shows before the form resets.
    pub contact_reset_delay: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            delivery_fee: Price::from_units(DEFAULT_DELIVERY_FEE_UNITS),
            order_prefix: DEFAULT_ORDER_PREFIX.to_owned(),
            added_feedback: Duration::from_secs(2),
            contact_submit_delay: Duration::from_secs(1),
            contact_reset_delay: Duration::from_secs(5),
        }
    }
}
