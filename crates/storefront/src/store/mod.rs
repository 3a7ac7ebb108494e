//! Durable cart storage.
//!
//! A single fixed key identifies the cart record; the value is a JSON
//! encoding of the ordered line-item list. An absent key is equivalent to an
//! empty cart. The store is the only I/O boundary in the subsystem and is
//! swappable behind the three-operation [`CartStore`] contract.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

use crate::cart::LineItem;

/// Fixed key under which the cart record is stored.
pub const CART_KEY: &str = "asfiFirmCart";

/// Errors that can occur while persisting the cart record.
///
/// Read failures never surface here: [`CartStore::read`] recovers locally by
/// substituting an empty cart.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying storage could not be written or removed.
    #[error("cart storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The cart record could not be serialized.
    #[error("cart record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable key-value slot holding the cart record.
pub trait CartStore {
    /// Fetch the persisted cart record.
    ///
    /// Fails soft: an absent or unparseable record yields an empty cart.
    fn read(&self) -> Vec<LineItem>;

    /// Serialize and store the cart, fully overwriting the prior record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the underlying write fails.
    fn write(&mut self, items: &[LineItem]) -> Result<(), StoreError>;

    /// Remove the record entirely.
    ///
    /// A subsequent [`read`](CartStore::read) returns an empty cart, exactly
    /// as if the record had never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying removal fails.
    fn clear(&mut self) -> Result<(), StoreError>;
}
