//! In-memory cart storage.
//!
//! Test double for [`JsonFileStore`](super::JsonFileStore). It keeps the
//! serialized record in memory so the same encode/decode path is exercised,
//! including recovery from malformed records.

use tracing::warn;

use super::{CartStore, StoreError};
use crate::cart::LineItem;

/// Volatile store holding the serialized cart record.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a raw record, parseable or not.
    #[must_use]
    pub fn with_record(raw: impl Into<String>) -> Self {
        Self {
            record: Some(raw.into()),
        }
    }

    /// The raw serialized record, if one is stored.
    #[must_use]
    pub fn record(&self) -> Option<&str> {
        self.record.as_deref()
    }
}

impl CartStore for MemoryStore {
    fn read(&self) -> Vec<LineItem> {
        let Some(raw) = &self.record else {
            return Vec::new();
        };

        match serde_json::from_str(raw) {
            Ok(items) => items,
            Err(e) => {
                warn!("Discarding unparseable cart record: {e}");
                Vec::new()
            }
        }
    }

    fn write(&mut self, items: &[LineItem]) -> Result<(), StoreError> {
        self.record = Some(serde_json::to_string(items)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.record = None;
        Ok(())
    }
}
