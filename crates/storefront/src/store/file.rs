//! File-backed cart storage.
//!
//! The record lives in a single JSON file named after [`CART_KEY`] inside a
//! caller-chosen directory, giving the cart the same lifetime as the profile
//! directory it is stored under.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{CART_KEY, CartStore, StoreError};
use crate::cart::LineItem;

/// Durable store writing the cart record to `<dir>/asfiFirmCart.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory must already exist.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{CART_KEY}.json")),
        }
    }

    /// Path of the record file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for JsonFileStore {
    fn read(&self) -> Vec<LineItem> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Failed to read cart record: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!("Discarding unparseable cart record: {e}");
                Vec::new()
            }
        }
    }

    fn write(&mut self, items: &[LineItem]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
