//! Asfi Core - Shared types library.
//!
//! This crate provides common domain types used across the Asfi Firm
//! storefront components:
//! - `storefront` - Cart, checkout, and catalog subsystem
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
