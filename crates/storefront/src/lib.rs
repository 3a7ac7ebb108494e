//! Asfi Firm storefront library.
//!
//! This crate provides the cart, checkout, and catalog subsystem behind the
//! Asfi Firm shop page. The UI layer is an external collaborator: it feeds
//! [`actions::Action`] values into [`app::Storefront`] and applies the
//! returned [`app::RenderState`] visually.
//!
//! # Modules
//!
//! - [`cart`] - Cart engine owning the line items
//! - [`store`] - Durable single-key cart storage
//! - [`views`] - Pure projections for the badge, cart, and checkout views
//! - [`checkout`] - Checkout flow state machine and order placement
//! - [`forms`] - Field-keyed form validation
//! - [`catalog`] - Product catalog and category filtering
//! - [`timers`] - Cancellable deferred UI tasks
//! - [`actions`] / [`app`] - UI trigger surface and dispatch adapter

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
pub mod app;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod forms;
pub mod store;
pub mod timers;
pub mod views;
