//! Cart record durability across storefront restarts.

#![allow(clippy::unwrap_used)]

use std::time::Instant;

use asfi_core::Price;
use asfi_integration_tests::{item, valid_checkout_form};
use asfi_storefront::actions::Action;
use asfi_storefront::app::Storefront;
use asfi_storefront::config::StorefrontConfig;
use asfi_storefront::store::{CART_KEY, JsonFileStore};

fn open(dir: &std::path::Path) -> Storefront<JsonFileStore> {
    Storefront::new(JsonFileStore::new(dir), StorefrontConfig::default())
}

#[test]
fn cart_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let now = Instant::now();

    let mut app = open(dir.path());
    app.handle(Action::AddItem(item("p1", "Widget", 100)), now)
        .unwrap();
    app.handle(Action::AddItem(item("p1", "Widget", 100)), now)
        .unwrap();
    app.handle(Action::AddItem(item("p2", "Gadget", 250)), now)
        .unwrap();
    drop(app);

    let reopened = open(dir.path());
    assert_eq!(reopened.cart().total_item_count(), 3);
    assert_eq!(reopened.cart().subtotal(), Price::from_units(450));

    // Insertion order survives the round trip.
    let ids: Vec<&str> = reopened
        .cart()
        .items()
        .iter()
        .map(|line| line.id.as_str())
        .collect();
    assert_eq!(ids, ["p1", "p2"]);
}

#[test]
fn placed_order_clears_the_record_for_the_next_session() {
    let dir = tempfile::tempdir().unwrap();
    let now = Instant::now();

    let mut app = open(dir.path());
    app.handle(Action::AddItem(item("p1", "Widget", 100)), now)
        .unwrap();
    app.handle(Action::ViewCart, now).unwrap();
    app.handle(Action::Checkout, now).unwrap();
    app.handle(Action::PlaceOrder(valid_checkout_form()), now)
        .unwrap();
    drop(app);

    // The record file is gone, not rewritten as an empty list.
    assert!(!dir.path().join(format!("{CART_KEY}.json")).exists());

    let reopened = open(dir.path());
    assert_eq!(reopened.cart().total_item_count(), 0);
    assert!(reopened.cart().subtotal().is_zero());
}

#[test]
fn corrupt_record_degrades_to_an_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(format!("{CART_KEY}.json")),
        "{\"oops\": true",
    )
    .unwrap();

    let app = open(dir.path());
    assert!(app.cart().is_empty());
}

#[test]
fn record_is_plain_json_line_items() {
    let dir = tempfile::tempdir().unwrap();
    let now = Instant::now();

    let mut app = open(dir.path());
    app.handle(Action::AddItem(item("p1", "Widget", 100)), now)
        .unwrap();
    drop(app);

    let raw = std::fs::read_to_string(dir.path().join(format!("{CART_KEY}.json"))).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let lines = parsed.as_array().unwrap();
    assert_eq!(lines.len(), 1);
    let line = lines.first().unwrap();
    assert_eq!(line["id"], "p1");
    assert_eq!(line["name"], "Widget");
    assert_eq!(line["quantity"], 1);
}
