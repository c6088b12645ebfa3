//! Integration tests for the cart's quantity-merge semantics.
//!
//! These exercise the cart container against the real catalog fixtures, the
//! same path the cart routes take.

#![allow(clippy::unwrap_used)]

use renew_rubber_core::{Cart, Price, ProductId};
use renew_rubber_storefront::catalog::{CatalogClient, mock_products};

fn product(id: &str) -> renew_rubber_core::Product {
    mock_products()
        .into_iter()
        .find(|p| p.id.as_str() == id)
        .unwrap()
}

#[test]
fn repeated_adds_collapse_to_one_line_with_call_count_quantity() {
    let mut cart = Cart::new();
    for _ in 0..4 {
        cart.add_item(product("prod_01"));
    }

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].quantity, 4);
}

#[test]
fn zero_and_negative_quantities_remove_the_line() {
    for quantity in [0i64, -1] {
        let mut cart = Cart::new();
        cart.add_item(product("prod_01"));
        cart.update_quantity(&ProductId::new("prod_01"), quantity);
        assert!(cart.is_empty(), "quantity {quantity} should remove the line");
    }
}

#[test]
fn total_price_is_derived_from_lines() {
    // Two distinct services, quantities 1 and 3 at 4500 and 3500 cents
    let mut cart = Cart::new();
    cart.add_item(product("prod_01")); // 4500
    cart.add_item(product("prod_04")); // 3500
    cart.update_quantity(&ProductId::new("prod_04"), 3);

    assert_eq!(cart.total_items(), 4);
    assert_eq!(cart.total_price(), Price::from_cents(15000));

    // Totals follow every mutation; they are never stored separately
    cart.remove_item(&ProductId::new("prod_01"));
    assert_eq!(cart.total_price(), Price::from_cents(3 * 3500));
}

#[test]
fn cart_round_trips_through_serialization() {
    // The session store persists the cart as JSON; clearing it must survive
    // the round trip as an empty cart.
    let mut cart = Cart::new();
    cart.add_item(product("prod_03"));
    cart.clear();

    let json = serde_json::to_string(&cart).unwrap();
    let restored: Cart = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());

    // And a populated cart keeps its lines and derived totals
    let mut cart = Cart::new();
    cart.add_item(product("prod_02"));
    cart.add_item(product("prod_02"));
    let json = serde_json::to_string(&cart).unwrap();
    let restored: Cart = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.total_items(), 2);
    assert_eq!(restored.total_price(), Price::from_cents(9000));
}

#[tokio::test(start_paused = true)]
async fn catalog_lookup_feeds_the_cart() {
    let catalog = CatalogClient::new();
    let product = catalog
        .get_product(&ProductId::new("prod_05"))
        .await
        .unwrap();

    let mut cart = Cart::new();
    cart.add_item(product);
    assert_eq!(cart.total_price(), Price::from_cents(4800));

    // Unknown ids never reach the cart
    assert!(catalog.get_product(&ProductId::new("prod_99")).await.is_none());
}
