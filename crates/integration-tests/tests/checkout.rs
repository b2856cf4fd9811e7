//! Integration tests for the cart to order flow.

#![allow(clippy::unwrap_used)]

use lookbook_core::{LineKey, NewCartLine, OrderStatus, Price, ShippingInfo};
use lookbook_integration_tests::open_store;

#[test]
fn test_hoodie_walkthrough() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path(), "fashion").unwrap();
    let hoodie = || {
        NewCartLine::new(1_u32, "Hoodie", Price::from_units(1000))
            .with_size("M")
            .with_color("Black")
    };
    let key = LineKey::variant(1_u32, Some("M"), Some("Black"));

    store.cart_mut().add(hoodie().with_quantity(2));
    store.cart_mut().add(hoodie());
    assert_eq!(store.cart().get(&key).map(|line| line.quantity), Some(3));
    assert_eq!(store.cart().total_amount(), Price::from_units(3000));

    store.cart_mut().adjust_quantity(&key, -1);
    assert_eq!(store.cart().total_items(), 2);

    store.cart_mut().update_quantity(&key, 0);
    assert!(store.cart().is_empty());
    assert_eq!(store.cart().total_amount(), Price::ZERO);
}

#[test]
fn test_checkout_snapshots_cart() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path(), "fashion").unwrap();
    store
        .cart_mut()
        .add(NewCartLine::new(1_u32, "Hoodie", Price::from_units(1000)).with_quantity(2));
    store
        .cart_mut()
        .add(NewCartLine::new(2_u32, "Sneakers", Price::from_units(2500)));

    let shipping = ShippingInfo::parse("12 Main St", "+1 555 0100").unwrap();
    let order = store.checkout(Some(shipping)).unwrap();
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.total, Price::from_units(4500));
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.id.as_str().starts_with("ORD-"));
    assert!(store.cart().is_empty());

    // New cart activity never reaches the placed order
    store
        .cart_mut()
        .add(NewCartLine::new(1_u32, "Hoodie", Price::from_units(1000)).with_quantity(5));
    let store = open_store(dir.path(), "fashion").unwrap();
    let stored = store.orders().get(&order.id).unwrap();
    assert_eq!(stored, &order);
    assert_eq!(stored.item_count(), 3);
}

#[test]
fn test_orders_are_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path(), "sneakers").unwrap();
    for id in 1..=3_u32 {
        store
            .cart_mut()
            .add(NewCartLine::new(id, "Runner", Price::from_units(i64::from(id) * 100)));
        store.checkout(None).unwrap();
    }

    let totals: Vec<Price> = store.orders().all().iter().map(|order| order.total).collect();
    assert_eq!(
        totals,
        vec![Price::from_units(300), Price::from_units(200), Price::from_units(100)]
    );
}

#[test]
fn test_checkout_with_empty_cart_places_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path(), "beauty").unwrap();
    assert!(store.checkout(None).is_none());
    assert_eq!(store.orders().count(), 0);
}
