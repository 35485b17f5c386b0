//! Cart and saved-for-later behaviour across services sharing one store.

#![allow(clippy::unwrap_used)]

use beauty_store_core::{MemoryStore, Money, NewCartItem, ProductId};
use beauty_store_storefront::{CartError, CartService, CatalogService};

fn item(id: &str, pence: i64) -> NewCartItem {
    NewCartItem {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        price: Money::from_minor(pence),
        image: None,
        category: None,
    }
}

#[test]
fn test_add_same_product_increments_quantity() {
    let store = MemoryStore::new();
    let cart = CartService::new(&store);

    cart.add(item("p1", 1_000)).unwrap();
    let line = cart.add(item("p1", 1_000)).unwrap();

    assert_eq!(line.quantity, 2);
    assert_eq!(cart.items().unwrap().len(), 1);
    assert_eq!(cart.total_price().unwrap(), Money::from_major(20));
}

#[test]
fn test_total_tracks_every_operation() {
    let store = MemoryStore::new();
    let cart = CartService::new(&store);
    let p1 = ProductId::new("p1");
    let p2 = ProductId::new("p2");
    let p3 = ProductId::new("p3");

    cart.add(item("p1", 1_250)).unwrap();
    cart.add(item("p2", 499)).unwrap();
    cart.add(item("p3", 10_000)).unwrap();
    cart.set_quantity(&p2, 4).unwrap();
    cart.add(item("p1", 1_250)).unwrap();
    cart.save_for_later(&p3).unwrap();
    cart.remove(&ProductId::new("missing")).unwrap();

    let expected: Money = cart
        .items()
        .unwrap()
        .iter()
        .map(|line| line.price * line.quantity)
        .sum();
    assert_eq!(cart.total_price().unwrap(), expected);
    assert_eq!(cart.total_price().unwrap(), Money::from_minor(2 * 1_250 + 4 * 499));
    assert_eq!(cart.total_items().unwrap(), 6);

    cart.set_quantity(&p1, 0).unwrap();
    cart.set_quantity(&p2, -3).unwrap();
    assert!(cart.items().unwrap().is_empty());
    assert_eq!(cart.total_price().unwrap(), Money::ZERO);
}

#[test]
fn test_save_and_restore_keeps_quantity() {
    let store = MemoryStore::new();
    let cart = CartService::new(&store);
    let id = ProductId::new("p1");
    cart.add(item("p1", 1_000)).unwrap();
    cart.set_quantity(&id, 3).unwrap();

    cart.save_for_later(&id).unwrap();
    assert!(cart.items().unwrap().is_empty());
    assert_eq!(cart.saved_items().unwrap().first().map(|l| l.quantity), Some(3));

    cart.move_to_cart(&id).unwrap();
    assert!(cart.saved_items().unwrap().is_empty());
    let items = cart.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items.first().map(|l| l.quantity), Some(3));

    assert!(matches!(
        cart.move_to_cart(&id),
        Err(CartError::NotFound { .. })
    ));
}

#[test]
fn test_adding_a_saved_product_keeps_it_in_one_list() {
    let store = MemoryStore::new();
    let cart = CartService::new(&store);
    let saved_view = CartService::new(&store);
    let id = ProductId::new("p1");

    cart.add(item("p1", 1_000)).unwrap();
    cart.save_for_later(&id).unwrap();
    cart.add(item("p1", 1_000)).unwrap();

    let items = saved_view.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items.first().map(|l| l.quantity), Some(2));
    assert!(saved_view.saved_items().unwrap().is_empty());
    assert_eq!(saved_view.total_price().unwrap(), Money::from_major(20));
}

#[test]
fn test_total_items_caps_at_max() {
    let store = MemoryStore::new();
    let cart = CartService::new(&store);
    cart.add(item("p1", 100)).unwrap();
    cart.add(item("p2", 100)).unwrap();

    cart.set_quantity(&ProductId::new("p1"), i64::from(u32::MAX)).unwrap();
    assert_eq!(cart.total_items().unwrap(), u32::MAX);
}

#[test]
fn test_add_catalog_product() {
    let store = MemoryStore::new();
    let product = CatalogService::new(&store)
        .product(&ProductId::new("braided-wigs-1"))
        .unwrap()
        .unwrap();

    let line = CartService::new(&store)
        .add(NewCartItem::from(&product))
        .unwrap();
    assert_eq!(line.name, "Dreadlocks Braid Wig");
    assert_eq!(line.price, Money::from_minor(12_999));
    assert_eq!(line.category.as_deref(), Some("Braided Wigs"));
}
