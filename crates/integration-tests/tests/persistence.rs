//! Documents written through one `FileStore` handle are visible to the next.

#![allow(clippy::unwrap_used)]

use beauty_store_core::{
    CustomerInfo, Money, NewCartItem, PaymentMethod, ProductId, Store, StoreError, StoreKey,
};
use beauty_store_integration_tests::TempStore;
use beauty_store_storefront::{
    AuthService, CartError, CartService, CatalogService, CheckoutRequest, CheckoutService,
};

#[test]
fn test_cart_and_session_survive_reopen() {
    let temp = TempStore::new();
    let cart = CartService::new(&temp.store);
    let product = CatalogService::new(&temp.store)
        .product(&ProductId::new("braided-wigs-2"))
        .unwrap()
        .unwrap();
    cart.add(NewCartItem::from(&product)).unwrap();
    cart.add(NewCartItem::from(&product)).unwrap();

    let auth = AuthService::new(&temp.store);
    auth.signup("ada@example.com", "pw", "Ada").unwrap();
    auth.login("ada@example.com", "pw").unwrap();

    let reopened = temp.reopen();
    assert_eq!(CartService::new(&reopened).total_items().unwrap(), 2);
    assert_eq!(
        CartService::new(&reopened).total_price().unwrap(),
        Money::from_minor(2 * 14_999)
    );
    let session = AuthService::new(&reopened).current_user().unwrap().unwrap();
    assert_eq!(session.name, "Ada");
}

#[test]
fn test_documents_use_storage_keys() {
    let temp = TempStore::new();
    CartService::new(&temp.store)
        .add(NewCartItem {
            id: ProductId::new("p1"),
            name: "Lash Kit".to_owned(),
            price: Money::from_minor(1_999),
            image: None,
            category: None,
        })
        .unwrap();
    CheckoutService::new(&temp.store, Money::from_major(5))
        .checkout(CheckoutRequest {
            customer: CustomerInfo {
                full_name: "Ada Lovelace".to_owned(),
                email: "ada@example.com".to_owned(),
                phone: "07700900123".to_owned(),
                address: "1 Analytical Row".to_owned(),
                city: String::new(),
                postcode: String::new(),
            },
            payment_method: PaymentMethod::Paypal,
            receipt_url: None,
        })
        .unwrap();

    let raw = temp.store.get(StoreKey::Orders.as_str()).unwrap().unwrap();
    let orders: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let order = orders.get(0).unwrap();
    assert_eq!(order.get("paymentMethod").unwrap(), "paypal");
    assert_eq!(order.get("paymentStatus").unwrap(), "paid");
    assert!(order.get("customerInfo").unwrap().get("fullName").is_some());

    let cart = temp.store.get(StoreKey::CartItems.as_str()).unwrap().unwrap();
    assert_eq!(cart.trim(), "[]");
}

#[test]
fn test_corrupt_document_is_reported() {
    let temp = TempStore::new();
    temp.store
        .set(StoreKey::CartItems.as_str(), "{not json")
        .unwrap();

    let err = CartService::new(&temp.store).items().unwrap_err();
    assert!(matches!(err, CartError::Store(StoreError::Corrupt { .. })));
}
