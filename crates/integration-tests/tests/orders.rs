//! Checkout through to admin order handling and sales figures.

#![allow(clippy::unwrap_used)]

use chrono::Utc;

use beauty_store_admin::{OrderAdmin, OrderFilter, SalesSummary, search::ORDERS_PER_PAGE};
use beauty_store_core::{
    CustomerInfo, MemoryStore, Money, NewCartItem, Order, OrderPaymentStatus, PaymentMethod,
    ProductId, StoreExt, StoreKey,
};
use beauty_store_storefront::{CartService, CheckoutError, CheckoutRequest, CheckoutService};

fn request(method: PaymentMethod) -> CheckoutRequest {
    CheckoutRequest {
        customer: CustomerInfo {
            full_name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: "07700900123".to_owned(),
            address: "1 Analytical Row".to_owned(),
            city: "London".to_owned(),
            postcode: "N1 1AA".to_owned(),
        },
        payment_method: method,
        receipt_url: None,
    }
}

fn fill_cart(store: &MemoryStore) {
    let cart = CartService::new(store);
    for (id, pence) in [("p1", 1_000), ("p2", 2_550), ("p1", 1_000)] {
        cart.add(NewCartItem {
            id: ProductId::new(id),
            name: id.to_owned(),
            price: Money::from_minor(pence),
            image: None,
            category: None,
        })
        .unwrap();
    }
}

#[test]
fn test_checkout_snapshots_cart() {
    let store = MemoryStore::new();
    fill_cart(&store);
    let before = CartService::new(&store).items().unwrap();

    let order = CheckoutService::new(&store, Money::from_major(5))
        .checkout(request(PaymentMethod::Card))
        .unwrap();

    let orders: Vec<Order> = store.load_list(StoreKey::Orders).unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(order.items, before);
    assert_eq!(order.total, Money::from_minor(2 * 1_000 + 2_550 + 500));
    assert_eq!(order.payment_status, OrderPaymentStatus::Paid);
    assert!(CartService::new(&store).items().unwrap().is_empty());
}

#[test]
fn test_checkout_rejections_write_nothing() {
    let store = MemoryStore::new();
    let checkout = CheckoutService::new(&store, Money::from_major(5));

    assert!(matches!(
        checkout.checkout(request(PaymentMethod::Card)),
        Err(CheckoutError::EmptyCart)
    ));

    fill_cart(&store);
    let mut bad = request(PaymentMethod::Card);
    bad.customer.email = "ada".to_owned();
    assert!(matches!(
        checkout.checkout(bad),
        Err(CheckoutError::Validation(_))
    ));

    assert!(store.load_list::<Order>(StoreKey::Orders).unwrap().is_empty());
    assert_eq!(CartService::new(&store).items().unwrap().len(), 2);
}

#[test]
fn test_bank_transfer_order_lifecycle() {
    let store = MemoryStore::new();
    fill_cart(&store);
    let checkout = CheckoutService::new(&store, Money::ZERO);
    let order = checkout
        .checkout(request(PaymentMethod::BankTransfer))
        .unwrap();
    assert_eq!(order.payment_status, OrderPaymentStatus::Pending);

    let admin = OrderAdmin::new(&store);
    admin
        .set_status(&order.id, OrderPaymentStatus::Approved)
        .unwrap();

    let updated = checkout
        .upload_receipt(&order.id, "receipts/ord.png")
        .unwrap();
    assert_eq!(updated.payment_status, OrderPaymentStatus::Pending);
    assert_eq!(updated.receipt_url.as_deref(), Some("receipts/ord.png"));

    let found = admin
        .search(&OrderFilter {
            query: Some("LOVELACE".to_owned()),
            status: Some(OrderPaymentStatus::Pending),
            ..OrderFilter::new(ORDERS_PER_PAGE)
        })
        .unwrap();
    assert_eq!(found.total_items, 1);
    assert_eq!(checkout.orders_for("ADA@example.com").unwrap().len(), 1);
}

#[test]
fn test_sales_count_paid_revenue_only() {
    let store = MemoryStore::new();
    let checkout = CheckoutService::new(&store, Money::ZERO);

    fill_cart(&store);
    checkout.checkout(request(PaymentMethod::Card)).unwrap();
    fill_cart(&store);
    checkout
        .checkout(request(PaymentMethod::BankTransfer))
        .unwrap();

    let orders: Vec<Order> = store.load_list(StoreKey::Orders).unwrap();
    let summary = SalesSummary::from_orders(&orders, Utc::now());
    assert_eq!(summary.today.order_count, 2);
    assert_eq!(summary.today.revenue, Money::from_minor(4_550));
    assert_eq!(summary.this_year, summary.today);
}
