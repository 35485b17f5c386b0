//! Checkout: turns the active cart into an order.

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use beauty_store_core::{
    CartLine, CustomerInfo, Money, Order, OrderId, OrderPaymentStatus, PaymentMethod, Store,
};

use super::cart::{CartError, CartService};
use super::validate::{self, FieldError};
use crate::db::{Collection, RepositoryError};
use crate::ids;

/// Errors from checkout and order receipt handling.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A customer field was missing or malformed.
    #[error("invalid checkout details: {0}")]
    Validation(#[from] FieldError),

    /// Nothing to check out.
    #[error("cart is empty")]
    EmptyCart,

    /// Store or record lookup failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<CartError> for CheckoutError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::Store(e) => Self::Repository(RepositoryError::Store(e)),
            CartError::NotFound { list, id } => {
                Self::Repository(RepositoryError::NotFound(format!("{list} {id}")))
            }
        }
    }
}

/// Details entered on the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub customer: CustomerInfo,
    pub payment_method: PaymentMethod,
    /// Payment receipt attached on the form, if any.
    pub receipt_url: Option<String>,
}

/// Order placement and customer-side order views.
pub struct CheckoutService<'a> {
    store: &'a dyn Store,
    shipping_fee: Money,
}

impl<'a> CheckoutService<'a> {
    /// Create a checkout service charging `shipping_fee` per order.
    #[must_use]
    pub const fn new(store: &'a dyn Store, shipping_fee: Money) -> Self {
        Self {
            store,
            shipping_fee,
        }
    }

    fn orders(&self) -> Collection<'a, Order> {
        Collection::new(self.store)
    }

    /// Place an order for everything in the cart, then empty the cart.
    ///
    /// The order total is the cart total plus the shipping fee. Bank
    /// transfers start `pending`; other methods start `paid`.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::Validation` if a required field is blank or the
    /// email is malformed, and `CheckoutError::EmptyCart` if there is nothing
    /// to buy. Nothing is written in either case.
    pub fn checkout(&self, request: CheckoutRequest) -> Result<Order, CheckoutError> {
        let customer = validate_customer(request.customer).inspect_err(|e| {
            warn!(error = %e, "Checkout rejected");
        })?;

        let cart = CartService::new(self.store);
        let items = cart.items()?;
        if items.is_empty() {
            warn!("Checkout rejected, cart is empty");
            return Err(CheckoutError::EmptyCart);
        }

        let subtotal: Money = items.iter().map(CartLine::line_total).sum();
        let orders = self.orders();
        let existing = orders.list()?;
        let id = ids::unique_reference(ids::ORDER_PREFIX, |code| {
            existing.iter().any(|order| order.id.as_str() == code)
        });

        let order = orders.insert(Order {
            id: OrderId::new(id),
            items,
            total: subtotal + self.shipping_fee,
            customer_info: customer,
            payment_method: request.payment_method,
            payment_status: OrderPaymentStatus::initial(request.payment_method),
            receipt_url: validate::optional(request.receipt_url),
            created_at: Utc::now(),
        })?;
        cart.clear()?;

        info!(
            order_id = %order.id,
            total = %order.total,
            items = order.item_count(),
            payment_method = %order.payment_method,
            "Order placed"
        );
        Ok(order)
    }

    /// Attach a payment receipt to an order and put it back to `pending`
    /// for verification.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order does not exist.
    pub fn upload_receipt(&self, id: &OrderId, receipt_url: &str) -> Result<Order, CheckoutError> {
        let receipt_url = validate::required("receiptUrl", receipt_url)?.to_owned();
        let order = self.orders().update(id, |order| {
            order.receipt_url = Some(receipt_url);
            order.payment_status = OrderPaymentStatus::Pending;
        })?;
        info!(order_id = %order.id, "Order receipt uploaded");
        Ok(order)
    }

    /// Orders placed with `email`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document is unreadable.
    pub fn orders_for(&self, email: &str) -> Result<Vec<Order>, CheckoutError> {
        let mut orders: Vec<Order> = self
            .orders()
            .list()?
            .into_iter()
            .filter(|order| order.customer_info.email.eq_ignore_ascii_case(email.trim()))
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}

fn validate_customer(customer: CustomerInfo) -> Result<CustomerInfo, FieldError> {
    Ok(CustomerInfo {
        full_name: validate::required("fullName", &customer.full_name)?.to_owned(),
        email: validate::email("email", &customer.email)?.into_inner(),
        phone: validate::required("phone", &customer.phone)?.to_owned(),
        address: validate::required("address", &customer.address)?.to_owned(),
        city: customer.city.trim().to_owned(),
        postcode: customer.postcode.trim().to_owned(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use beauty_store_core::{MemoryStore, NewCartItem, ProductId};

    use super::*;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            full_name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: "07700900123".to_owned(),
            address: "1 Analytical Row".to_owned(),
            city: "London".to_owned(),
            postcode: "N1 9GU".to_owned(),
        }
    }

    fn request(payment_method: PaymentMethod) -> CheckoutRequest {
        CheckoutRequest {
            customer: customer(),
            payment_method,
            receipt_url: None,
        }
    }

    fn fill_cart(store: &MemoryStore) {
        let cart = CartService::new(store);
        let item = NewCartItem {
            id: ProductId::new("braided-wigs-1"),
            name: "Dreadlocks Braid Wig".to_owned(),
            price: Money::from_minor(12_999),
            image: None,
            category: None,
        };
        cart.add(item.clone()).unwrap();
        cart.add(item).unwrap();
    }

    #[test]
    fn test_checkout_snapshots_cart_and_clears_it() {
        let store = MemoryStore::new();
        fill_cart(&store);
        let before = CartService::new(&store).items().unwrap();

        let service = CheckoutService::new(&store, Money::from_major(5));
        let order = service.checkout(request(PaymentMethod::Card)).unwrap();

        assert_eq!(order.items, before);
        assert_eq!(order.total, Money::from_minor(26_498));
        assert_eq!(order.payment_status, OrderPaymentStatus::Paid);
        assert!(order.id.as_str().starts_with("ORD-"));
        assert!(CartService::new(&store).items().unwrap().is_empty());
        assert_eq!(service.orders_for("ADA@example.com").unwrap(), vec![order]);
    }

    #[test]
    fn test_bank_transfer_starts_pending() {
        let store = MemoryStore::new();
        fill_cart(&store);
        let order = CheckoutService::new(&store, Money::ZERO)
            .checkout(request(PaymentMethod::BankTransfer))
            .unwrap();
        assert_eq!(order.payment_status, OrderPaymentStatus::Pending);
        assert_eq!(order.total, Money::from_minor(25_998));
    }

    #[test]
    fn test_empty_cart_rejected() {
        let store = MemoryStore::new();
        let service = CheckoutService::new(&store, Money::from_major(5));
        assert!(matches!(
            service.checkout(request(PaymentMethod::Card)),
            Err(CheckoutError::EmptyCart)
        ));
        assert!(store.get("orders").unwrap().is_none());
    }

    #[test]
    fn test_missing_field_leaves_cart_alone() {
        let store = MemoryStore::new();
        fill_cart(&store);
        let mut bad = request(PaymentMethod::Card);
        bad.customer.phone = "  ".to_owned();

        let err = CheckoutService::new(&store, Money::from_major(5))
            .checkout(bad)
            .unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(ref e) if e.field == "phone"));
        assert_eq!(CartService::new(&store).total_items().unwrap(), 2);
    }

    #[test]
    fn test_receipt_attached_at_checkout() {
        let store = MemoryStore::new();
        fill_cart(&store);
        let service = CheckoutService::new(&store, Money::from_major(5));
        let order = service
            .checkout(CheckoutRequest {
                receipt_url: Some("  receipts/transfer.pdf ".to_owned()),
                ..request(PaymentMethod::BankTransfer)
            })
            .unwrap();
        assert_eq!(order.receipt_url.as_deref(), Some("receipts/transfer.pdf"));
        assert_eq!(order.payment_status, OrderPaymentStatus::Pending);

        fill_cart(&store);
        let order = service
            .checkout(CheckoutRequest {
                receipt_url: Some("   ".to_owned()),
                ..request(PaymentMethod::Card)
            })
            .unwrap();
        assert_eq!(order.receipt_url, None);
    }

    #[test]
    fn test_receipt_resets_to_pending() {
        let store = MemoryStore::new();
        fill_cart(&store);
        let service = CheckoutService::new(&store, Money::from_major(5));
        let order = service.checkout(request(PaymentMethod::Paypal)).unwrap();

        let updated = service
            .upload_receipt(&order.id, "receipts/ord.png")
            .unwrap();
        assert_eq!(updated.payment_status, OrderPaymentStatus::Pending);
        assert_eq!(updated.receipt_url.as_deref(), Some("receipts/ord.png"));

        assert!(matches!(
            service.upload_receipt(&OrderId::new("ORD-NONE0"), "x"),
            Err(CheckoutError::Repository(RepositoryError::NotFound(_)))
        ));
    }
}
