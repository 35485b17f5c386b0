//! Order administration: search, filter and payment status changes.

use tracing::{debug, info};

use beauty_store_core::{Order, OrderId, OrderPaymentStatus, Page, Store, paginate};
use beauty_store_storefront::db::Collection;

use crate::error::AdminError;
use crate::search::{RecordFilter, any_contains};

/// Filter over orders. The date range applies to the day the order was
/// placed (UTC).
pub type OrderFilter = RecordFilter<OrderPaymentStatus>;

/// Back-office view of orders.
pub struct OrderAdmin<'a> {
    orders: Collection<'a, Order>,
}

impl<'a> OrderAdmin<'a> {
    #[must_use]
    pub fn new(store: &'a dyn Store) -> Self {
        Self {
            orders: Collection::new(store),
        }
    }

    /// Every order, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Store` if the document is unreadable.
    pub fn list(&self) -> Result<Vec<Order>, AdminError> {
        Ok(self.orders.list()?)
    }

    /// Orders matching `filter`, one page at a time.
    ///
    /// The query matches order ID, customer name and email, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Store` if the document is unreadable.
    pub fn search(&self, filter: &OrderFilter) -> Result<Page<Order>, AdminError> {
        let needle = filter.needle();
        let matches: Vec<Order> = self
            .orders
            .list()?
            .into_iter()
            .filter(|order| {
                needle.as_deref().is_none_or(|needle| {
                    any_contains(
                        needle,
                        &[
                            order.id.as_str(),
                            &order.customer_info.full_name,
                            &order.customer_info.email,
                        ],
                    )
                })
            })
            .filter(|order| filter.status_matches(&order.payment_status))
            .filter(|order| filter.in_range(order.created_at.date_naive()))
            .collect();
        debug!(matches = matches.len(), "Order search");
        Ok(paginate(&matches, filter.page, filter.per_page))
    }

    /// One order by ID.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotFound` for an unknown ID.
    pub fn get(&self, id: &OrderId) -> Result<Order, AdminError> {
        self.orders
            .get(id)?
            .ok_or_else(|| AdminError::NotFound(format!("order {id}")))
    }

    /// Set an order's payment status. Any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotFound` for an unknown ID.
    pub fn set_status(
        &self,
        id: &OrderId,
        status: OrderPaymentStatus,
    ) -> Result<Order, AdminError> {
        let order = self
            .orders
            .update(id, |order| order.payment_status = status)?;
        info!(order_id = %order.id, status = %status, "Order status updated");
        Ok(order)
    }
}
