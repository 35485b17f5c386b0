//! Sales summary over orders.
//!
//! Revenue counts orders whose payment is `paid` or `completed`; order
//! counts include every order placed in the period.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::Serialize;

use beauty_store_core::{Money, Order, Store};
use beauty_store_storefront::db::Collection;

use crate::error::AdminError;

/// Revenue and order count for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SalesPeriod {
    pub revenue: Money,
    pub order_count: usize,
}

impl SalesPeriod {
    fn record(&mut self, order: &Order) {
        self.order_count += 1;
        if order.payment_status.counts_as_revenue() {
            self.revenue += order.total;
        }
    }
}

/// Sales for today, the last seven days and the calendar year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    pub today: SalesPeriod,
    pub last_7_days: SalesPeriod,
    pub this_year: SalesPeriod,
}

impl SalesSummary {
    /// Summarise `orders` as seen at `now`.
    #[must_use]
    pub fn from_orders(orders: &[Order], now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let week_start = now - Duration::days(7);
        let mut summary = Self::default();
        for order in orders {
            let placed = order.created_at;
            if placed.date_naive() == today {
                summary.today.record(order);
            }
            if placed >= week_start {
                summary.last_7_days.record(order);
            }
            if placed.year() == now.year() {
                summary.this_year.record(order);
            }
        }
        summary
    }
}

/// Sales summary for the stored orders as of `now`.
///
/// # Errors
///
/// Returns `AdminError::Store` if the orders document is unreadable.
pub fn summary(store: &dyn Store, now: DateTime<Utc>) -> Result<SalesSummary, AdminError> {
    let orders = Collection::<Order>::new(store).list()?;
    Ok(SalesSummary::from_orders(&orders, now))
}
