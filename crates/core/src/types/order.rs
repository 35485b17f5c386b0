//! Shop order records (`orders` key).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart::CartLine;
use super::id::OrderId;
use super::money::Money;
use super::status::{OrderPaymentStatus, PaymentMethod};

/// Shipping and contact details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postcode: String,
}

/// A checkout snapshot: the cart lines at the moment of purchase plus
/// customer and payment details.
///
/// Items are denormalized copies, so later catalog edits or deletions never
/// change a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    /// Cart total plus shipping.
    pub total: Money,
    pub customer_info: CustomerInfo,
    pub payment_method: PaymentMethod,
    pub payment_status: OrderPaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Number of units across all lines, capped at `u32::MAX`.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |total, line| total.saturating_add(line.quantity))
    }
}
