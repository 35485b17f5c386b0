//! Catalog records: products with inventory, bookable services, service
//! categories and gallery items.
//!
//! Fields that older documents may lack carry explicit serde defaults so a
//! product stored before inventory tracking existed still loads with
//! `stock = 0` and an empty history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{CategoryId, GalleryItemId, InventoryEntryId, ProductId, ServiceId};
use super::money::Money;

/// A shop product (`adminProducts` key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub inventory_history: Vec<InventoryEntry>,
}

impl Product {
    /// Stock level recorded by the most recent inventory entry, if any.
    #[must_use]
    pub fn last_recorded_stock(&self) -> Option<u32> {
        self.inventory_history.last().map(|entry| entry.total_after)
    }
}

/// One restock event in a product's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    pub id: InventoryEntryId,
    pub date: DateTime<Utc>,
    /// Email (or "Admin") of whoever added the stock.
    pub added_by: String,
    pub units_added: u32,
    /// Stock level after this entry was applied.
    pub total_after: u32,
}

/// A bookable service (`booking_services` key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub title: String,
    pub description: String,
    pub category: CategoryId,
    /// Booking page path, `/book/<id>`.
    pub path: String,
    pub price: Money,
}

/// A grouping of services (`service_categories` key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategory {
    pub id: CategoryId,
    pub name: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_icon() -> String {
    "Star".to_owned()
}

/// A portfolio entry (`gallery_items` key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: GalleryItemId,
    pub title: String,
    pub client: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_defaults() {
        let product: Product = serde_json::from_str(
            r#"{"id":"braided-wigs-4","name":"Weave Braid Wig","price":159.99,"category":"Braided Wigs"}"#,
        )
        .unwrap();
        assert_eq!(product.stock, 0);
        assert!(product.inventory_history.is_empty());
        assert_eq!(product.last_recorded_stock(), None);
        assert_eq!(product.price, Money::from_minor(15999));
    }

    #[test]
    fn test_category_default_icon() {
        let category: ServiceCategory =
            serde_json::from_str(r#"{"id":"spa","name":"Spa Services"}"#).unwrap();
        assert_eq!(category.icon, "Star");
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{"id":"inv-1","date":"2025-09-15T10:30:00Z","addedBy":"admin@shop.com","unitsAdded":20,"totalAfter":20}"#;
        let entry: InventoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.added_by, "admin@shop.com");
        assert_eq!(entry.total_after, 20);
    }
}
