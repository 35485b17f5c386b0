//! Product administration and inventory tracking.

use chrono::Utc;
use tracing::{info, warn};

use beauty_store_core::{
    InventoryEntry, InventoryEntryId, Money, Page, Product, ProductId, Store, paginate,
};
use beauty_store_storefront::db::Collection;
use beauty_store_storefront::ids;
use beauty_store_storefront::services::validate::{self, FieldError};

use crate::error::AdminError;
use crate::search::INVENTORY_HISTORY_PER_PAGE;

/// Recorded as `added_by` when no staff email is known.
const DEFAULT_ADDED_BY: &str = "Admin";

/// Input for a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: Money,
    pub category: String,
    pub image: String,
}

/// Fields to change on a product. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub category: Option<String>,
    pub image: Option<String>,
}

/// Product CRUD and restocking.
pub struct ProductAdmin<'a> {
    products: Collection<'a, Product>,
}

impl<'a> ProductAdmin<'a> {
    #[must_use]
    pub fn new(store: &'a dyn Store) -> Self {
        Self {
            products: Collection::new(store),
        }
    }

    /// All products in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Store` if the document is unreadable.
    pub fn list(&self) -> Result<Vec<Product>, AdminError> {
        Ok(self.products.list()?)
    }

    /// Add a product with no stock, keyed `product-<millis>`.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Validation` if name, category or image is blank,
    /// or the price is not positive.
    pub fn add(&self, input: NewProduct) -> Result<Product, AdminError> {
        let name = validate::required("name", &input.name)?;
        let price = validate::positive_price("price", input.price)?;
        let category = validate::required("category", &input.category)?;
        let image = validate::required("image", &input.image)?;

        let existing = self.products.list()?;
        let millis = ids::unique_millis(|millis| {
            let candidate = format!("product-{millis}");
            existing.iter().any(|p| p.id.as_str() == candidate)
        });

        let product = self.products.insert(Product {
            id: ProductId::new(format!("product-{millis}")),
            name: name.to_owned(),
            price,
            category: category.to_owned(),
            image: image.to_owned(),
            stock: 0,
            inventory_history: Vec::new(),
        })?;
        info!(product_id = %product.id, price = %product.price, "Product added");
        Ok(product)
    }

    /// Apply `patch` to a product. Stock and history are not editable here.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotFound` for an unknown ID and
    /// `AdminError::Validation` for blank text or a non-positive price.
    pub fn update(&self, id: &ProductId, patch: ProductPatch) -> Result<Product, AdminError> {
        let name = patch
            .name
            .as_deref()
            .map(|v| validate::required("name", v).map(str::to_owned))
            .transpose()?;
        let price = patch
            .price
            .map(|p| validate::positive_price("price", p))
            .transpose()?;
        let category = patch
            .category
            .as_deref()
            .map(|v| validate::required("category", v).map(str::to_owned))
            .transpose()?;
        let image = patch
            .image
            .as_deref()
            .map(|v| validate::required("image", v).map(str::to_owned))
            .transpose()?;

        let product = self.products.update(id, |product| {
            if let Some(name) = name {
                product.name = name;
            }
            if let Some(price) = price {
                product.price = price;
            }
            if let Some(category) = category {
                product.category = category;
            }
            if let Some(image) = image {
                product.image = image;
            }
        })?;
        info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    /// Remove a product.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotFound` for an unknown ID.
    pub fn delete(&self, id: &ProductId) -> Result<Product, AdminError> {
        let product = self.products.delete(id)?;
        info!(product_id = %product.id, "Product deleted");
        Ok(product)
    }

    /// Add `units` to a product's stock and record the restock.
    ///
    /// A blank `added_by` is recorded as `Admin`.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Validation` if `units` is zero and
    /// `AdminError::NotFound` for an unknown product.
    pub fn add_inventory(
        &self,
        id: &ProductId,
        units: u32,
        added_by: &str,
    ) -> Result<Product, AdminError> {
        if units == 0 {
            warn!(product_id = %id, "Restock rejected, no units");
            return Err(FieldError::new("units", "must be greater than zero").into());
        }
        let added_by = match added_by.trim() {
            "" => DEFAULT_ADDED_BY.to_owned(),
            email => email.to_owned(),
        };

        let product = self.products.update(id, |product| {
            let millis = ids::unique_millis(|millis| {
                let candidate = format!("inv-{millis}");
                product
                    .inventory_history
                    .iter()
                    .any(|entry| entry.id.as_str() == candidate)
            });
            let total_after = product.stock.saturating_add(units);
            product.stock = total_after;
            product.inventory_history.push(InventoryEntry {
                id: InventoryEntryId::new(format!("inv-{millis}")),
                date: Utc::now(),
                added_by,
                units_added: units,
                total_after,
            });
        })?;

        info!(
            product_id = %product.id,
            units,
            stock = product.stock,
            "Inventory added"
        );
        Ok(product)
    }

    /// A product's restock history, newest first, five entries per page.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotFound` for an unknown product.
    pub fn inventory_history(
        &self,
        id: &ProductId,
        page: usize,
    ) -> Result<Page<InventoryEntry>, AdminError> {
        let product = self
            .products
            .get(id)?
            .ok_or_else(|| AdminError::NotFound(format!("product {id}")))?;
        let newest_first: Vec<InventoryEntry> =
            product.inventory_history.into_iter().rev().collect();
        Ok(paginate(&newest_first, page, INVENTORY_HISTORY_PER_PAGE))
    }
}
