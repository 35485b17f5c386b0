//! Cart line records.
//!
//! The same shape is used for the active cart (`cartItems`), the saved list
//! (`savedItems`) and the item snapshot inside an [`Order`](super::Order).

use serde::{Deserialize, Serialize};

use super::catalog::Product;
use super::id::ProductId;
use super::money::Money;

/// One product in a cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product ID; unique within a cart.
    pub id: ProductId,
    pub name: String,
    /// Unit price at the time the item was added.
    pub price: Money,
    /// Always at least 1.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CartLine {
    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// An item being added to the cart (no quantity yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewCartItem {
    /// Start a cart line at quantity 1.
    #[must_use]
    pub fn into_line(self) -> CartLine {
        CartLine {
            id: self.id,
            name: self.name,
            price: self.price,
            quantity: 1,
            image: self.image,
            category: self.category,
        }
    }
}

impl From<&Product> for NewCartItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: (!product.image.is_empty()).then(|| product.image.clone()),
            category: Some(product.category.clone()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = NewCartItem {
            id: ProductId::new("p1"),
            name: "Knotless Braid Wig".into(),
            price: Money::from_minor(14999),
            image: None,
            category: None,
        }
        .into_line();
        assert_eq!(line.quantity, 1);
        assert_eq!((CartLine { quantity: 2, ..line }).line_total(), Money::from_minor(29998));
    }

    #[test]
    fn test_deserialize_minimal_line() {
        let line: CartLine =
            serde_json::from_str(r#"{"id":"p1","name":"Wig","price":10,"quantity":3}"#).unwrap();
        assert_eq!(line.quantity, 3);
        assert_eq!(line.image, None);
        assert_eq!(line.line_total(), Money::from_major(30));
    }
}
