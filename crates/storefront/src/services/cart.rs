//! Shopping cart with a saved-for-later list.
//!
//! Both lists are read from the store on every call and written back after
//! every mutation, so two services over the same store always agree.
//! A product ID appears at most once per list and never in both.

use thiserror::Error;
use tracing::{debug, info};

use beauty_store_core::{CartLine, Money, NewCartItem, ProductId, Store, StoreError, StoreExt, StoreKey};

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The line is not in the list the operation reads from.
    #[error("{list} does not contain {id}")]
    NotFound { list: &'static str, id: ProductId },

    /// Store read/write failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Cart operations over a shared store.
pub struct CartService<'a> {
    store: &'a dyn Store,
}

impl<'a> CartService<'a> {
    /// Create a cart service.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Lines in the active cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the document is unreadable.
    pub fn items(&self) -> Result<Vec<CartLine>, CartError> {
        Ok(self.store.load_list(StoreKey::CartItems)?)
    }

    /// Lines saved for later.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the document is unreadable.
    pub fn saved_items(&self) -> Result<Vec<CartLine>, CartError> {
        Ok(self.store.load_list(StoreKey::SavedItems)?)
    }

    fn save_items(&self, items: &[CartLine]) -> Result<(), CartError> {
        self.store.save_json(StoreKey::CartItems, items)?;
        Ok(())
    }

    fn save_saved(&self, items: &[CartLine]) -> Result<(), CartError> {
        self.store.save_json(StoreKey::SavedItems, items)?;
        Ok(())
    }

    /// Add one unit of `item`, merging into an existing line.
    ///
    /// A saved line for the same product is pulled back into the cart and
    /// its quantity merged in.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the store fails.
    pub fn add(&self, item: NewCartItem) -> Result<CartLine, CartError> {
        let mut items = self.items()?;
        let mut saved = self.saved_items()?;
        let restored = take_line(&mut saved, &item.id, "saved items").ok();

        let extra = restored.as_ref().map_or(0, |previous| previous.quantity);
        let line = if let Some(line) = items.iter_mut().find(|line| line.id == item.id) {
            line.quantity = line.quantity.saturating_add(1).saturating_add(extra);
            line.clone()
        } else {
            let mut line = item.into_line();
            line.quantity = line.quantity.saturating_add(extra);
            items.push(line.clone());
            line
        };
        if restored.is_some() {
            self.save_saved(&saved)?;
        }
        self.save_items(&items)?;
        info!(product_id = %line.id, quantity = line.quantity, "Added to cart");
        Ok(line)
    }

    /// Remove a line. Missing IDs are ignored.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the store fails.
    pub fn remove(&self, id: &ProductId) -> Result<(), CartError> {
        let mut items = self.items()?;
        let before = items.len();
        items.retain(|line| &line.id != id);
        if items.len() == before {
            debug!(product_id = %id, "Remove ignored, not in cart");
            return Ok(());
        }
        self.save_items(&items)?;
        info!(product_id = %id, "Removed from cart");
        Ok(())
    }

    /// Set a line's quantity; anything below 1 removes the line.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the store fails.
    pub fn set_quantity(&self, id: &ProductId, quantity: i64) -> Result<(), CartError> {
        if quantity < 1 {
            return self.remove(id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let mut items = self.items()?;
        let Some(line) = items.iter_mut().find(|line| &line.id == id) else {
            debug!(product_id = %id, "Quantity update ignored, not in cart");
            return Ok(());
        };
        line.quantity = quantity;
        self.save_items(&items)?;
        info!(product_id = %id, quantity, "Updated cart quantity");
        Ok(())
    }

    /// Move a line from the cart to the saved list, keeping its quantity.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NotFound` if the cart has no such line.
    pub fn save_for_later(&self, id: &ProductId) -> Result<(), CartError> {
        let mut items = self.items()?;
        let line = take_line(&mut items, id, "cart")?;
        let mut saved = self.saved_items()?;
        merge_line(&mut saved, line);
        self.save_items(&items)?;
        self.save_saved(&saved)?;
        info!(product_id = %id, "Saved for later");
        Ok(())
    }

    /// Move a line from the saved list back into the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NotFound` if the saved list has no such line.
    pub fn move_to_cart(&self, id: &ProductId) -> Result<(), CartError> {
        let mut saved = self.saved_items()?;
        let line = take_line(&mut saved, id, "saved items")?;
        let mut items = self.items()?;
        merge_line(&mut items, line);
        self.save_saved(&saved)?;
        self.save_items(&items)?;
        info!(product_id = %id, "Moved to cart");
        Ok(())
    }

    /// Empty the cart. The saved list is untouched.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the store fails.
    pub fn clear(&self) -> Result<(), CartError> {
        self.save_items(&[])?;
        info!("Cleared cart");
        Ok(())
    }

    /// Sum of quantities in the cart, capped at `u32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the document is unreadable.
    pub fn total_items(&self) -> Result<u32, CartError> {
        Ok(self
            .items()?
            .iter()
            .fold(0, |total, line| total.saturating_add(line.quantity)))
    }

    /// Sum of price times quantity over the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the document is unreadable.
    pub fn total_price(&self) -> Result<Money, CartError> {
        Ok(self.items()?.iter().map(CartLine::line_total).sum())
    }
}

fn take_line(
    lines: &mut Vec<CartLine>,
    id: &ProductId,
    list: &'static str,
) -> Result<CartLine, CartError> {
    let position = lines
        .iter()
        .position(|line| &line.id == id)
        .ok_or_else(|| CartError::NotFound {
            list,
            id: id.clone(),
        })?;
    Ok(lines.remove(position))
}

fn merge_line(lines: &mut Vec<CartLine>, line: CartLine) {
    match lines.iter_mut().find(|existing| existing.id == line.id) {
        Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
        None => lines.push(line),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use beauty_store_core::MemoryStore;

    use super::*;

    fn item(id: &str, pounds: i64) -> NewCartItem {
        NewCartItem {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Money::from_major(pounds),
            image: None,
            category: None,
        }
    }

    #[test]
    fn test_add_merges_quantity() {
        let store = MemoryStore::new();
        let cart = CartService::new(&store);
        cart.add(item("p1", 10)).unwrap();
        let line = cart.add(item("p1", 10)).unwrap();

        assert_eq!(line.quantity, 2);
        assert_eq!(cart.items().unwrap().len(), 1);
        assert_eq!(cart.total_price().unwrap(), Money::from_major(20));
    }

    #[test]
    fn test_set_quantity_below_one_removes() {
        let store = MemoryStore::new();
        let cart = CartService::new(&store);
        cart.add(item("p1", 10)).unwrap();
        cart.add(item("p2", 5)).unwrap();

        cart.set_quantity(&ProductId::new("p2"), 4).unwrap();
        assert_eq!(cart.total_items().unwrap(), 5);

        cart.set_quantity(&ProductId::new("p1"), 0).unwrap();
        cart.set_quantity(&ProductId::new("p2"), -3).unwrap();
        assert!(cart.items().unwrap().is_empty());
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let store = MemoryStore::new();
        let cart = CartService::new(&store);
        cart.remove(&ProductId::new("ghost")).unwrap();
        cart.set_quantity(&ProductId::new("ghost"), 3).unwrap();
        assert!(cart.items().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_restore_keeps_quantity() {
        let store = MemoryStore::new();
        let cart = CartService::new(&store);
        cart.add(item("p1", 10)).unwrap();
        cart.set_quantity(&ProductId::new("p1"), 3).unwrap();

        cart.save_for_later(&ProductId::new("p1")).unwrap();
        assert!(cart.items().unwrap().is_empty());
        assert_eq!(cart.saved_items().unwrap()[0].quantity, 3);

        cart.move_to_cart(&ProductId::new("p1")).unwrap();
        assert!(cart.saved_items().unwrap().is_empty());
        assert_eq!(cart.items().unwrap()[0].quantity, 3);
    }

    fn assert_single_list(cart: &CartService<'_>, id: &ProductId) {
        let in_cart = cart.items().unwrap().iter().any(|line| &line.id == id);
        let in_saved = cart.saved_items().unwrap().iter().any(|line| &line.id == id);
        assert!(!(in_cart && in_saved), "{id} in both cart and saved list");
    }

    #[test]
    fn test_add_pulls_line_out_of_saved_list() {
        let store = MemoryStore::new();
        let cart = CartService::new(&store);
        let p1 = ProductId::new("p1");

        cart.add(item("p1", 10)).unwrap();
        cart.set_quantity(&p1, 2).unwrap();
        assert_single_list(&cart, &p1);
        cart.save_for_later(&p1).unwrap();
        assert_single_list(&cart, &p1);

        let line = cart.add(item("p1", 10)).unwrap();
        assert_single_list(&cart, &p1);
        assert_eq!(line.quantity, 3);
        assert!(cart.saved_items().unwrap().is_empty());
        assert_eq!(cart.items().unwrap().len(), 1);

        cart.save_for_later(&p1).unwrap();
        cart.move_to_cart(&p1).unwrap();
        assert_single_list(&cart, &p1);
        assert_eq!(cart.items().unwrap()[0].quantity, 3);
    }

    #[test]
    fn test_total_items_saturates() {
        let store = MemoryStore::new();
        let cart = CartService::new(&store);
        cart.add(item("p1", 1)).unwrap();
        cart.add(item("p2", 1)).unwrap();
        cart.set_quantity(&ProductId::new("p1"), i64::from(u32::MAX)).unwrap();

        assert_eq!(cart.total_items().unwrap(), u32::MAX);
    }

    #[test]
    fn test_save_missing_line_fails() {
        let store = MemoryStore::new();
        let cart = CartService::new(&store);
        assert!(matches!(
            cart.save_for_later(&ProductId::new("p9")),
            Err(CartError::NotFound { .. })
        ));
        assert!(matches!(
            cart.move_to_cart(&ProductId::new("p9")),
            Err(CartError::NotFound { .. })
        ));
    }

    #[test]
    fn test_clear_keeps_saved() {
        let store = MemoryStore::new();
        let cart = CartService::new(&store);
        cart.add(item("p1", 10)).unwrap();
        cart.add(item("p2", 10)).unwrap();
        cart.save_for_later(&ProductId::new("p2")).unwrap();

        cart.clear().unwrap();
        assert_eq!(cart.total_items().unwrap(), 0);
        assert_eq!(cart.saved_items().unwrap().len(), 1);
        assert_eq!(store.get("cartItems").unwrap().as_deref(), Some("[]"));
    }
}
