//! Cart and saved-for-later commands.
//!
//! # Usage
//!
//! ```bash
//! bs-cli cart add braided-wigs-1
//! bs-cli cart set-qty braided-wigs-1 3
//! bs-cli cart save braided-wigs-1
//! bs-cli cart restore braided-wigs-1
//! bs-cli cart show
//! ```

use clap::Subcommand;
use serde::Serialize;

use beauty_store_core::{CartLine, Money, NewCartItem, ProductId};
use beauty_store_storefront::{CartService, CatalogService};

use super::print_json;
use crate::Context;

#[derive(Subcommand)]
pub enum CartAction {
    /// Add one unit of a catalog product
    Add {
        /// Product ID
        product: String,
    },
    /// Remove a line from the cart
    Remove { product: String },
    /// Set a line's quantity (below 1 removes it)
    SetQty {
        product: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Move a line to saved-for-later
    Save { product: String },
    /// Move a saved line back to the cart
    Restore { product: String },
    /// Empty the cart
    Clear,
    /// Show cart, saved items and totals
    Show,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartView {
    items: Vec<CartLine>,
    saved_for_later: Vec<CartLine>,
    total_items: u32,
    subtotal: Money,
    shipping: Money,
    total: Money,
}

/// Run a cart command, then print the resulting cart.
///
/// # Errors
///
/// Returns an error for an unknown product or a store failure.
pub fn run(ctx: &Context, action: CartAction) -> Result<(), Box<dyn std::error::Error>> {
    let cart = CartService::new(&ctx.store);

    match action {
        CartAction::Add { product } => {
            let id = ProductId::new(product);
            let product = CatalogService::new(&ctx.store)
                .product(&id)?
                .ok_or_else(|| format!("unknown product: {id}"))?;
            cart.add(NewCartItem::from(&product))?;
        }
        CartAction::Remove { product } => cart.remove(&ProductId::new(product))?,
        CartAction::SetQty { product, quantity } => {
            cart.set_quantity(&ProductId::new(product), quantity)?;
        }
        CartAction::Save { product } => cart.save_for_later(&ProductId::new(product))?,
        CartAction::Restore { product } => cart.move_to_cart(&ProductId::new(product))?,
        CartAction::Clear => cart.clear()?,
        CartAction::Show => {}
    }

    let items = cart.items()?;
    let subtotal = cart.total_price()?;
    let shipping = if items.is_empty() {
        Money::ZERO
    } else {
        ctx.config.shipping_fee
    };
    print_json(&CartView {
        total_items: cart.total_items()?,
        saved_for_later: cart.saved_items()?,
        items,
        subtotal,
        shipping,
        total: subtotal + shipping,
    })?;
    Ok(())
}
