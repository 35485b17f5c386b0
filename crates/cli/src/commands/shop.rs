//! Catalog browsing commands.

use clap::Subcommand;

use beauty_store_core::{CategoryId, Money};
use beauty_store_storefront::{CatalogService, ProductQuery, SortBy};

use super::print_json;
use crate::Context;

#[derive(Subcommand)]
pub enum ShopView {
    /// Search products
    Products {
        #[arg(long)]
        category: Option<String>,
        /// Text to look for in name or category
        #[arg(short, long)]
        query: Option<String>,
        #[arg(long)]
        min_price: Option<Money>,
        #[arg(long)]
        max_price: Option<Money>,
        /// featured, price-low, price-high or name
        #[arg(long, default_value = "featured")]
        sort: SortBy,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// List bookable services
    Services {
        /// Category ID, e.g. hair
        #[arg(long)]
        category: Option<String>,
    },
    /// List service categories
    Categories,
    /// List gallery entries
    Gallery,
}

/// Print catalog listings.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read.
pub fn run(ctx: &Context, view: ShopView) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = CatalogService::new(&ctx.store);
    match view {
        ShopView::Products {
            category,
            query,
            min_price,
            max_price,
            sort,
            page,
        } => {
            let results = catalog.products(&ProductQuery {
                category,
                query,
                min_price,
                max_price,
                sort,
                page,
                ..ProductQuery::default()
            })?;
            print_json(&results)?;
        }
        ShopView::Services { category } => {
            let category = category.map(CategoryId::new);
            print_json(&catalog.services(category.as_ref())?)?;
        }
        ShopView::Categories => print_json(&catalog.service_categories()?)?,
        ShopView::Gallery => print_json(&catalog.gallery()?)?,
    }
    Ok(())
}
