//! Read-only catalog browsing for the shop and the services pages.

use std::str::FromStr;

use tracing::debug;

use beauty_store_core::{
    CategoryId, GalleryItem, Money, Page, Product, ProductId, Service, ServiceCategory, Store,
    paginate,
};

use crate::db::{Collection, RepositoryError};

/// Products shown per shop page by default.
pub const DEFAULT_PRODUCTS_PER_PAGE: usize = 12;

/// Shop ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Catalog order.
    #[default]
    Featured,
    PriceLowHigh,
    PriceHighLow,
    Name,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Featured => write!(f, "featured"),
            Self::PriceLowHigh => write!(f, "price-low"),
            Self::PriceHighLow => write!(f, "price-high"),
            Self::Name => write!(f, "name"),
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-low" => Ok(Self::PriceLowHigh),
            "price-high" => Ok(Self::PriceHighLow),
            "name" => Ok(Self::Name),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

/// Shop filter. Empty fields do not filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// Exact category; `None` or `"all"` means every category.
    pub category: Option<String>,
    /// Case-insensitive substring of name or category.
    pub query: Option<String>,
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
    pub sort: SortBy,
    pub page: usize,
    pub per_page: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category: None,
            query: None,
            min_price: None,
            max_price: None,
            sort: SortBy::Featured,
            page: 1,
            per_page: DEFAULT_PRODUCTS_PER_PAGE,
        }
    }
}

impl ProductQuery {
    fn matches(&self, product: &Product, needle: Option<&str>) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| c == "all" || c == product.category);
        let query_ok = needle.is_none_or(|needle| {
            product.name.to_lowercase().contains(needle)
                || product.category.to_lowercase().contains(needle)
        });
        let min_ok = self.min_price.is_none_or(|min| product.price >= min);
        let max_ok = self.max_price.is_none_or(|max| product.price <= max);
        category_ok && query_ok && min_ok && max_ok
    }
}

/// Catalog reads over a shared store.
pub struct CatalogService<'a> {
    store: &'a dyn Store,
}

impl<'a> CatalogService<'a> {
    /// Create a catalog service.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Filtered, sorted, paginated products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the product document is unreadable.
    pub fn products(&self, query: &ProductQuery) -> Result<Page<Product>, RepositoryError> {
        let needle = query
            .query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        let mut products: Vec<Product> = Collection::<Product>::new(self.store)
            .list()?
            .into_iter()
            .filter(|product| query.matches(product, needle.as_deref()))
            .collect();

        match query.sort {
            SortBy::Featured => {}
            SortBy::PriceLowHigh => products.sort_by_key(|p| p.price),
            SortBy::PriceHighLow => products.sort_by(|a, b| b.price.cmp(&a.price)),
            SortBy::Name => products.sort_by_key(|p| p.name.to_lowercase()),
        }

        debug!(matches = products.len(), sort = %query.sort, "Product search");
        Ok(paginate(&products, query.page, query.per_page))
    }

    /// One product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the product document is unreadable.
    pub fn product(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        Collection::<Product>::new(self.store).get(id)
    }

    /// Distinct product categories in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the product document is unreadable.
    pub fn product_categories(&self) -> Result<Vec<String>, RepositoryError> {
        let mut categories: Vec<String> = Vec::new();
        for product in Collection::<Product>::new(self.store).list()? {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }
        Ok(categories)
    }

    /// Bookable services, optionally limited to one category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the service document is unreadable.
    pub fn services(&self, category: Option<&CategoryId>) -> Result<Vec<Service>, RepositoryError> {
        Ok(Collection::<Service>::new(self.store)
            .list()?
            .into_iter()
            .filter(|service| category.is_none_or(|c| &service.category == c))
            .collect())
    }

    /// Service categories.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the category document is unreadable.
    pub fn service_categories(&self) -> Result<Vec<ServiceCategory>, RepositoryError> {
        Collection::<ServiceCategory>::new(self.store).list()
    }

    /// Portfolio entries.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the gallery document is unreadable.
    pub fn gallery(&self) -> Result<Vec<GalleryItem>, RepositoryError> {
        Collection::<GalleryItem>::new(self.store).list()
    }
}
