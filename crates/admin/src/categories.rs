//! Service category administration.

use tracing::{info, warn};

use beauty_store_core::{CategoryId, Service, ServiceCategory, Store, slugify};
use beauty_store_storefront::db::Collection;
use beauty_store_storefront::services::validate;

use crate::error::AdminError;

const DEFAULT_ICON: &str = "Star";

/// Category CRUD. Deleting a category in use is refused.
pub struct CategoryAdmin<'a> {
    categories: Collection<'a, ServiceCategory>,
    services: Collection<'a, Service>,
}

impl<'a> CategoryAdmin<'a> {
    #[must_use]
    pub fn new(store: &'a dyn Store) -> Self {
        Self {
            categories: Collection::new(store),
            services: Collection::new(store),
        }
    }

    /// All categories.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Store` if the document is unreadable.
    pub fn list(&self) -> Result<Vec<ServiceCategory>, AdminError> {
        Ok(self.categories.list()?)
    }

    /// Add a category keyed by the slug of its name. A blank icon becomes
    /// `Star`.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Validation` for a blank name and
    /// `AdminError::Conflict` if the slug is taken.
    pub fn add(&self, name: &str, icon: Option<&str>) -> Result<ServiceCategory, AdminError> {
        let name = validate::required("name", name)?;
        let icon = icon
            .map(str::trim)
            .filter(|icon| !icon.is_empty())
            .unwrap_or(DEFAULT_ICON);

        let category = self.categories.insert(ServiceCategory {
            id: CategoryId::new(slugify(name)),
            name: name.to_owned(),
            icon: icon.to_owned(),
        })?;
        info!(category_id = %category.id, "Category added");
        Ok(category)
    }

    /// Rename a category or change its icon. The ID is kept.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotFound` for an unknown ID and
    /// `AdminError::Validation` for a blank name.
    pub fn update(
        &self,
        id: &CategoryId,
        name: Option<&str>,
        icon: Option<&str>,
    ) -> Result<ServiceCategory, AdminError> {
        let name = name
            .map(|v| validate::required("name", v).map(str::to_owned))
            .transpose()?;
        let icon = icon
            .map(|v| validate::required("icon", v).map(str::to_owned))
            .transpose()?;
        let category = self.categories.update(id, |category| {
            if let Some(name) = name {
                category.name = name;
            }
            if let Some(icon) = icon {
                category.icon = icon;
            }
        })?;
        info!(category_id = %category.id, "Category updated");
        Ok(category)
    }

    /// Remove a category no service refers to.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::CategoryInUse` if any service still uses it and
    /// `AdminError::NotFound` for an unknown ID.
    pub fn delete(&self, id: &CategoryId) -> Result<ServiceCategory, AdminError> {
        let count = self
            .services
            .list()?
            .iter()
            .filter(|service| &service.category == id)
            .count();
        if count > 0 {
            warn!(category_id = %id, count, "Category delete refused, still in use");
            return Err(AdminError::CategoryInUse {
                category: id.to_string(),
                count,
            });
        }
        let category = self.categories.delete(id)?;
        info!(category_id = %category.id, "Category deleted");
        Ok(category)
    }
}
