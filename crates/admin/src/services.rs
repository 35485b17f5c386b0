//! Bookable service administration.

use tracing::info;

use beauty_store_core::{CategoryId, Money, Service, ServiceCategory, ServiceId, Store, slugify};
use beauty_store_storefront::db::Collection;
use beauty_store_storefront::services::validate::{self, FieldError};

use crate::error::AdminError;

/// Input for a new service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub category: CategoryId,
    pub price: Money,
}

/// Fields to change on a service. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<CategoryId>,
    pub price: Option<Money>,
}

/// Booking path for a service title.
#[must_use]
pub fn booking_path(title: &str) -> String {
    format!("/book/{}", slugify(title))
}

/// Service CRUD.
pub struct ServiceAdmin<'a> {
    services: Collection<'a, Service>,
    categories: Collection<'a, ServiceCategory>,
}

impl<'a> ServiceAdmin<'a> {
    #[must_use]
    pub fn new(store: &'a dyn Store) -> Self {
        Self {
            services: Collection::new(store),
            categories: Collection::new(store),
        }
    }

    /// All services.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Store` if the document is unreadable.
    pub fn list(&self) -> Result<Vec<Service>, AdminError> {
        Ok(self.services.list()?)
    }

    /// Services in one category.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Store` if the document is unreadable.
    pub fn by_category(&self, category: &CategoryId) -> Result<Vec<Service>, AdminError> {
        Ok(self
            .services
            .list()?
            .into_iter()
            .filter(|service| &service.category == category)
            .collect())
    }

    fn require_category(&self, category: &CategoryId) -> Result<(), AdminError> {
        if self.categories.contains(category)? {
            Ok(())
        } else {
            Err(FieldError::new("category", format!("unknown category {category}")).into())
        }
    }

    /// Add a service keyed by the slug of its title.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Validation` for blank text, a non-positive price
    /// or an unknown category, and `AdminError::Conflict` if the slug is taken.
    pub fn add(&self, input: NewService) -> Result<Service, AdminError> {
        let title = validate::required("title", &input.title)?;
        let description = validate::required("description", &input.description)?;
        let price = validate::positive_price("price", input.price)?;
        self.require_category(&input.category)?;

        let service = self.services.insert(Service {
            id: ServiceId::new(slugify(title)),
            title: title.to_owned(),
            description: description.to_owned(),
            category: input.category,
            path: booking_path(title),
            price,
        })?;
        info!(service_id = %service.id, category = %service.category, "Service added");
        Ok(service)
    }

    /// Apply `patch`. The ID is kept; the path follows the (new) title.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotFound` for an unknown ID and
    /// `AdminError::Validation` as for [`ServiceAdmin::add`].
    pub fn update(&self, id: &ServiceId, patch: ServicePatch) -> Result<Service, AdminError> {
        let title = patch
            .title
            .as_deref()
            .map(|v| validate::required("title", v).map(str::to_owned))
            .transpose()?;
        let description = patch
            .description
            .as_deref()
            .map(|v| validate::required("description", v).map(str::to_owned))
            .transpose()?;
        let price = patch
            .price
            .map(|p| validate::positive_price("price", p))
            .transpose()?;
        if let Some(category) = &patch.category {
            self.require_category(category)?;
        }

        let service = self.services.update(id, |service| {
            if let Some(title) = title {
                service.title = title;
            }
            if let Some(description) = description {
                service.description = description;
            }
            if let Some(category) = patch.category {
                service.category = category;
            }
            if let Some(price) = price {
                service.price = price;
            }
            service.path = booking_path(&service.title);
        })?;
        info!(service_id = %service.id, "Service updated");
        Ok(service)
    }

    /// Remove a service.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotFound` for an unknown ID.
    pub fn delete(&self, id: &ServiceId) -> Result<Service, AdminError> {
        let service = self.services.delete(id)?;
        info!(service_id = %service.id, "Service deleted");
        Ok(service)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use beauty_store_core::MemoryStore;

    use super::*;

    fn new_service(title: &str) -> NewService {
        NewService {
            title: title.to_owned(),
            description: "Soft glam for the big day".to_owned(),
            category: CategoryId::new("makeup"),
            price: Money::from_major(150),
        }
    }

    #[test]
    fn test_add_slugs_title() {
        let store = MemoryStore::new();
        let admin = ServiceAdmin::new(&store);
        let service = admin.add(new_service("Prom  Night Glam")).unwrap();
        assert_eq!(service.id.as_str(), "prom-night-glam");
        assert_eq!(service.path, "/book/prom-night-glam");
        assert_eq!(admin.by_category(&CategoryId::new("makeup")).unwrap().len(), 5);

        assert!(matches!(
            admin.add(new_service("prom night glam")),
            Err(AdminError::Conflict(_))
        ));
    }

    #[test]
    fn test_add_rejects_unknown_category() {
        let store = MemoryStore::new();
        let mut input = new_service("Brow Lamination");
        input.category = CategoryId::new("brows");
        assert!(matches!(
            ServiceAdmin::new(&store).add(input),
            Err(AdminError::Validation(_))
        ));
    }

    #[test]
    fn test_update_regenerates_path() {
        let store = MemoryStore::new();
        let admin = ServiceAdmin::new(&store);
        let id = ServiceId::new("party-makeup");
        let updated = admin
            .update(
                &id,
                ServicePatch {
                    title: Some("Party Glam".to_owned()),
                    price: Some(Money::from_major(120)),
                    ..ServicePatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.path, "/book/party-glam");
        assert_eq!(updated.price, Money::from_major(120));

        assert!(matches!(
            admin.update(&ServiceId::new("nope"), ServicePatch::default()),
            Err(AdminError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        let admin = ServiceAdmin::new(&store);
        admin.delete(&ServiceId::new("wig-installation")).unwrap();
        assert_eq!(admin.list().unwrap().len(), 5);
    }
}
