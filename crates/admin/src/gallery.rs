//! Portfolio gallery administration.

use tracing::info;

use beauty_store_core::{GalleryItem, GalleryItemId, Store};
use beauty_store_storefront::db::Collection;
use beauty_store_storefront::ids;
use beauty_store_storefront::services::validate;

use crate::error::AdminError;

/// Input for a new gallery entry. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGalleryItem {
    pub title: String,
    pub client: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

/// Gallery CRUD.
pub struct GalleryAdmin<'a> {
    items: Collection<'a, GalleryItem>,
}

impl<'a> GalleryAdmin<'a> {
    #[must_use]
    pub fn new(store: &'a dyn Store) -> Self {
        Self {
            items: Collection::new(store),
        }
    }

    /// All gallery entries.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Store` if the document is unreadable.
    pub fn list(&self) -> Result<Vec<GalleryItem>, AdminError> {
        Ok(self.items.list()?)
    }

    fn validated(input: &NewGalleryItem) -> Result<NewGalleryItem, AdminError> {
        Ok(NewGalleryItem {
            title: validate::required("title", &input.title)?.to_owned(),
            client: validate::required("client", &input.client)?.to_owned(),
            description: validate::required("description", &input.description)?.to_owned(),
            image: validate::required("image", &input.image)?.to_owned(),
            category: validate::required("category", &input.category)?.to_owned(),
        })
    }

    /// Add an entry keyed by the current time in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Validation` if any field is blank.
    pub fn add(&self, input: &NewGalleryItem) -> Result<GalleryItem, AdminError> {
        let input = Self::validated(input)?;
        let existing = self.items.list()?;
        let id = ids::unique_millis(|millis| existing.iter().any(|item| item.id.as_u64() == millis));

        let item = self.items.insert(GalleryItem {
            id: GalleryItemId::new(id),
            title: input.title,
            client: input.client,
            description: input.description,
            image: input.image,
            category: input.category,
        })?;
        info!(gallery_id = %item.id, "Gallery item added");
        Ok(item)
    }

    /// Replace every field of an entry.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotFound` for an unknown ID and
    /// `AdminError::Validation` if any field is blank.
    pub fn update(
        &self,
        id: GalleryItemId,
        input: &NewGalleryItem,
    ) -> Result<GalleryItem, AdminError> {
        let input = Self::validated(input)?;
        let item = self.items.replace(GalleryItem {
            id,
            title: input.title,
            client: input.client,
            description: input.description,
            image: input.image,
            category: input.category,
        })?;
        info!(gallery_id = %item.id, "Gallery item updated");
        Ok(item)
    }

    /// Remove an entry.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotFound` for an unknown ID.
    pub fn delete(&self, id: GalleryItemId) -> Result<GalleryItem, AdminError> {
        let item = self.items.delete(&id)?;
        info!(gallery_id = %item.id, "Gallery item deleted");
        Ok(item)
    }
}
