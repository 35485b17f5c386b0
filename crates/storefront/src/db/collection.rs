//! Generic CRUD over a list document.
//!
//! Every operation loads the whole list, edits it in memory and writes the
//! whole list back.

use std::fmt::Display;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use beauty_store_core::{
    Booking, GalleryItem, GalleryItemId, Order, Product, Service, ServiceCategory, Store,
    StoreExt, StoreKey, User,
};
use beauty_store_core::{BookingId, CategoryId, OrderId, ProductId, ServiceId, UserId};

use super::RepositoryError;
use super::seed;

/// A record stored in a list document.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Identity within the list.
    type Id: PartialEq + Display + Clone;

    /// Document key holding the list.
    const KEY: StoreKey;

    /// Reseed when the stored list exists but is empty.
    const RESEED_WHEN_EMPTY: bool = false;

    /// The record's identity.
    fn id(&self) -> &Self::Id;

    /// Defaults written on first read when the key is absent.
    #[must_use]
    fn seed() -> Option<Vec<Self>> {
        None
    }
}

/// Load/edit/write-back access to one list document.
pub struct Collection<'a, T> {
    store: &'a dyn Store,
    _record: PhantomData<T>,
}

impl<'a, T: Record> Collection<'a, T> {
    /// Create a collection view over `store`.
    #[must_use]
    pub fn new(store: &'a dyn Store) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// All records, seeding defaults if the document is absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document is unreadable.
    pub fn list(&self) -> Result<Vec<T>, RepositoryError> {
        let stored: Option<Vec<T>> = self.store.load_json(T::KEY)?;
        let needs_seed = match &stored {
            None => true,
            Some(items) => items.is_empty() && T::RESEED_WHEN_EMPTY,
        };
        if needs_seed && let Some(defaults) = T::seed() {
            self.store.save_json(T::KEY, &defaults)?;
            debug!(key = %T::KEY, count = defaults.len(), "Seeded default records");
            return Ok(defaults);
        }
        Ok(stored.unwrap_or_default())
    }

    /// Find one record by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document is unreadable.
    pub fn get(&self, id: &T::Id) -> Result<Option<T>, RepositoryError> {
        Ok(self.list()?.into_iter().find(|record| record.id() == id))
    }

    /// Whether a record with this ID exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document is unreadable.
    pub fn contains(&self, id: &T::Id) -> Result<bool, RepositoryError> {
        Ok(self.list()?.iter().any(|record| record.id() == id))
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the ID is already taken.
    pub fn insert(&self, record: T) -> Result<T, RepositoryError> {
        let mut records = self.list()?;
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(RepositoryError::Conflict(format!(
                "{} already contains {}",
                T::KEY,
                record.id()
            )));
        }
        records.push(record.clone());
        self.store.save_json(T::KEY, &records)?;
        Ok(record)
    }

    /// Edit one record in place and persist the list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has this ID.
    pub fn update<F>(&self, id: &T::Id, edit: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.list()?;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("{} {id}", T::KEY)))?;
        edit(record);
        let updated = record.clone();
        self.store.save_json(T::KEY, &records)?;
        Ok(updated)
    }

    /// Replace the record that shares `record`'s ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has this ID.
    pub fn replace(&self, record: T) -> Result<T, RepositoryError> {
        let id = record.id().clone();
        self.update(&id, |existing| *existing = record)
    }

    /// Remove one record and persist the list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has this ID.
    pub fn delete(&self, id: &T::Id) -> Result<T, RepositoryError> {
        let mut records = self.list()?;
        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("{} {id}", T::KEY)))?;
        let removed = records.remove(position);
        self.store.save_json(T::KEY, &records)?;
        Ok(removed)
    }

    /// Overwrite the whole list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn save_all(&self, records: &[T]) -> Result<(), RepositoryError> {
        self.store.save_json(T::KEY, records)?;
        Ok(())
    }
}

impl Record for Order {
    type Id = OrderId;
    const KEY: StoreKey = StoreKey::Orders;

    fn id(&self) -> &OrderId {
        &self.id
    }
}

impl Record for Booking {
    type Id = BookingId;
    const KEY: StoreKey = StoreKey::Bookings;

    fn id(&self) -> &BookingId {
        &self.id
    }
}

impl Record for User {
    type Id = UserId;
    const KEY: StoreKey = StoreKey::Users;

    fn id(&self) -> &UserId {
        &self.id
    }
}

impl Record for Product {
    type Id = ProductId;
    const KEY: StoreKey = StoreKey::AdminProducts;
    const RESEED_WHEN_EMPTY: bool = true;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn seed() -> Option<Vec<Self>> {
        Some(seed::products())
    }
}

impl Record for Service {
    type Id = ServiceId;
    const KEY: StoreKey = StoreKey::BookingServices;

    fn id(&self) -> &ServiceId {
        &self.id
    }

    fn seed() -> Option<Vec<Self>> {
        Some(seed::services())
    }
}

impl Record for ServiceCategory {
    type Id = CategoryId;
    const KEY: StoreKey = StoreKey::ServiceCategories;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn seed() -> Option<Vec<Self>> {
        Some(seed::categories())
    }
}

impl Record for GalleryItem {
    type Id = GalleryItemId;
    const KEY: StoreKey = StoreKey::GalleryItems;

    fn id(&self) -> &GalleryItemId {
        &self.id
    }

    fn seed() -> Option<Vec<Self>> {
        Some(seed::gallery())
    }
}
