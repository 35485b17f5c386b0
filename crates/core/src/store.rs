//! Key/value store abstraction.
//!
//! Every piece of state is a JSON document under one of a fixed set of
//! [`StoreKey`]s. Modules read a whole document, edit it in memory and write
//! the whole document back; there are no partial writes and no transactions
//! across keys.
//!
//! [`MemoryStore`] lives here for tests and embedding. The durable
//! implementation is `FileStore` in the storefront crate.

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors raised at the store boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying storage failed.
    #[error("storage I/O error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored document exists but does not parse as the expected shape.
    #[error("corrupt document under {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An in-process lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

/// The fixed set of document keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    CartItems,
    SavedItems,
    Bookings,
    Orders,
    Users,
    CurrentUser,
    AdminProducts,
    GalleryItems,
    BookingServices,
    ServiceCategories,
}

impl StoreKey {
    /// Every key, in a stable order.
    pub const ALL: [Self; 10] = [
        Self::CartItems,
        Self::SavedItems,
        Self::Bookings,
        Self::Orders,
        Self::Users,
        Self::CurrentUser,
        Self::AdminProducts,
        Self::GalleryItems,
        Self::BookingServices,
        Self::ServiceCategories,
    ];

    /// The key string as persisted.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CartItems => "cartItems",
            Self::SavedItems => "savedItems",
            Self::Bookings => "bookings",
            Self::Orders => "orders",
            Self::Users => "users",
            Self::CurrentUser => "currentUser",
            Self::AdminProducts => "adminProducts",
            Self::GalleryItems => "gallery_items",
            Self::BookingServices => "booking_services",
            Self::ServiceCategories => "service_categories",
        }
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw string key/value storage.
///
/// Methods take `&self`; implementations provide their own interior
/// mutability so services can share one store by reference.
pub trait Store: Send + Sync {
    /// Read the raw document under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the document under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the document under `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Keys currently present.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be listed.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// Typed JSON access on top of any [`Store`].
pub trait StoreExt: Store {
    /// Load and deserialize the document under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the document does not parse as `T`.
    fn load_json<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.get(key.as_str())? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.as_str().to_owned(),
                source,
            })
    }

    /// Load a list document, treating a missing key as empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the document is not a list of `T`.
    fn load_list<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Vec<T>, StoreError> {
        Ok(self.load_json(key)?.unwrap_or_default())
    }

    /// Serialize `value` and write it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the write fails.
    fn save_json<T: Serialize + ?Sized>(&self, key: StoreKey, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.set(key.as_str(), &raw)?;
        tracing::trace!(key = %key, bytes = raw.len(), "Saved document");
        Ok(())
    }
}

impl<S: Store + ?Sized> StoreExt for S {}

/// In-memory store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
}
