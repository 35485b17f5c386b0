//! Persistence for the storefront.
//!
//! # Store layout
//!
//! One JSON document per key (see [`StoreKey`](beauty_store_core::StoreKey)):
//!
//! - `cartItems`, `savedItems` - the active cart and the saved-for-later list
//! - `orders`, `bookings` - append-mostly transaction records
//! - `users`, `currentUser` - accounts and the signed-in projection
//! - `adminProducts`, `booking_services`, `service_categories`, `gallery_items`
//!   - catalog collections, seeded with defaults on first read
//!
//! [`FileStore`] keeps each document in `<data_dir>/<key>.json`.
//! [`Collection`] gives every list document the same load/edit/write-back
//! CRUD surface.

mod collection;
mod file_store;
pub mod seed;
pub mod users;

pub use collection::{Collection, Record};
pub use file_store::FileStore;

use beauty_store_core::StoreError;

/// Errors from repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Store read/write failed or a document is corrupt.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Requested record was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A record with the same identity already exists.
    #[error("conflict: {0}")]
    Conflict(String),
}
