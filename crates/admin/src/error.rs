//! Unified error handling for admin operations.

use thiserror::Error;

use beauty_store_core::StoreError;
use beauty_store_storefront::{FieldError, RepositoryError};

/// Errors from back-office operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// An input field was missing or malformed.
    #[error("Validation error: {0}")]
    Validation(#[from] FieldError),

    /// The record to change does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record with the same identity already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Services still reference the category.
    #[error("category {category} is used by {count} service(s)")]
    CategoryInUse { category: String, count: usize },

    /// No admin is signed in.
    #[error("Unauthorized: admin sign-in required")]
    Unauthorized,

    /// Store read/write failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<RepositoryError> for AdminError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Store(e) => Self::Store(e),
            RepositoryError::NotFound(what) => Self::NotFound(what),
            RepositoryError::Conflict(what) => Self::Conflict(what),
        }
    }
}
