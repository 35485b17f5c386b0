//! Integration tests for Beauty Store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p beauty-store-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart` - Cart and saved-for-later properties
//! - `orders` - Checkout, receipts and admin order handling
//! - `bookings` - Booking lifecycle
//! - `admin` - Catalog administration and access control
//! - `persistence` - File-backed store behaviour
//!
//! Each test gets its own store: [`MemoryStore`] for logic, [`TempStore`]
//! where documents must survive on disk.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use beauty_store_core::{MemoryStore, Role};
use beauty_store_storefront::{AuthService, FileStore};

/// A [`FileStore`] in a fresh temporary directory, removed on drop.
pub struct TempStore {
    pub store: FileStore,
    dir: PathBuf,
}

impl TempStore {
    /// Create an empty store under the system temp directory.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("beauty-store-{}", uuid::Uuid::new_v4()));
        let store = FileStore::open(&dir).expect("create temp store");
        Self { store, dir }
    }

    /// Open a second handle on the same directory.
    ///
    /// # Panics
    ///
    /// Panics if the directory has been removed.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn reopen(&self) -> FileStore {
        FileStore::open(&self.dir).expect("reopen temp store")
    }
}

impl Default for TempStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// A memory store with an admin signed in.
///
/// # Panics
///
/// Panics if the admin account cannot be created.
#[must_use]
#[allow(clippy::expect_used)]
pub fn admin_store() -> MemoryStore {
    let store = MemoryStore::new();
    let auth = AuthService::new(&store);
    auth.create_user("boss@example.com", "pw", "Boss", Role::Admin)
        .expect("create admin");
    auth.login("boss@example.com", "pw").expect("admin login");
    store
}
