//! Beauty Store admin library.
//!
//! Back-office operations over the same [`Store`] the storefront uses:
//! product and inventory management, services and their categories, the
//! gallery, booking and order administration, and the sales summary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bookings;
pub mod categories;
pub mod error;
pub mod gallery;
pub mod orders;
pub mod products;
pub mod sales;
pub mod search;
pub mod services;

pub use bookings::{BookingAdmin, BookingFilter};
pub use categories::CategoryAdmin;
pub use error::AdminError;
pub use gallery::{GalleryAdmin, NewGalleryItem};
pub use orders::{OrderAdmin, OrderFilter};
pub use products::{NewProduct, ProductAdmin, ProductPatch};
pub use sales::{SalesPeriod, SalesSummary};
pub use search::RecordFilter;
pub use services::{NewService, ServiceAdmin, ServicePatch};

use beauty_store_core::{SessionUser, Store};
use beauty_store_storefront::AuthService;

/// The signed-in user, provided they are an admin.
///
/// # Errors
///
/// Returns `AdminError::Unauthorized` if nobody is signed in or the session
/// belongs to a regular user.
pub fn require_admin(store: &dyn Store) -> Result<SessionUser, AdminError> {
    let session = AuthService::new(store).current_user().map_err(|e| {
        tracing::warn!(error = %e, "Could not read session");
        AdminError::Unauthorized
    })?;
    match session {
        Some(user) if user.is_admin() => Ok(user),
        _ => Err(AdminError::Unauthorized),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use beauty_store_core::{MemoryStore, Role};

    use super::*;

    #[test]
    fn test_require_admin() {
        let store = MemoryStore::new();
        assert!(matches!(require_admin(&store), Err(AdminError::Unauthorized)));

        let auth = AuthService::new(&store);
        auth.signup("ada@example.com", "pw", "Ada").unwrap();
        auth.login("ada@example.com", "pw").unwrap();
        assert!(matches!(require_admin(&store), Err(AdminError::Unauthorized)));

        auth.create_user("boss@example.com", "pw", "Boss", Role::Admin)
            .unwrap();
        auth.login("boss@example.com", "pw").unwrap();
        assert_eq!(require_admin(&store).unwrap().name, "Boss");
    }
}
