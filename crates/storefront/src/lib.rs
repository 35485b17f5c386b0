//! Beauty Store storefront library.
//!
//! Customer-facing state over a [`Store`](beauty_store_core::Store): cart,
//! checkout, bookings, accounts and catalog browsing, plus the file-backed
//! store and configuration used by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod ids;
pub mod services;

pub use config::{ConfigError, StorefrontConfig};
pub use db::{FileStore, RepositoryError};
pub use services::auth::{AuthError, AuthService};
pub use services::booking::{BookingError, BookingRequest, BookingService};
pub use services::cart::{CartError, CartService};
pub use services::catalog::{CatalogService, ProductQuery, SortBy};
pub use services::checkout::{CheckoutError, CheckoutRequest, CheckoutService};
pub use services::validate::FieldError;
