//! Core types for Beauty Store.
//!
//! Type-safe wrappers for domain concepts plus the record shapes persisted
//! under each store key.

pub mod booking;
pub mod cart;
pub mod catalog;
pub mod email;
pub mod id;
pub mod money;
pub mod order;
pub mod status;
pub mod user;

pub use booking::Booking;
pub use cart::{CartLine, NewCartItem};
pub use catalog::{GalleryItem, InventoryEntry, Product, Service, ServiceCategory};
pub use email::{Email, EmailError};
pub use id::*;
pub use money::{CurrencyCode, Money, MoneyError};
pub use order::{CustomerInfo, Order};
pub use status::*;
pub use user::{SessionUser, User};
