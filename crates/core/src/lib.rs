//! Beauty Store Core - Shared types and store abstraction.
//!
//! This crate provides the types used across all Beauty Store components:
//! - `storefront` - Cart, checkout, bookings and customer accounts
//! - `admin` - Back-office catalog, inventory and payment management
//! - `cli` - Command-line front-end over both
//!
//! # Architecture
//!
//! The core crate contains only types and traits plus an in-memory store - no
//! file I/O, no clocks, no randomness. Durable storage lives in the
//! storefront crate (`FileStore`).
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money, emails, statuses and the persisted records
//! - [`store`] - Key/value [`Store`] trait, typed JSON access, [`MemoryStore`]
//! - [`page`] - Slice pagination shared by catalog and admin listings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod page;
pub mod store;
pub mod types;

pub use page::{Page, paginate};
pub use store::{MemoryStore, Store, StoreError, StoreExt, StoreKey};
pub use types::*;
