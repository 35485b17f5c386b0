//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Signup, login and the signed-in session
//! - `booking` - Service booking submission and receipts
//! - `cart` - Cart and saved-for-later lists
//! - `catalog` - Product search and service listings
//! - `checkout` - Order placement and order receipts
//! - `validate` - Form field checks shared with the admin crate

pub mod auth;
pub mod booking;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod validate;
