//! Account error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors from signup, login and session handling.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] beauty_store_core::EmailError),

    /// Unknown address or wrong password; the two are not distinguished.
    #[error("incorrect email or password")]
    InvalidCredentials,

    #[error("an account with this email already exists")]
    UserAlreadyExists,

    /// Empty password or blank display name.
    #[error("signup rejected: {0}")]
    WeakPassword(String),

    #[error("account store error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("could not hash password")]
    PasswordHash,
}
