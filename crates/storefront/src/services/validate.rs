//! Form field checks shared by checkout, booking and the admin screens.

use thiserror::Error;

use beauty_store_core::{Email, Money};

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Trimmed value, rejecting blank input.
///
/// # Errors
///
/// Returns `FieldError` if the value is empty after trimming.
pub fn required<'v>(field: &'static str, value: &'v str) -> Result<&'v str, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "is required"));
    }
    Ok(trimmed)
}

/// Trimmed value whose length in characters lies within `min..=max`.
///
/// # Errors
///
/// Returns `FieldError` if the value is blank or out of range.
pub fn length<'v>(
    field: &'static str,
    value: &'v str,
    min: usize,
    max: usize,
) -> Result<&'v str, FieldError> {
    let trimmed = required(field, value)?;
    let len = trimmed.chars().count();
    if len < min || len > max {
        return Err(FieldError::new(
            field,
            format!("must be between {min} and {max} characters"),
        ));
    }
    Ok(trimmed)
}

/// A syntactically valid email address.
///
/// # Errors
///
/// Returns `FieldError` if the address does not parse.
pub fn email(field: &'static str, value: &str) -> Result<Email, FieldError> {
    required(field, value)?;
    Email::parse(value).map_err(|e| FieldError::new(field, e.to_string()))
}

/// A strictly positive price.
///
/// # Errors
///
/// Returns `FieldError` if the amount is zero.
pub fn positive_price(field: &'static str, price: Money) -> Result<Money, FieldError> {
    if !price.is_positive() {
        return Err(FieldError::new(field, "must be greater than zero"));
    }
    Ok(price)
}

/// Trimmed optional text, with blank input treated as absent.
#[must_use]
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
