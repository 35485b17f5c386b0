//! Type-safe money representation using decimal arithmetic.
//!
//! Prices, line totals and order totals are all [`Money`]. The amount is
//! stored in the currency's standard unit (pounds, not pence). Stored
//! documents carry it as a plain JSON number (`129.99`); both numbers and
//! decimal strings are accepted when reading.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing [`Money`] or a [`CurrencyCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The input is not a decimal number.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// The amount is below zero.
    #[error("amount cannot be negative")]
    Negative,
    /// Unknown ISO 4217 code.
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),
}

/// A non-negative amount of money.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(#[serde(serialize_with = "rust_decimal::serde::float::serialize")] Decimal);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wrap a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Whole units, e.g. `Money::from_major(200)` is 200.00.
    #[must_use]
    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Amount in minor units (pence), e.g. `Money::from_minor(12999)` is 129.99.
    #[must_use]
    pub fn from_minor(minor: i64) -> Self {
        Self(Decimal::new(minor, 2))
    }

    /// Parse a user-entered amount such as `"129.99"` or `"5"`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the input is not a decimal and
    /// `MoneyError::Negative` if it is below zero.
    pub fn parse(s: &str) -> Result<Self, MoneyError> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|_| MoneyError::InvalidAmount(s.to_owned()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative);
        }
        Ok(Self(amount))
    }

    /// The underlying decimal.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Format for display with a currency symbol, e.g. `£129.99`.
    #[must_use]
    pub fn display(&self, currency: CurrencyCode) -> String {
        format!("{}{:.2}", currency.symbol(), self.0.round_dp(2))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    GBP,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::GBP => "£",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// Three-letter code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::GBP => "GBP",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GBP" => Ok(Self::GBP),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            other => Err(MoneyError::UnsupportedCurrency(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("129.99").unwrap(), Money::from_minor(12999));
        assert_eq!(Money::parse(" 5 ").unwrap(), Money::from_major(5));
        assert!(matches!(Money::parse("abc"), Err(MoneyError::InvalidAmount(_))));
        assert!(matches!(Money::parse("-1"), Err(MoneyError::Negative)));
    }

    #[test]
    fn test_arithmetic() {
        let price = Money::from_minor(1050);
        assert_eq!(price * 3, Money::from_minor(3150));
        let total: Money = [price, Money::from_major(5)].iter().sum();
        assert_eq!(total, Money::from_minor(1550));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(20).to_string(), "20.00");
        assert_eq!(Money::from_minor(12999).display(CurrencyCode::GBP), "£129.99");
        assert_eq!(Money::from_minor(5).display(CurrencyCode::USD), "$0.05");
    }

    #[test]
    fn test_serde_accepts_numbers_and_strings() {
        let from_str: Money = serde_json::from_str("\"10.50\"").unwrap();
        let from_num: Money = serde_json::from_str("10.5").unwrap();
        assert_eq!(from_str, from_num);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_value(Money::from_minor(1050)).unwrap();
        assert_eq!(json, serde_json::json!(10.5));
        let back: Money = serde_json::from_value(json).unwrap();
        assert_eq!(back, Money::from_minor(1050));
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("gbp".parse::<CurrencyCode>().unwrap(), CurrencyCode::GBP);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }
}
