//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BEAUTY_STORE_DATA_DIR` - Directory holding the JSON documents (default: ./data)
//! - `BEAUTY_STORE_SHIPPING_FEE` - Flat shipping fee added at checkout (default: 5.00)
//! - `BEAUTY_STORE_CURRENCY` - ISO 4217 display currency (default: GBP)

use std::path::PathBuf;

use thiserror::Error;

use beauty_store_core::{CurrencyCode, Money};

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_SHIPPING_FEE: &str = "5.00";
const DEFAULT_CURRENCY: &str = "GBP";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Where `FileStore` keeps its documents
    pub data_dir: PathBuf,
    /// Flat fee added to every order total
    pub shipping_fee: Money,
    /// Currency used when formatting amounts
    pub currency: CurrencyCode,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            shipping_fee: Money::from_major(5),
            currency: CurrencyCode::GBP,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let data_dir = PathBuf::from(get("BEAUTY_STORE_DATA_DIR", DEFAULT_DATA_DIR));
        let shipping_fee = Money::parse(&get("BEAUTY_STORE_SHIPPING_FEE", DEFAULT_SHIPPING_FEE))
            .map_err(|e| {
                ConfigError::InvalidEnvVar("BEAUTY_STORE_SHIPPING_FEE".to_string(), e.to_string())
            })?;
        let currency = get("BEAUTY_STORE_CURRENCY", DEFAULT_CURRENCY)
            .parse::<CurrencyCode>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("BEAUTY_STORE_CURRENCY".to_string(), e.to_string())
            })?;

        Ok(Self {
            data_dir,
            shipping_fee,
            currency,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("BEAUTY_STORE_DATA_DIR", "/var/lib/beauty"),
            ("BEAUTY_STORE_SHIPPING_FEE", "3.50"),
            ("BEAUTY_STORE_CURRENCY", "eur"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/beauty"));
        assert_eq!(config.shipping_fee, Money::from_minor(350));
        assert_eq!(config.currency, CurrencyCode::EUR);
    }

    #[test]
    fn test_invalid_values() {
        let err = StorefrontConfig::from_lookup(lookup(&[("BEAUTY_STORE_SHIPPING_FEE", "free")]))
            .unwrap_err();
        assert!(err.to_string().contains("BEAUTY_STORE_SHIPPING_FEE"));

        let err =
            StorefrontConfig::from_lookup(lookup(&[("BEAUTY_STORE_CURRENCY", "BTC")])).unwrap_err();
        assert!(err.to_string().contains("BEAUTY_STORE_CURRENCY"));
    }
}
