//! Email addresses as typed on the signup, checkout and booking forms.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Why a form value is not an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("no address given")]
    Blank,
    #[error("address is {len} characters, limit is {}", Email::MAX_LENGTH)]
    TooLong { len: usize },
    /// Whitespace inside the address.
    #[error("address contains whitespace")]
    Whitespace,
    /// Not `name@host.tld`.
    #[error("address must look like name@host.tld")]
    Malformed,
}

/// A customer or staff email address of the form `name@host.tld`.
///
/// Surrounding whitespace is dropped. Case is kept as entered; lookups that
/// need case-insensitivity compare with [`Email::eq_ignore_case`].
///
/// ```
/// use beauty_store_core::Email;
///
/// assert!(Email::parse(" sarah.j@email.com ").is_ok());
/// assert!(Email::parse("user@localhost").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Longest address accepted.
    pub const MAX_LENGTH: usize = 254;

    /// Validate form input.
    ///
    /// # Errors
    ///
    /// Returns the first [`EmailError`] rule the input breaks.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let address = input.trim();
        if address.is_empty() {
            return Err(EmailError::Blank);
        }
        if address.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong { len: address.len() });
        }
        if address.chars().any(char::is_whitespace) {
            return Err(EmailError::Whitespace);
        }

        let mut parts = address.split('@');
        let (Some(name), Some(host), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(EmailError::Malformed);
        };
        let host_ok = host
            .rsplit_once('.')
            .is_some_and(|(domain, tld)| !domain.is_empty() && !tld.is_empty());
        if name.is_empty() || !host_ok {
            return Err(EmailError::Malformed);
        }

        Ok(Self(address.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// ASCII case-insensitive comparison with raw form input.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_form_addresses() {
        for ok in ["a@x.com", "emma.w@email.com", "user+tag@example.co.uk"] {
            assert!(Email::parse(ok).is_ok(), "{ok}");
        }
        assert_eq!(
            Email::parse("  admin@shop.com\n").unwrap().as_str(),
            "admin@shop.com"
        );
    }

    #[test]
    fn test_rejects() {
        assert_eq!(Email::parse("   "), Err(EmailError::Blank));
        assert_eq!(Email::parse("ada lovelace@x.com"), Err(EmailError::Whitespace));
        for bad in ["nope", "@shop.com", "user@", "user@.com", "user@shop.", "a@b@c.com"] {
            assert_eq!(Email::parse(bad), Err(EmailError::Malformed), "{bad}");
        }
        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(Email::parse(&long), Err(EmailError::TooLong { len: 262 }));
    }

    #[test]
    fn test_case_insensitive_match() {
        let email = Email::parse("Sarah.J@Email.com").unwrap();
        assert!(email.eq_ignore_case(" sarah.j@email.COM"));
        assert!(!email.eq_ignore_case("emma@email.com"));
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"Sarah.J@Email.com\"");
    }
}
