//! Status enums for payments and accounts.
//!
//! Every enum serializes to the lowercase/kebab-case strings stored in the
//! JSON documents (`"bank-transfer"`, `"pending"`, `"admin"`), and round-trips
//! through `Display`/`FromStr` for the CLI.

use serde::{Deserialize, Serialize};

use super::email::Email;

/// How the customer pays for an order or booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Manual transfer; verified by an admin against an uploaded receipt.
    #[default]
    BankTransfer,
    Card,
    Paypal,
    DebitCard,
}

impl PaymentMethod {
    /// Bank transfers start unverified; every other method is taken as paid.
    #[must_use]
    pub const fn requires_verification(&self) -> bool {
        matches!(self, Self::BankTransfer)
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BankTransfer => write!(f, "bank-transfer"),
            Self::Card => write!(f, "card"),
            Self::Paypal => write!(f, "paypal"),
            Self::DebitCard => write!(f, "debit-card"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bank-transfer" => Ok(Self::BankTransfer),
            "card" => Ok(Self::Card),
            "paypal" => Ok(Self::Paypal),
            "debit-card" => Ok(Self::DebitCard),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Payment status of a service booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingPaymentStatus {
    #[default]
    Pending,
    Paid,
    Approved,
}

impl BookingPaymentStatus {
    /// Status a new booking starts in.
    #[must_use]
    pub const fn initial(method: PaymentMethod) -> Self {
        if method.requires_verification() {
            Self::Pending
        } else {
            Self::Paid
        }
    }
}

impl std::fmt::Display for BookingPaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Paid => write!(f, "paid"),
            Self::Approved => write!(f, "approved"),
        }
    }
}

impl std::str::FromStr for BookingPaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "approved" => Ok(Self::Approved),
            _ => Err(format!("invalid booking payment status: {s}")),
        }
    }
}

/// Payment status of a shop order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderPaymentStatus {
    #[default]
    Pending,
    Paid,
    Approved,
    Completed,
}

impl OrderPaymentStatus {
    /// Status a new order starts in.
    #[must_use]
    pub const fn initial(method: PaymentMethod) -> Self {
        if method.requires_verification() {
            Self::Pending
        } else {
            Self::Paid
        }
    }

    /// Whether the order counts towards revenue.
    #[must_use]
    pub const fn counts_as_revenue(&self) -> bool {
        matches!(self, Self::Paid | Self::Completed)
    }
}

impl std::fmt::Display for OrderPaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Paid => write!(f, "paid"),
            Self::Approved => write!(f, "approved"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for OrderPaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "approved" => Ok(Self::Approved),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid order payment status: {s}")),
        }
    }
}

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Role for a self-service signup: addresses containing `admin` get
    /// [`Role::Admin`].
    #[must_use]
    pub fn from_signup_email(email: &Email) -> Self {
        if email.as_str().contains("admin") {
            Self::Admin
        } else {
            Self::User
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_statuses() {
        assert_eq!(
            OrderPaymentStatus::initial(PaymentMethod::BankTransfer),
            OrderPaymentStatus::Pending
        );
        assert_eq!(
            OrderPaymentStatus::initial(PaymentMethod::Card),
            OrderPaymentStatus::Paid
        );
        assert_eq!(
            BookingPaymentStatus::initial(PaymentMethod::DebitCard),
            BookingPaymentStatus::Paid
        );
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"bank-transfer\""
        );
        assert_eq!(
            serde_json::to_string(&OrderPaymentStatus::Completed).unwrap(),
            "\"completed\""
        );
        let status: BookingPaymentStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(status, BookingPaymentStatus::Approved);
    }

    #[test]
    fn test_display_from_str_agree() {
        for method in [
            PaymentMethod::BankTransfer,
            PaymentMethod::Card,
            PaymentMethod::Paypal,
            PaymentMethod::DebitCard,
        ] {
            assert_eq!(method.to_string().parse::<PaymentMethod>().unwrap(), method);
        }
        assert!("shipped".parse::<OrderPaymentStatus>().is_err());
        assert!("completed".parse::<BookingPaymentStatus>().is_err());
    }

    #[test]
    fn test_revenue_statuses() {
        assert!(OrderPaymentStatus::Paid.counts_as_revenue());
        assert!(OrderPaymentStatus::Completed.counts_as_revenue());
        assert!(!OrderPaymentStatus::Approved.counts_as_revenue());
        assert!(!OrderPaymentStatus::Pending.counts_as_revenue());
    }

    #[test]
    fn test_signup_role() {
        let admin = Email::parse("admin@shop.com").unwrap();
        let shop_admin = Email::parse("shopadmin2@x.com").unwrap();
        let user = Email::parse("a@x.com").unwrap();
        assert_eq!(Role::from_signup_email(&admin), Role::Admin);
        assert_eq!(Role::from_signup_email(&shop_admin), Role::Admin);
        assert_eq!(Role::from_signup_email(&user), Role::User);
    }
}
