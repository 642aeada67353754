//! Common data types and enums

use serde::{Deserialize, Serialize};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular shopper
    User,
    /// Shop administrator
    Admin,
}

impl UserRole {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    /// Converts a string to a UserRole enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "user" => Some(UserRole::User),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// Ordering applied to catalog query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order
    #[default]
    Default,
    /// Cheapest first
    PriceLowToHigh,
    /// Most expensive first
    PriceHighToLow,
    /// Alphabetical by name
    NameAToZ,
    /// Reverse alphabetical by name
    NameZToA,
}

impl SortOrder {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::PriceLowToHigh => "price-low-to-high",
            SortOrder::PriceHighToLow => "price-high-to-low",
            SortOrder::NameAToZ => "name-a-to-z",
            SortOrder::NameZToA => "name-z-to-a",
        }
    }

    /// Converts a string to a SortOrder enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "default" => Some(SortOrder::Default),
            "price-low-to-high" => Some(SortOrder::PriceLowToHigh),
            "price-high-to-low" => Some(SortOrder::PriceHighToLow),
            "name-a-to-z" => Some(SortOrder::NameAToZ),
            "name-z-to-a" => Some(SortOrder::NameZToA),
            _ => None,
        }
    }
}

/// Checkout wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Sign in or continue as guest
    Account,
    /// Shipping address form
    Shipping,
    /// Payment method selection and order placement
    Payment,
    /// Order has been placed
    Complete,
}

impl CheckoutStep {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Account => "account",
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Complete => "complete",
        }
    }

    /// Converts a string to a CheckoutStep enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "account" => Some(CheckoutStep::Account),
            "shipping" => Some(CheckoutStep::Shipping),
            "payment" => Some(CheckoutStep::Payment),
            "complete" => Some(CheckoutStep::Complete),
            _ => None,
        }
    }

    /// Checks if moving from `self` to `to` is allowed
    pub fn is_valid_transition(&self, to: &CheckoutStep) -> bool {
        match (self, to) {
            (CheckoutStep::Account, CheckoutStep::Shipping) => true,
            (CheckoutStep::Shipping, CheckoutStep::Payment) => true,
            (CheckoutStep::Payment, CheckoutStep::Shipping) => true,
            (CheckoutStep::Payment, CheckoutStep::Complete) => true,
            _ => false,
        }
    }
}

/// Payment method chosen at checkout. Nothing is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Card details entered in the form
    #[default]
    CreditCard,
    /// PayPal redirect
    #[serde(rename = "paypal")]
    PayPal,
    /// Cash on delivery
    PayOnDelivery,
}

impl PaymentMethod {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit-card",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::PayOnDelivery => "pay-on-delivery",
        }
    }

    /// Converts a string to a PaymentMethod enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "credit-card" => Some(PaymentMethod::CreditCard),
            "paypal" => Some(PaymentMethod::PayPal),
            "pay-on-delivery" => Some(PaymentMethod::PayOnDelivery),
            _ => None,
        }
    }
}

/// Shipping speed chosen at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// Flat fee, free above the threshold
    #[default]
    Standard,
    /// Flat fee, never free
    Express,
}

impl ShippingMethod {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
        }
    }

    /// Converts a string to a ShippingMethod enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(ShippingMethod::Standard),
            "express" => Some(ShippingMethod::Express),
            _ => None,
        }
    }
}
