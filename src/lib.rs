pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod storage;

/// Re-export important types for easier access
pub use crate::api::Storefront;
pub use crate::config::StoreConfig;
pub use crate::core::cart::{CartEvent, CartStore, SubscriptionId};
pub use crate::models::{CartEntry, OrderConfirmation, OrderItem, Product, ShippingDetails, User};

pub use crate::core::error::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
