//! Storefront state and rules

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod summary;
pub mod types;
