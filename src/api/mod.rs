//! Session-level API

pub mod storefront;

pub use storefront::Storefront;
