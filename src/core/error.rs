//! Custom error types for the storefront

use thiserror::Error;

/// Main error type for the storefront
#[derive(Error, Debug)]
pub enum Error {
    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Durable storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid data or parameter
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Operation not permitted in current state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Sign-in or registration was refused
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Requested entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
