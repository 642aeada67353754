//! Durable client-side key/value storage

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::Result;

/// String key/value store the cart and account state are persisted into.
///
/// Implementations use interior mutability so one handle can be shared
/// between the cart store and the auth provider.
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
