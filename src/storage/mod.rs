//! Key-value persistence for the cart, surviving restarts.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;

use crate::domain::CartEntry;
use crate::error::StorageError;

/// Key the cart is stored under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

#[async_trait]
pub trait PersistentStorage: Send + Sync {
    /// Entries stored under `key`, `None` when nothing was saved yet.
    async fn load(&self, key: &str) -> Result<Option<Vec<CartEntry>>, StorageError>;

    async fn save(&self, key: &str, entries: &[CartEntry]) -> Result<(), StorageError>;
}

pub(crate) fn encode(entries: &[CartEntry]) -> Result<String, StorageError> {
    serde_json::to_string(entries).map_err(|e| StorageError::Encode(e.to_string()))
}

pub(crate) fn decode(text: &str) -> Result<Vec<CartEntry>, StorageError> {
    serde_json::from_str(text).map_err(|e| StorageError::Corrupt(e.to_string()))
}
