use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{decode, encode, PersistentStorage};
use crate::domain::CartEntry;
use crate::error::StorageError;

/// In-process storage holding the encoded text per key.
///
/// Values go through the same JSON encoding as [`FileStorage`](super::FileStorage),
/// so a cart saved here round-trips exactly like a persisted one.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw encoded value under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    /// Stores an already encoded value, bypassing validation.
    pub fn insert_raw(&self, key: impl Into<String>, text: impl Into<String>) {
        self.lock().insert(key.into(), text.into());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still consistent: every write is a single insert.
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl PersistentStorage for MemoryStorage {
    async fn load(&self, key: &str) -> Result<Option<Vec<CartEntry>>, StorageError> {
        self.raw(key).map(|text| decode(&text)).transpose()
    }

    async fn save(&self, key: &str, entries: &[CartEntry]) -> Result<(), StorageError> {
        let text = encode(entries)?;
        self.insert_raw(key, text);
        Ok(())
    }
}
