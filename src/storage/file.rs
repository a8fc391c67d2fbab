use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, instrument};

use super::{decode, encode, PersistentStorage};
use crate::domain::CartEntry;
use crate::error::StorageError;

/// Stores each key as a JSON file inside one directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous cart intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Characters outside `[A-Za-z0-9_-]` become `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

#[async_trait]
impl PersistentStorage for FileStorage {
    #[instrument(skip(self))]
    async fn load(&self, key: &str) -> Result<Option<Vec<CartEntry>>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(text) => decode(&text).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No stored cart");
                Ok(None)
            }
            Err(e) => Err(StorageError::Io(format!("{}: {}", path.display(), e))),
        }
    }

    #[instrument(skip(self, entries), fields(entries = entries.len()))]
    async fn save(&self, key: &str, entries: &[CartEntry]) -> Result<(), StorageError> {
        let text = encode(entries)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::Io(format!("{}: {}", self.dir.display(), e)))?;
        fs::write(&tmp, text)
            .await
            .map_err(|e| StorageError::Io(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| StorageError::Io(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "Cart saved");
        Ok(())
    }
}
