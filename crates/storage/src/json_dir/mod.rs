//! File-backed key-value store: one `<key>.json` document per storage key.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::ScoreEntry;

use crate::repository::{
    ScoreRepository, Storage, StorageError, StorageKey, decode_entries, encode_entries,
};

#[derive(Clone, Debug)]
pub struct JsonDirRepository {
    dir: PathBuf,
}

impl JsonDirRepository {
    /// Open (and create if needed) a data directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }

    async fn write_atomically(&self, key: StorageKey, contents: String) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, contents).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[async_trait]
impl ScoreRepository for JsonDirRepository {
    async fn load_entries(&self, key: StorageKey) -> Vec<ScoreEntry> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => decode_entries(key, &raw),
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                log::warn!("could not read {}: {err}", path.display());
                Vec::new()
            }
        }
    }

    async fn append_entry(&self, key: StorageKey, entry: &ScoreEntry) -> Result<(), StorageError> {
        let mut entries = self.load_entries(key).await;
        entries.push(entry.clone());
        let raw = encode_entries(&entries)?;
        self.write_atomically(key, raw).await
    }

    async fn clear(&self, key: StorageKey) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl Storage {
    /// Build a `Storage` backed by JSON files in `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub async fn json_dir(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let repo = JsonDirRepository::open(dir).await?;
        let scores: Arc<dyn ScoreRepository> = Arc::new(repo);
        Ok(Self { scores })
    }
}
