use async_trait::async_trait;
use quiz_core::model::ScoreEntry;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
///
/// Only writes report errors. Reads degrade to an empty list instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Fixed namespaces for persisted lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Clearable leaderboard entries.
    Scoreboard,
    /// Append-only log of every completed quiz. Unaffected by scoreboard clears.
    AttendeeLog,
}

impl StorageKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Scoreboard => "quizGK_scoreboard_v1",
            StorageKey::AttendeeLog => "quizGK_attendees_v1",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repository contract for persisted score lists.
///
/// Callers are assumed to be a single writer; `append_entry` is a plain
/// read-modify-write.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Load the list under `key` in insertion order.
    ///
    /// Missing or undecodable data yields an empty list.
    async fn load_entries(&self, key: StorageKey) -> Vec<ScoreEntry>;

    /// Append one entry and write the whole list back.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated list cannot be written.
    async fn append_entry(&self, key: StorageKey, entry: &ScoreEntry) -> Result<(), StorageError>;

    /// Remove every entry under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the stored list cannot be removed.
    async fn clear(&self, key: StorageKey) -> Result<(), StorageError>;
}

/// Decode a stored JSON list, falling back to empty on any failure.
pub(crate) fn decode_entries(key: StorageKey, raw: &str) -> Vec<ScoreEntry> {
    match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("discarding undecodable entries under {key}: {err}");
            Vec::new()
        }
    }
}

pub(crate) fn encode_entries(entries: &[ScoreEntry]) -> Result<String, StorageError> {
    serde_json::to_string(entries).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// In-memory key-value store holding raw JSON per key, for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    values: Arc<Mutex<HashMap<StorageKey, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the raw stored value for `key`, bypassing encoding.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store lock is poisoned.
    pub fn put_raw(&self, key: StorageKey, raw: impl Into<String>) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key, raw.into());
        Ok(())
    }

    /// The raw stored value for `key`, if any.
    #[must_use]
    pub fn raw(&self, key: StorageKey) -> Option<String> {
        self.values.lock().ok()?.get(&key).cloned()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryRepository {
    async fn load_entries(&self, key: StorageKey) -> Vec<ScoreEntry> {
        match self.raw(key) {
            Some(raw) => decode_entries(key, &raw),
            None => Vec::new(),
        }
    }

    async fn append_entry(&self, key: StorageKey, entry: &ScoreEntry) -> Result<(), StorageError> {
        let mut entries = self.load_entries(key).await;
        entries.push(entry.clone());
        let raw = encode_entries(&entries)?;
        self.put_raw(key, raw)
    }

    async fn clear(&self, key: StorageKey) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(&key);
        Ok(())
    }
}

/// Score persistence behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub scores: Arc<dyn ScoreRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let scores: Arc<dyn ScoreRepository> = Arc::new(InMemoryRepository::new());
        Self { scores }
    }
}
