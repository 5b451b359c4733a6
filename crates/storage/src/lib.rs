#![forbid(unsafe_code)]

pub mod json_dir;
pub mod repository;

pub use repository::{InMemoryRepository, ScoreRepository, Storage, StorageError, StorageKey};
