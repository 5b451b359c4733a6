//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::NameError;
use quiz_core::{BankError, ConfigError};
use storage::repository::StorageError;

/// Errors emitted by `ScoreboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScoreboardError {
    #[error(transparent)]
    InvalidName(#[from] NameError),
    #[error("quiz is not finished yet")]
    NotCompleted,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
