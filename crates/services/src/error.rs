//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while reading `QuizConfig`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid database url: {raw}")]
    InvalidDbUrl { raw: String },
    #[error("invalid advance delay (expected milliseconds): {raw}")]
    InvalidAdvanceDelay { raw: String },
}

/// Errors emitted by a sound player. The quiz machine logs and drops them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SoundError {
    #[error("audio device unavailable: {0}")]
    Unavailable(String),
    #[error("playback failed: {0}")]
    Playback(String),
}

/// Errors emitted while bootstrapping quiz services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("could not prepare database file: {0}")]
    Io(#[from] std::io::Error),
}
