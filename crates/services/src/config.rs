use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, QuizServicesError};

/// Delay between answering a question and moving on.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// Database used when `QUIZ_DB_URL` is not set, relative to the working directory.
pub const DEFAULT_DB_URL: &str = "sqlite:quiz.sqlite3";

pub const DB_URL_ENV: &str = "QUIZ_DB_URL";
pub const ADVANCE_DELAY_ENV: &str = "QUIZ_ADVANCE_DELAY_MS";

/// Runtime settings for the quiz services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub db_url: String,
    pub advance_delay: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            db_url: normalize_sqlite_url(DEFAULT_DB_URL),
            advance_delay: DEFAULT_ADVANCE_DELAY,
        }
    }
}

impl QuizConfig {
    /// Read settings from `QUIZ_DB_URL` and `QUIZ_ADVANCE_DELAY_MS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with a custom variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(DB_URL_ENV) {
            if raw.trim().is_empty() {
                return Err(ConfigError::InvalidDbUrl { raw });
            }
            config.db_url = normalize_sqlite_url(&raw);
        }

        if let Some(raw) = lookup(ADVANCE_DELAY_ENV) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAdvanceDelay { raw: raw.clone() })?;
            config.advance_delay = Duration::from_millis(millis);
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_db_url(mut self, db_url: &str) -> Self {
        self.db_url = normalize_sqlite_url(db_url);
        self
    }

    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }
}

/// Turn `sqlite:relative.db` or a bare path into an absolute `sqlite://` URL.
///
/// In-memory and already-absolute `sqlite://` URLs pass through unchanged.
#[must_use]
pub fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:"
        || trimmed.starts_with("sqlite://")
        || trimmed.starts_with("sqlite:file:")
    {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Make sure the database file and its parent directories exist.
pub(crate) fn prepare_sqlite_file(db_url: &str) -> Result<(), QuizServicesError> {
    let Some(path) = db_url.strip_prefix("sqlite://") else {
        // in-memory and `sqlite:file:` URLs need no file on disk
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ConfigError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}
