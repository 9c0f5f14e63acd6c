use std::sync::Arc;

use storage::repository::Storage;

use crate::config::{QuizConfig, prepare_sqlite_file};
use crate::error::QuizServicesError;
use crate::quiz::QuizMachine;
use crate::sound::{SilentPlayer, SoundPlayer};
use crate::Clock;

/// Assembles storage and the quiz machine for a host application.
#[derive(Clone)]
pub struct QuizServices {
    config: QuizConfig,
    storage: Storage,
    quiz: QuizMachine,
}

impl QuizServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `QuizServicesError` if the database file cannot be prepared or
    /// the connection or migrations fail.
    pub async fn new_sqlite(
        config: QuizConfig,
        clock: Clock,
        sounds: Arc<dyn SoundPlayer>,
    ) -> Result<Self, QuizServicesError> {
        prepare_sqlite_file(&config.db_url)?;
        let storage = Storage::sqlite(&config.db_url).await?;
        tracing::info!(db_url = %config.db_url, "quiz storage ready");
        Ok(Self::assemble(config, clock, storage, sounds).await)
    }

    /// Build `SQLite`-backed services configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns `QuizServicesError` for invalid configuration or storage setup failures.
    pub async fn from_env(
        clock: Clock,
        sounds: Arc<dyn SoundPlayer>,
    ) -> Result<Self, QuizServicesError> {
        let config = QuizConfig::from_env()?;
        Self::new_sqlite(config, clock, sounds).await
    }

    /// Build services on a fresh in-memory store with no audio.
    pub async fn in_memory(clock: Clock) -> Self {
        Self::assemble(
            QuizConfig::default(),
            clock,
            Storage::in_memory(),
            Arc::new(SilentPlayer),
        )
        .await
    }

    async fn assemble(
        config: QuizConfig,
        clock: Clock,
        storage: Storage,
        sounds: Arc<dyn SoundPlayer>,
    ) -> Self {
        let quiz = QuizMachine::builder(clock, Arc::clone(&storage.slots))
            .with_sounds(sounds)
            .with_advance_delay(config.advance_delay)
            .load()
            .await;

        Self {
            config,
            storage,
            quiz,
        }
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    #[must_use]
    pub fn quiz(&self) -> QuizMachine {
        self.quiz.clone()
    }
}
