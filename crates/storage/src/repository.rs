use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Named persistence slots. Each holds one serialized list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    WrongAnswers,
    Rankings,
}

impl Slot {
    /// Storage key for the slot.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Slot::WrongAnswers => "wrongAnswers",
            Slot::Rankings => "rankings",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Key-value persistence port for the quiz's two lists.
///
/// Every `save` replaces the whole payload, so a reader sees either the old
/// snapshot or the new one.
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Read the raw payload stored in `slot`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn load(&self, slot: Slot) -> Result<Option<String>, StorageError>;

    /// Replace the payload stored in `slot`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the payload cannot be written.
    async fn save(&self, slot: Slot, payload: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    slots: Arc<Mutex<HashMap<Slot, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SlotStore for InMemoryStore {
    async fn load(&self, slot: Slot) -> Result<Option<String>, StorageError> {
        let guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&slot).cloned())
    }

    async fn save(&self, slot: Slot, payload: &str) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(slot, payload.to_owned());
        Ok(())
    }
}

/// Wraps the active slot store behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub slots: Arc<dyn SlotStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            slots: Arc::new(InMemoryStore::new()),
        }
    }
}
