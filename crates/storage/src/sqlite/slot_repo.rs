use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{Slot, SlotStore, StorageError};

use super::SqliteStore;

#[async_trait]
impl SlotStore for SqliteStore {
    async fn load(&self, slot: Slot) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT payload FROM slots WHERE name = ?1")
            .bind(slot.key())
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        row.try_get::<String, _>("payload")
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save(&self, slot: Slot, payload: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO slots (name, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            ",
        )
        .bind(slot.key())
        .bind(payload)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        tracing::debug!(slot = %slot, bytes = payload.len(), "slot saved");
        Ok(())
    }
}
