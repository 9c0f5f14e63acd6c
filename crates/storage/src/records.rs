//! Serialized shapes for the persisted lists.
//!
//! Both slots hold a JSON array. Decoding validates every record back into a
//! domain type; a single bad record rejects the whole list.

use quiz_core::model::{Question, QuestionError, RankingEntry};
use serde::{Deserialize, Serialize};

use crate::repository::{Slot, SlotStore, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Persisted shape of a missed question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            text: question.text().to_owned(),
            options: question.options().to_vec(),
            correct_index: question.correct_index(),
        }
    }

    /// Convert the record back into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the record does not describe a valid question.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        Question::new(self.text, self.options, self.correct_index)
    }
}

/// Persisted shape of a ranking entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingRecord {
    pub score: u32,
    pub timestamp: String,
}

impl RankingRecord {
    #[must_use]
    pub fn from_entry(entry: &RankingEntry) -> Self {
        Self {
            score: entry.score(),
            timestamp: entry.timestamp().to_owned(),
        }
    }

    #[must_use]
    pub fn into_entry(self) -> RankingEntry {
        RankingEntry::from_persisted(self.score, self.timestamp)
    }
}

/// Encode questions as a JSON array.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_questions(questions: &[Question]) -> Result<String, StorageError> {
    let records: Vec<QuestionRecord> = questions.iter().map(QuestionRecord::from_question).collect();
    serde_json::to_string(&records).map_err(ser)
}

/// Decode and validate a JSON array of questions.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON or invalid records.
pub fn decode_questions(payload: &str) -> Result<Vec<Question>, StorageError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(payload).map_err(ser)?;
    records
        .into_iter()
        .map(|r| r.into_question().map_err(ser))
        .collect()
}

/// Encode ranking entries as a JSON array.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_rankings(entries: &[RankingEntry]) -> Result<String, StorageError> {
    let records: Vec<RankingRecord> = entries.iter().map(RankingRecord::from_entry).collect();
    serde_json::to_string(&records).map_err(ser)
}

/// Decode a JSON array of ranking entries.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON or negative scores.
pub fn decode_rankings(payload: &str) -> Result<Vec<RankingEntry>, StorageError> {
    let records: Vec<RankingRecord> = serde_json::from_str(payload).map_err(ser)?;
    Ok(records.into_iter().map(RankingRecord::into_entry).collect())
}

/// Load the wrong-answer list. `Ok(None)` means the slot was never written.
///
/// # Errors
///
/// Returns `StorageError` if the backend fails or the payload is corrupt.
pub async fn load_wrong_answers(
    store: &dyn SlotStore,
) -> Result<Option<Vec<Question>>, StorageError> {
    store
        .load(Slot::WrongAnswers)
        .await?
        .map(|payload| decode_questions(&payload))
        .transpose()
}

/// Persist the full wrong-answer list.
///
/// # Errors
///
/// Returns `StorageError` if encoding or the write fails.
pub async fn save_wrong_answers(
    store: &dyn SlotStore,
    questions: &[Question],
) -> Result<(), StorageError> {
    let payload = encode_questions(questions)?;
    store.save(Slot::WrongAnswers, &payload).await
}

/// Load the ranking list. `Ok(None)` means the slot was never written.
///
/// # Errors
///
/// Returns `StorageError` if the backend fails or the payload is corrupt.
pub async fn load_rankings(
    store: &dyn SlotStore,
) -> Result<Option<Vec<RankingEntry>>, StorageError> {
    store
        .load(Slot::Rankings)
        .await?
        .map(|payload| decode_rankings(&payload))
        .transpose()
}

/// Persist the full ranking list.
///
/// # Errors
///
/// Returns `StorageError` if encoding or the write fails.
pub async fn save_rankings(
    store: &dyn SlotStore,
    entries: &[RankingEntry],
) -> Result<(), StorageError> {
    let payload = encode_rankings(entries)?;
    store.save(Slot::Rankings, &payload).await
}
