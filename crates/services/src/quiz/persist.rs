//! Fail-soft loading and best-effort saving of the notebook and ledger.

use quiz_core::model::{RankingLedger, WrongAnswerNotebook};
use storage::records;
use storage::repository::{Slot, SlotStore, StorageError};

/// Load the notebook, falling back to empty on any failure.
///
/// A corrupt payload is overwritten with an empty list so the next start is clean.
pub(crate) async fn load_notebook(store: &dyn SlotStore) -> WrongAnswerNotebook {
    match records::load_wrong_answers(store).await {
        Ok(Some(questions)) => WrongAnswerNotebook::from_entries(questions),
        Ok(None) => WrongAnswerNotebook::new(),
        Err(err @ StorageError::Serialization(_)) => {
            tracing::warn!(slot = %Slot::WrongAnswers, error = %err, "discarding corrupt payload");
            let empty = WrongAnswerNotebook::new();
            save_notebook(store, &empty).await;
            empty
        }
        Err(err) => {
            tracing::warn!(slot = %Slot::WrongAnswers, error = %err, "could not load slot");
            WrongAnswerNotebook::new()
        }
    }
}

/// Load the ledger, falling back to empty on any failure.
///
/// A corrupt payload is overwritten with an empty list so the next start is clean.
pub(crate) async fn load_ledger(store: &dyn SlotStore) -> RankingLedger {
    match records::load_rankings(store).await {
        Ok(Some(entries)) => RankingLedger::from_entries(entries),
        Ok(None) => RankingLedger::new(),
        Err(err @ StorageError::Serialization(_)) => {
            tracing::warn!(slot = %Slot::Rankings, error = %err, "discarding corrupt payload");
            let empty = RankingLedger::new();
            save_ledger(store, &empty).await;
            empty
        }
        Err(err) => {
            tracing::warn!(slot = %Slot::Rankings, error = %err, "could not load slot");
            RankingLedger::new()
        }
    }
}

pub(crate) async fn save_notebook(store: &dyn SlotStore, notebook: &WrongAnswerNotebook) {
    if let Err(err) = records::save_wrong_answers(store, notebook.entries()).await {
        tracing::warn!(slot = %Slot::WrongAnswers, error = %err, "could not save slot");
    }
}

pub(crate) async fn save_ledger(store: &dyn SlotStore, ledger: &RankingLedger) {
    if let Err(err) = records::save_rankings(store, ledger.entries()).await {
        tracing::warn!(slot = %Slot::Rankings, error = %err, "could not save slot");
    }
}
