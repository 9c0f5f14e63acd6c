use quiz_core::QuestionSource;
use quiz_core::QuestionBank;
use quiz_core::model::RankingEntry;
use storage::records::{load_rankings, load_wrong_answers, save_rankings, save_wrong_answers};
use storage::repository::{Slot, SlotStore, Storage};
use storage::sqlite::SqliteStore;

#[tokio::test]
async fn sqlite_roundtrip_persists_both_slots() {
    let store = SqliteStore::connect("sqlite:file:memdb_slots_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    let missed = QuestionBank.questions("과학");
    save_wrong_answers(&store, &missed[..2]).await.unwrap();

    let entries = vec![
        RankingEntry::from_persisted(4, "05/02 08:30"),
        RankingEntry::from_persisted(1, "05/01 21:00"),
    ];
    save_rankings(&store, &entries).await.unwrap();

    let loaded = load_wrong_answers(&store).await.unwrap().expect("saved");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].text(), missed[0].text());
    assert_eq!(loaded[1].options(), missed[1].options());
    assert_eq!(loaded[1].correct_index(), missed[1].correct_index());

    let loaded = load_rankings(&store).await.unwrap().expect("saved");
    assert_eq!(loaded, entries);
}

#[tokio::test]
async fn sqlite_save_overwrites_whole_slot() {
    let store = SqliteStore::connect("sqlite:file:memdb_slots_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    save_rankings(&store, &[RankingEntry::from_persisted(3, "01/01 00:00")])
        .await
        .unwrap();
    save_rankings(&store, &[]).await.unwrap();

    assert_eq!(store.load(Slot::Rankings).await.unwrap().as_deref(), Some("[]"));
    assert!(load_rankings(&store).await.unwrap().unwrap().is_empty());
}

#[tokio::test]
async fn sqlite_missing_slot_is_none_and_migrate_is_idempotent() {
    let storage = Storage::sqlite("sqlite:file:memdb_slots_missing?mode=memory&cache=shared")
        .await
        .expect("storage");

    assert!(storage.slots.load(Slot::WrongAnswers).await.unwrap().is_none());

    let store = SqliteStore::connect("sqlite:file:memdb_slots_missing?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("second migrate");
}

#[tokio::test]
async fn sqlite_returns_corrupt_payload_as_serialization_error() {
    let store = SqliteStore::connect("sqlite:file:memdb_slots_corrupt?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    store.save(Slot::Rankings, "[{\"score\":").await.unwrap();

    let err = load_rankings(&store).await.unwrap_err();
    assert!(matches!(err, storage::StorageError::Serialization(_)));
}
