use chrono::{TimeZone, Utc};
use moodconnect_core::db::{open_db, open_db_in_memory};
use moodconnect_core::{
    ContactDraft, KeyValueStore, MoodSession, RelationshipType, SqliteKeyValueStore,
    MOODS_STORAGE_KEY,
};

#[test]
fn missing_key_loads_as_absent() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    assert_eq!(store.load("nothing-here"), None);
}

#[test]
fn save_overwrites_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    store.save("k", "first").unwrap();
    store.save("k", "second").unwrap();

    assert_eq!(store.load("k").as_deref(), Some("second"));
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn load_failure_is_reported_as_absent() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    store.save("k", "value").unwrap();
    conn.execute_batch("DROP TABLE kv_entries;").unwrap();

    assert_eq!(store.load("k"), None);
    assert!(store.save("k", "again").is_err());
}

#[test]
fn session_state_survives_reopening_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moodconnect.sqlite3");
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();

    let expected = {
        let conn = open_db(&path).unwrap();
        let mut session = MoodSession::open(SqliteKeyValueStore::new(&conn));
        session.log_mood(2, now).unwrap();
        let id = session
            .add_contact(ContactDraft::new("Ana", RelationshipType::Family), now)
            .unwrap();
        session.mark_contacted(id, now);
        session.state().clone()
    };

    let conn = open_db(&path).unwrap();
    let session = MoodSession::open(SqliteKeyValueStore::new(&conn));
    assert_eq!(session.state(), &expected);
    assert_eq!(session.suggested_contacts(&now).len(), 1);

    let raw = SqliteKeyValueStore::new(&conn)
        .load(MOODS_STORAGE_KEY)
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["date"], "2026-03-10");
}
