//! Core domain logic for MoodConnect.
//! This crate is the single source of truth for mood and reconnection rules.

pub mod config;
pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use engine::staleness::{staleness, Staleness};
pub use engine::stats::{mood_history, mood_statistics, today_mood, MoodStats};
pub use engine::suggestions::{reconnect_suggestions, suggested_contacts, ReconnectCandidate};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{
    insert_contact, remove_contact, update_contact, Contact, ContactDraft, ContactId,
    ContactPatch, ContactValidationError, RelationshipType,
};
pub use model::mood::{apply_mood, MoodEntry, MoodLevel, MoodTier, MoodValidationError};
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use service::session_service::{
    MoodSession, SessionError, SessionState, CONTACTS_STORAGE_KEY, MOODS_STORAGE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
