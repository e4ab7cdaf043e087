//! Session controller for mood logging and roster edits.
//!
//! # Responsibility
//! - Own the in-memory `SessionState` for one session.
//! - Apply validated mutations, then persist both collections best-effort.
//! - Expose recommendation queries over the current state.
//!
//! # Invariants
//! - In-memory state is authoritative; storage failures never roll it back.
//! - Unreadable persisted data loads as an empty collection.
//! - Unknown contact ids are tolerated as no-ops.
//! - Contact ids are strictly increasing within a session.

use crate::engine::stats::{mood_history, mood_statistics, today_mood, MoodStats};
use crate::engine::suggestions::{reconnect_suggestions, suggested_contacts, ReconnectCandidate};
use crate::model::contact::{
    insert_contact, remove_contact, update_contact, Contact, ContactDraft, ContactId,
    ContactPatch, ContactValidationError,
};
use crate::model::mood::{apply_mood, MoodEntry, MoodValidationError};
use crate::repo::kv_store::KeyValueStore;
use chrono::{DateTime, TimeZone, Utc};
use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized mood collection.
pub const MOODS_STORAGE_KEY: &str = "moodconnect_moods";
/// Storage key holding the serialized contact roster.
pub const CONTACTS_STORAGE_KEY: &str = "moodconnect_contacts";

/// Validation failure surfaced by session operations. The operation had no
/// effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Mood(MoodValidationError),
    Contact(ContactValidationError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mood(err) => write!(f, "{err}"),
            Self::Contact(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mood(err) => Some(err),
            Self::Contact(err) => Some(err),
        }
    }
}

impl From<MoodValidationError> for SessionError {
    fn from(value: MoodValidationError) -> Self {
        Self::Mood(value)
    }
}

impl From<ContactValidationError> for SessionError {
    fn from(value: ContactValidationError) -> Self {
        Self::Contact(value)
    }
}

/// Collections owned by one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Mood entries in append order.
    pub moods: Vec<MoodEntry>,
    /// Contacts in roster (creation) order.
    pub contacts: Vec<Contact>,
}

/// Session controller over a key-value store.
pub struct MoodSession<S: KeyValueStore> {
    store: S,
    state: SessionState,
    last_contact_id: i64,
}

impl<S: KeyValueStore> MoodSession<S> {
    /// Loads both collections from `store`.
    ///
    /// Missing or malformed data yields empty collections. Duplicate dates or
    /// ids in persisted data collapse with last-write-wins.
    pub fn open(store: S) -> Self {
        let moods = load_collection::<MoodEntry>(&store, MOODS_STORAGE_KEY)
            .into_iter()
            .fold(Vec::new(), apply_mood);
        let contacts = load_collection::<Contact>(&store, CONTACTS_STORAGE_KEY)
            .into_iter()
            .fold(Vec::new(), insert_contact);

        info!(
            "event=session_open module=service status=ok moods={} contacts={}",
            moods.len(),
            contacts.len()
        );

        Self::with_state(store, SessionState { moods, contacts })
    }

    /// Starts a session from an explicit state without reading storage.
    pub fn with_state(store: S, state: SessionState) -> Self {
        let last_contact_id = state
            .contacts
            .iter()
            .map(|contact| contact.id.0)
            .max()
            .unwrap_or(0);
        Self {
            store,
            state,
            last_contact_id,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn moods(&self) -> &[MoodEntry] {
        &self.state.moods
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.state.contacts
    }

    pub fn contact(&self, id: ContactId) -> Option<&Contact> {
        self.state.contacts.iter().find(|contact| contact.id == id)
    }

    /// Logs today's mood, replacing an earlier entry for the same day.
    ///
    /// The date key is the calendar day of `now` in its own time zone.
    ///
    /// # Errors
    /// - `SessionError::Mood` when `value` is outside `1..=5`.
    pub fn log_mood<Tz: TimeZone>(
        &mut self,
        value: i64,
        now: DateTime<Tz>,
    ) -> Result<MoodEntry, SessionError> {
        let entry = MoodEntry::new(now.date_naive(), value, now.with_timezone(&Utc))
            .inspect_err(|err| {
                warn!("event=mood_log module=service status=rejected error={err}");
            })?;

        self.state.moods = apply_mood(std::mem::take(&mut self.state.moods), entry.clone());
        info!(
            "event=mood_log module=service status=ok date={} value={value}",
            entry.date_key()
        );
        self.persist();
        Ok(entry)
    }

    /// Adds a contact from `draft` and returns its fresh id.
    ///
    /// # Errors
    /// - `SessionError::Contact` when the name is blank or an explicit
    ///   reconnect threshold is `<= 0`. No contact is created.
    pub fn add_contact<Tz: TimeZone>(
        &mut self,
        draft: ContactDraft,
        now: DateTime<Tz>,
    ) -> Result<ContactId, SessionError> {
        let id = ContactId(now.timestamp_millis().max(self.last_contact_id + 1));
        let contact = Contact::from_draft(id, draft).inspect_err(|err| {
            warn!("event=contact_add module=service status=rejected error={err}");
        })?;

        self.last_contact_id = id.0;
        self.state.contacts = insert_contact(std::mem::take(&mut self.state.contacts), contact);
        info!("event=contact_add module=service status=ok contact_id={id}");
        self.persist();
        Ok(id)
    }

    /// Applies a direct edit to one contact.
    ///
    /// Returns `Ok(false)` when `id` is unknown.
    pub fn edit_contact(
        &mut self,
        id: ContactId,
        patch: ContactPatch,
    ) -> Result<bool, SessionError> {
        let Some(existing) = self.contact(id) else {
            debug!("event=contact_edit module=service status=skip contact_id={id} reason=not_found");
            return Ok(false);
        };
        let updated = existing.apply_patch(patch)?;

        self.state.contacts = update_contact(std::mem::take(&mut self.state.contacts), updated);
        info!("event=contact_edit module=service status=ok contact_id={id}");
        self.persist();
        Ok(true)
    }

    /// Records that the contact was reached at `now`.
    ///
    /// Unknown ids are a no-op and return `false`.
    pub fn mark_contacted<Tz: TimeZone>(&mut self, id: ContactId, now: DateTime<Tz>) -> bool {
        let Some(existing) = self.contact(id) else {
            debug!(
                "event=contact_mark module=service status=skip contact_id={id} reason=not_found"
            );
            return false;
        };
        let mut updated = existing.clone();
        updated.last_contact_at = Some(now.with_timezone(&Utc));

        self.state.contacts = update_contact(std::mem::take(&mut self.state.contacts), updated);
        info!("event=contact_mark module=service status=ok contact_id={id}");
        self.persist();
        true
    }

    /// Hard-deletes a contact. Unknown ids are a no-op and return `false`.
    pub fn delete_contact(&mut self, id: ContactId) -> bool {
        if self.contact(id).is_none() {
            debug!(
                "event=contact_delete module=service status=skip contact_id={id} reason=not_found"
            );
            return false;
        }

        self.state.contacts = remove_contact(std::mem::take(&mut self.state.contacts), id);
        info!("event=contact_delete module=service status=ok contact_id={id}");
        self.persist();
        true
    }

    /// Entry logged for the calendar day of `now`, if any.
    pub fn today_mood<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<&MoodEntry> {
        today_mood(&self.state.moods, now.date_naive())
    }

    /// Up to three contacts to reach out to, given today's mood.
    pub fn suggested_contacts<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<&Contact> {
        suggested_contacts(self.today_mood(now), &self.state.contacts)
    }

    /// Up to five contacts due for reconnection, most overdue first.
    pub fn reconnect_suggestions<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> Vec<ReconnectCandidate<'_>> {
        reconnect_suggestions(&self.state.contacts, now.with_timezone(&Utc))
    }

    pub fn mood_statistics(&self) -> MoodStats {
        mood_statistics(&self.state.moods)
    }

    /// Mood entries newest-appended first.
    pub fn mood_history(&self) -> Vec<&MoodEntry> {
        mood_history(&self.state.moods)
    }

    fn persist(&self) {
        save_collection(&self.store, MOODS_STORAGE_KEY, &self.state.moods);
        save_collection(&self.store, CONTACTS_STORAGE_KEY, &self.state.contacts);
    }
}

fn load_collection<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Vec<T> {
    let Some(raw) = store.load(key) else {
        debug!("event=state_load module=service status=skip key={key} reason=absent");
        return Vec::new();
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => items,
        Err(err) => {
            warn!(
                "event=state_load module=service status=error key={key} error_code=state_parse_failed error={err}"
            );
            Vec::new()
        }
    }
}

fn save_collection<T: Serialize>(store: &impl KeyValueStore, key: &str, items: &[T]) {
    let serialized = match serde_json::to_string(items) {
        Ok(serialized) => serialized,
        Err(err) => {
            error!(
                "event=state_save module=service status=error key={key} error_code=state_encode_failed error={err}"
            );
            return;
        }
    };

    if let Err(err) = store.save(key, &serialized) {
        error!(
            "event=state_save module=service status=error key={key} error_code=state_write_failed error={err}"
        );
    }
}
