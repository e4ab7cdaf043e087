//! Contact roster model.
//!
//! # Responsibility
//! - Define the contact record, its relationship types and default cadences.
//! - Provide id-keyed insert/update/remove operations over a roster.
//!
//! # Invariants
//! - `name` is non-empty after trimming.
//! - `reconnect_days > 0`.
//! - `reconnect_days` is resolved from the relationship once, at creation;
//!   later relationship edits never rewrite it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable contact identifier.
///
/// Values increase with creation order and double as a creation-order
/// tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Relationship category for a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipType {
    Family,
    CloseFriend,
    Friend,
    Acquaintance,
    Colleague,
}

impl RelationshipType {
    /// All relationship types in display order.
    pub const ALL: [RelationshipType; 5] = [
        RelationshipType::Family,
        RelationshipType::CloseFriend,
        RelationshipType::Friend,
        RelationshipType::Acquaintance,
        RelationshipType::Colleague,
    ];

    /// Stable tag used in persisted data.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::CloseFriend => "close-friend",
            Self::Friend => "friend",
            Self::Acquaintance => "acquaintance",
            Self::Colleague => "colleague",
        }
    }

    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Family => "Family",
            Self::CloseFriend => "Close Friend",
            Self::Friend => "Friend",
            Self::Acquaintance => "Acquaintance",
            Self::Colleague => "Colleague",
        }
    }

    /// Default reconnection threshold in days.
    pub fn default_reconnect_days(self) -> u32 {
        match self {
            Self::Family | Self::CloseFriend => 7,
            Self::Friend => 14,
            Self::Acquaintance => 30,
            Self::Colleague => 21,
        }
    }

    /// Whether this contact is eligible for low-mood suggestions.
    pub fn is_inner_circle(self) -> bool {
        matches!(self, Self::Family | Self::CloseFriend)
    }

    /// Parses a persisted relationship tag.
    pub fn parse(value: &str) -> Result<Self, ContactValidationError> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ContactValidationError::UnknownRelationship(normalized.to_string()))
    }
}

/// Contact validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// Name is empty after trimming.
    EmptyName,
    /// Reconnect threshold must be at least one day.
    NonPositiveReconnectDays(i64),
    /// Relationship tag is not one of the supported values.
    UnknownRelationship(String),
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact name must not be empty"),
            Self::NonPositiveReconnectDays(days) => {
                write!(f, "reconnect days must be > 0, got {days}")
            }
            Self::UnknownRelationship(value) => {
                write!(f, "unknown relationship type: `{value}`")
            }
        }
    }
}

impl Error for ContactValidationError {}

/// Caller input for creating a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub relationship: RelationshipType,
    /// Explicit threshold override; `None` uses the relationship default.
    pub reconnect_days: Option<i64>,
    pub notes: String,
}

impl ContactDraft {
    /// Creates a draft with the relationship's default cadence and no notes.
    pub fn new(name: impl Into<String>, relationship: RelationshipType) -> Self {
        Self {
            name: name.into(),
            relationship,
            reconnect_days: None,
            notes: String::new(),
        }
    }

    pub fn with_reconnect_days(mut self, days: i64) -> Self {
        self.reconnect_days = Some(days);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Partial edit applied to an existing contact. `None` fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub relationship: Option<RelationshipType>,
    pub reconnect_days: Option<i64>,
    pub notes: Option<String>,
}

/// One person in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactWire", into = "ContactWire")]
pub struct Contact {
    pub id: ContactId,
    /// Trimmed display name.
    pub name: String,
    pub relationship: RelationshipType,
    pub reconnect_days: u32,
    /// `None` means the contact has never been reached.
    pub last_contact_at: Option<DateTime<Utc>>,
    /// Free-form text, not consumed by any recommendation rule.
    pub notes: String,
}

impl Contact {
    /// Builds a never-contacted contact from a draft.
    ///
    /// # Errors
    /// - `EmptyName` when the trimmed name is empty.
    /// - `NonPositiveReconnectDays` when an explicit override is `<= 0`.
    pub fn from_draft(id: ContactId, draft: ContactDraft) -> Result<Self, ContactValidationError> {
        let name = normalize_name(&draft.name)?;
        let reconnect_days = match draft.reconnect_days {
            Some(days) => normalize_reconnect_days(days)?,
            None => draft.relationship.default_reconnect_days(),
        };

        Ok(Self {
            id,
            name,
            relationship: draft.relationship,
            reconnect_days,
            last_contact_at: None,
            notes: draft.notes,
        })
    }

    /// Returns an edited copy with the same validation as creation.
    pub fn apply_patch(&self, patch: ContactPatch) -> Result<Self, ContactValidationError> {
        let mut updated = self.clone();
        if let Some(name) = patch.name {
            updated.name = normalize_name(&name)?;
        }
        if let Some(relationship) = patch.relationship {
            updated.relationship = relationship;
        }
        if let Some(days) = patch.reconnect_days {
            updated.reconnect_days = normalize_reconnect_days(days)?;
        }
        if let Some(notes) = patch.notes {
            updated.notes = notes;
        }
        Ok(updated)
    }

    /// Re-checks invariants on an already-built contact.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        if self.reconnect_days == 0 {
            return Err(ContactValidationError::NonPositiveReconnectDays(0));
        }
        Ok(())
    }
}

/// Inserts `contact`, replacing an existing contact with the same id in place.
pub fn insert_contact(mut contacts: Vec<Contact>, contact: Contact) -> Vec<Contact> {
    match contacts.iter().position(|existing| existing.id == contact.id) {
        Some(index) => contacts[index] = contact,
        None => contacts.push(contact),
    }
    contacts
}

/// Replaces the contact sharing `contact.id`; unknown ids leave the roster as is.
pub fn update_contact(contacts: Vec<Contact>, contact: Contact) -> Vec<Contact> {
    contacts
        .into_iter()
        .map(|existing| {
            if existing.id == contact.id {
                contact.clone()
            } else {
                existing
            }
        })
        .collect()
}

/// Removes the contact with `id`, if present.
pub fn remove_contact(mut contacts: Vec<Contact>, id: ContactId) -> Vec<Contact> {
    contacts.retain(|contact| contact.id != id);
    contacts
}

fn normalize_name(name: &str) -> Result<String, ContactValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ContactValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn normalize_reconnect_days(days: i64) -> Result<u32, ContactValidationError> {
    if days <= 0 {
        return Err(ContactValidationError::NonPositiveReconnectDays(days));
    }
    u32::try_from(days).map_err(|_| ContactValidationError::NonPositiveReconnectDays(days))
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactWire {
    id: ContactId,
    name: String,
    relationship: String,
    reconnect_days: i64,
    last_contact: Option<DateTime<Utc>>,
    #[serde(default)]
    notes: String,
}

impl TryFrom<ContactWire> for Contact {
    type Error = ContactValidationError;

    fn try_from(wire: ContactWire) -> Result<Self, Self::Error> {
        let contact = Contact {
            id: wire.id,
            name: normalize_name(&wire.name)?,
            relationship: RelationshipType::parse(&wire.relationship)?,
            reconnect_days: normalize_reconnect_days(wire.reconnect_days)?,
            last_contact_at: wire.last_contact,
            notes: wire.notes,
        };
        contact.validate()?;
        Ok(contact)
    }
}

impl From<Contact> for ContactWire {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            relationship: contact.relationship.as_str().to_string(),
            reconnect_days: i64::from(contact.reconnect_days),
            last_contact: contact.last_contact_at,
            notes: contact.notes,
        }
    }
}
