//! Mood-linked contact suggestions and reconnect candidates.
//!
//! # Invariants
//! - Suggestions keep roster order; there is no ranking inside a tier.
//! - Reconnect candidates are sorted most-overdue first with a stable sort,
//!   so ties keep roster order.

use crate::engine::staleness::{staleness, Staleness};
use crate::model::contact::Contact;
use crate::model::mood::{MoodEntry, MoodTier};
use chrono::{DateTime, Utc};

/// Maximum contacts suggested for today.
pub const SUGGESTION_LIMIT: usize = 3;
/// Maximum reconnect candidates returned.
pub const RECONNECT_LIMIT: usize = 5;

/// A contact due for reconnection along with how stale it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectCandidate<'a> {
    pub contact: &'a Contact,
    pub staleness: Staleness,
}

/// Contacts to reach out to today, conditioned on today's mood.
///
/// Returns an empty list when no mood is logged for today. Low moods only
/// consider family and close friends.
pub fn suggested_contacts<'a>(
    today_mood: Option<&MoodEntry>,
    contacts: &'a [Contact],
) -> Vec<&'a Contact> {
    let Some(entry) = today_mood else {
        return Vec::new();
    };

    match entry.value.tier() {
        MoodTier::Low => contacts
            .iter()
            .filter(|contact| contact.relationship.is_inner_circle())
            .take(SUGGESTION_LIMIT)
            .collect(),
        MoodTier::MidHigh => contacts.iter().take(SUGGESTION_LIMIT).collect(),
    }
}

/// Contacts whose staleness meets or exceeds their reconnect threshold.
pub fn reconnect_suggestions(
    contacts: &[Contact],
    now: DateTime<Utc>,
) -> Vec<ReconnectCandidate<'_>> {
    let mut candidates: Vec<ReconnectCandidate<'_>> = contacts
        .iter()
        .map(|contact| ReconnectCandidate {
            contact,
            staleness: staleness(contact, now),
        })
        .filter(|candidate| candidate.staleness.is_due(candidate.contact.reconnect_days))
        .collect();

    candidates.sort_by(|left, right| right.staleness.cmp(&left.staleness));
    candidates.truncate(RECONNECT_LIMIT);
    candidates
}

#[cfg(test)]
mod tests {
    use super::{reconnect_suggestions, suggested_contacts};
    use crate::model::contact::{Contact, ContactDraft, ContactId, RelationshipType};
    use crate::model::mood::MoodEntry;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn mid_mood_takes_first_three_in_roster_order() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let contacts: Vec<Contact> = (1..=5)
            .map(|id| {
                Contact::from_draft(
                    ContactId(id),
                    ContactDraft::new(format!("c{id}"), RelationshipType::Colleague),
                )
                .unwrap()
            })
            .collect();
        let mood = MoodEntry::new(now.date_naive(), 3, now).unwrap();

        let ids: Vec<i64> = suggested_contacts(Some(&mood), &contacts)
            .iter()
            .map(|contact| contact.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn ties_keep_roster_order_and_cap_at_five() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let contacts: Vec<Contact> = (1..=7)
            .map(|id| {
                let mut contact = Contact::from_draft(
                    ContactId(id),
                    ContactDraft::new(format!("c{id}"), RelationshipType::Family),
                )
                .unwrap();
                contact.last_contact_at = Some(now - Duration::days(10));
                contact
            })
            .collect();

        let ids: Vec<i64> = reconnect_suggestions(&contacts, now)
            .iter()
            .map(|candidate| candidate.contact.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
