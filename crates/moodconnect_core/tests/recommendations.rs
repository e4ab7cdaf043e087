use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use moodconnect_core::{
    mood_history, mood_statistics, reconnect_suggestions, staleness, suggested_contacts,
    today_mood, Contact, ContactDraft, ContactId, MoodEntry, RelationshipType, Staleness,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
}

fn contact(id: i64, relationship: RelationshipType) -> Contact {
    Contact::from_draft(
        ContactId(id),
        ContactDraft::new(format!("contact-{id}"), relationship),
    )
    .unwrap()
}

fn contacted(id: i64, reconnect_days: i64, days_ago: i64) -> Contact {
    let mut contact = Contact::from_draft(
        ContactId(id),
        ContactDraft::new(format!("contact-{id}"), RelationshipType::Friend)
            .with_reconnect_days(reconnect_days),
    )
    .unwrap();
    contact.last_contact_at = Some(now() - Duration::days(days_ago));
    contact
}

fn mood(day: u32, value: i64) -> MoodEntry {
    let date = NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
    MoodEntry::new(date, value, now()).unwrap()
}

fn ids(contacts: &[&Contact]) -> Vec<i64> {
    contacts.iter().map(|contact| contact.id.0).collect()
}

#[test]
fn low_mood_suggests_at_most_three_inner_circle_contacts() {
    let relationships = [
        RelationshipType::Friend,
        RelationshipType::Family,
        RelationshipType::Colleague,
        RelationshipType::CloseFriend,
        RelationshipType::Acquaintance,
        RelationshipType::Family,
        RelationshipType::Friend,
        RelationshipType::CloseFriend,
        RelationshipType::Family,
        RelationshipType::Colleague,
    ];
    let contacts: Vec<Contact> = relationships
        .iter()
        .enumerate()
        .map(|(index, relationship)| contact(index as i64 + 1, *relationship))
        .collect();
    let today = mood(10, 1);

    let suggested = suggested_contacts(Some(&today), &contacts);

    assert_eq!(ids(&suggested), vec![2, 4, 6]);
    assert!(suggested
        .iter()
        .all(|contact| contact.relationship.is_inner_circle()));
}

#[test]
fn low_mood_with_no_inner_circle_suggests_nobody() {
    let contacts = vec![
        contact(1, RelationshipType::Friend),
        contact(2, RelationshipType::Colleague),
    ];
    let today = mood(10, 2);

    assert!(suggested_contacts(Some(&today), &contacts).is_empty());
}

#[test]
fn high_mood_suggests_first_three_without_filter() {
    let contacts: Vec<Contact> = (1..=4)
        .map(|id| contact(id, RelationshipType::Acquaintance))
        .collect();
    let today = mood(10, 5);

    assert_eq!(ids(&suggested_contacts(Some(&today), &contacts)), vec![1, 2, 3]);
}

#[test]
fn no_mood_today_means_no_suggestions() {
    let contacts: Vec<Contact> = (1..=10)
        .map(|id| contact(id, RelationshipType::Family))
        .collect();
    let moods = vec![mood(8, 1), mood(9, 5)];
    let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

    let entry = today_mood(&moods, today);
    assert!(entry.is_none());
    assert!(suggested_contacts(entry, &contacts).is_empty());
}

#[test]
fn reconnect_orders_never_contacted_first_then_most_overdue() {
    let a = contacted(1, 7, 10);
    let b = contacted(2, 14, 40);
    let mut c = contact(3, RelationshipType::Family);
    c.reconnect_days = 7;
    let fresh = contacted(4, 14, 2);
    let contacts = vec![a, b, fresh, c];

    let candidates = reconnect_suggestions(&contacts, now());

    let order: Vec<i64> = candidates
        .iter()
        .map(|candidate| candidate.contact.id.0)
        .collect();
    assert_eq!(order, vec![3, 2, 1]);
    assert_eq!(candidates[0].staleness, Staleness::Never);
    assert_eq!(candidates[1].staleness, Staleness::Days(40));
    assert_eq!(candidates[2].staleness, Staleness::Days(10));
}

#[test]
fn reconnect_threshold_is_inclusive() {
    let at_threshold = contacted(1, 14, 14);
    let just_under = contacted(2, 14, 13);

    assert_eq!(staleness(&at_threshold, now()), Staleness::Days(14));
    let roster = [at_threshold.clone(), just_under];
    let candidates = reconnect_suggestions(&roster, now());
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].contact, &at_threshold);
}

#[test]
fn reconnect_caps_at_five() {
    let contacts: Vec<Contact> = (1..=8).map(|id| contacted(id, 7, 7 + id)).collect();

    let order: Vec<i64> = reconnect_suggestions(&contacts, now())
        .iter()
        .map(|candidate| candidate.contact.id.0)
        .collect();
    assert_eq!(order, vec![8, 7, 6, 5, 4]);
}

#[test]
fn statistics_for_empty_collection_are_zero() {
    let stats = mood_statistics(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.average, 0.0);
    assert_eq!(stats.streak, 0);
}

#[test]
fn average_covers_last_seven_appended_entries() {
    let values = [5, 5, 5, 5, 5, 1, 1, 1, 1];
    let moods: Vec<MoodEntry> = values
        .iter()
        .enumerate()
        .map(|(index, value)| mood(index as u32 + 1, *value))
        .collect();

    let stats = mood_statistics(&moods);
    assert_eq!(stats.total, 9);
    // (5 + 5 + 5 + 1 + 1 + 1 + 1) / 7
    assert_eq!(stats.average, 2.7);
    assert_eq!(stats.streak, 1);
}

#[test]
fn average_rounds_to_one_decimal() {
    let values = [5, 5, 5, 5, 5, 1, 1, 1, 1, 1, 1];
    let moods: Vec<MoodEntry> = values
        .iter()
        .enumerate()
        .map(|(index, value)| mood(index as u32 + 1, *value))
        .collect();

    // (5 + 1 + 1 + 1 + 1 + 1 + 1) / 7
    assert_eq!(mood_statistics(&moods).average, 1.6);
}

#[test]
fn average_window_follows_append_order_not_calendar_order() {
    // A late entry for an early date still counts as most recent.
    let mut moods: Vec<MoodEntry> = (2..=8).map(|day| mood(day, 4)).collect();
    moods.push(mood(1, 1));

    // (4 * 6 + 1) / 7
    assert_eq!(mood_statistics(&moods).average, 3.6);
}

#[test]
fn streak_is_presence_flag_not_consecutive_days() {
    let moods = vec![mood(1, 3), mood(2, 3), mood(3, 3)];
    assert_eq!(mood_statistics(&moods).streak, 1);
}

#[test]
fn history_lists_newest_appended_first() {
    let moods = vec![mood(3, 2), mood(1, 4), mood(2, 5)];

    let days: Vec<String> = mood_history(&moods)
        .iter()
        .map(|entry| entry.date_key())
        .collect();
    assert_eq!(days, vec!["2026-03-02", "2026-03-01", "2026-03-03"]);
}
