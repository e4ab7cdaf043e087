//! Daily mood record.
//!
//! # Responsibility
//! - Define the five-level mood scale and its low / mid-high tiering.
//! - Provide the date-keyed upsert used by mood logging.
//!
//! # Invariants
//! - `MoodEntry::value` is always one of the five levels; out-of-range values
//!   are rejected at construction and on deserialization.
//! - A collection holds at most one entry per `date`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest accepted mood value.
pub const MOOD_VALUE_MIN: i64 = 1;
/// Highest accepted mood value.
pub const MOOD_VALUE_MAX: i64 = 5;
/// Calendar date format used for persisted `date` keys.
pub const MOOD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Five-level mood scale, 1 = most negative, 5 = most positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoodLevel {
    Struggling,
    Down,
    Okay,
    Good,
    Great,
}

/// Suggestion tier derived from a mood level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodTier {
    /// Values 1 and 2: suggestions are limited to the inner circle.
    Low,
    /// Values 3 through 5: no relationship filter.
    MidHigh,
}

impl MoodLevel {
    /// All levels in ascending order.
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::Struggling,
        MoodLevel::Down,
        MoodLevel::Okay,
        MoodLevel::Good,
        MoodLevel::Great,
    ];

    /// Parses an ordinal mood value.
    ///
    /// # Errors
    /// - Returns `MoodValidationError::OutOfRange` outside `1..=5`.
    pub fn from_value(value: i64) -> Result<Self, MoodValidationError> {
        match value {
            1 => Ok(Self::Struggling),
            2 => Ok(Self::Down),
            3 => Ok(Self::Okay),
            4 => Ok(Self::Good),
            5 => Ok(Self::Great),
            other => Err(MoodValidationError::OutOfRange(other)),
        }
    }

    /// Ordinal value in `1..=5`.
    pub fn value(self) -> u8 {
        match self {
            Self::Struggling => 1,
            Self::Down => 2,
            Self::Okay => 3,
            Self::Good => 4,
            Self::Great => 5,
        }
    }

    /// User-facing short label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Struggling => "Struggling",
            Self::Down => "Down",
            Self::Okay => "Okay",
            Self::Good => "Good",
            Self::Great => "Great",
        }
    }

    /// Reach-out prompt shown next to today's suggestions.
    pub fn suggestion(self) -> &'static str {
        match self {
            Self::Struggling => "Connect with your support system",
            Self::Down => "Talk to your closest confidants",
            Self::Okay => "Reach out to someone supportive",
            Self::Good => "Connect with close friends",
            Self::Great => "Share your positive energy!",
        }
    }

    /// Suggestion tier: `Low` for values 1 and 2, `MidHigh` otherwise.
    pub fn tier(self) -> MoodTier {
        if self.value() <= 2 {
            MoodTier::Low
        } else {
            MoodTier::MidHigh
        }
    }
}

/// Mood validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodValidationError {
    /// Value outside the accepted `1..=5` scale.
    OutOfRange(i64),
}

impl Display for MoodValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(value) => write!(
                f,
                "mood value {value} is out of range; expected {MOOD_VALUE_MIN}..={MOOD_VALUE_MAX}"
            ),
        }
    }
}

impl Error for MoodValidationError {}

/// One logged mood for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoodEntryWire", into = "MoodEntryWire")]
pub struct MoodEntry {
    /// Local calendar day this entry belongs to. Unique within a collection.
    pub date: NaiveDate,
    pub value: MoodLevel,
    /// Instant the entry was recorded.
    pub logged_at: DateTime<Utc>,
}

impl MoodEntry {
    /// Creates an entry from a raw ordinal value.
    ///
    /// # Errors
    /// - Returns `MoodValidationError::OutOfRange` outside `1..=5`.
    pub fn new(
        date: NaiveDate,
        value: i64,
        logged_at: DateTime<Utc>,
    ) -> Result<Self, MoodValidationError> {
        Ok(Self {
            date,
            value: MoodLevel::from_value(value)?,
            logged_at,
        })
    }

    /// Persisted `YYYY-MM-DD` key for this entry.
    pub fn date_key(&self) -> String {
        self.date.format(MOOD_DATE_FORMAT).to_string()
    }
}

/// Inserts `entry`, replacing any existing entry for the same date.
///
/// The replaced entry is discarded and the new one is appended, so append
/// order always reflects the most recent write.
pub fn apply_mood(mut moods: Vec<MoodEntry>, entry: MoodEntry) -> Vec<MoodEntry> {
    moods.retain(|existing| existing.date != entry.date);
    moods.push(entry);
    moods
}

#[derive(Serialize, Deserialize)]
struct MoodEntryWire {
    date: NaiveDate,
    value: i64,
    timestamp: DateTime<Utc>,
}

impl TryFrom<MoodEntryWire> for MoodEntry {
    type Error = MoodValidationError;

    fn try_from(wire: MoodEntryWire) -> Result<Self, Self::Error> {
        MoodEntry::new(wire.date, wire.value, wire.timestamp)
    }
}

impl From<MoodEntry> for MoodEntryWire {
    fn from(entry: MoodEntry) -> Self {
        Self {
            date: entry.date,
            value: i64::from(entry.value.value()),
            timestamp: entry.logged_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_mood, MoodEntry, MoodLevel, MoodTier, MoodValidationError};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).expect("valid date")
    }

    #[test]
    fn from_value_rejects_out_of_range() {
        assert_eq!(
            MoodLevel::from_value(0),
            Err(MoodValidationError::OutOfRange(0))
        );
        assert_eq!(
            MoodLevel::from_value(6),
            Err(MoodValidationError::OutOfRange(6))
        );
    }

    #[test]
    fn tiers_split_between_two_and_three() {
        assert_eq!(MoodLevel::Down.tier(), MoodTier::Low);
        assert_eq!(MoodLevel::Okay.tier(), MoodTier::MidHigh);
    }

    #[test]
    fn apply_mood_replaces_same_day_and_appends() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let moods = vec![
            MoodEntry::new(day(1), 3, at).unwrap(),
            MoodEntry::new(day(2), 4, at).unwrap(),
        ];

        let moods = apply_mood(moods, MoodEntry::new(day(1), 5, at).unwrap());

        assert_eq!(moods.len(), 2);
        assert_eq!(moods[0].date, day(2));
        assert_eq!(moods[1].date, day(1));
        assert_eq!(moods[1].value, MoodLevel::Great);
    }
}
