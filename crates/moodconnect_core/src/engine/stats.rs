//! Rolling mood aggregates and history views.

use crate::model::mood::MoodEntry;
use chrono::NaiveDate;

/// Number of most recently appended entries in the rolling average.
pub const AVERAGE_WINDOW: usize = 7;

/// Aggregate mood statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodStats {
    /// Count of all entries.
    pub total: usize,
    /// Mean of the last `AVERAGE_WINDOW` appended values, one decimal place.
    /// `0.0` when there are no entries.
    pub average: f64,
    /// `1` when at least one entry exists, else `0`. Not a consecutive-day
    /// count.
    pub streak: u32,
}

/// Computes aggregate statistics over the collection in append order.
///
/// The average window follows append order, not calendar order: an entry
/// logged late for an older day still counts as most recent.
pub fn mood_statistics(moods: &[MoodEntry]) -> MoodStats {
    let window = &moods[moods.len().saturating_sub(AVERAGE_WINDOW)..];
    let average = if window.is_empty() {
        0.0
    } else {
        let sum: u32 = window
            .iter()
            .map(|entry| u32::from(entry.value.value()))
            .sum();
        round_one_decimal(f64::from(sum) / window.len() as f64)
    };

    MoodStats {
        total: moods.len(),
        average,
        streak: u32::from(!moods.is_empty()),
    }
}

/// Entry logged for `today`, if any.
pub fn today_mood(moods: &[MoodEntry], today: NaiveDate) -> Option<&MoodEntry> {
    moods.iter().find(|entry| entry.date == today)
}

/// Entries newest-appended first.
pub fn mood_history(moods: &[MoodEntry]) -> Vec<&MoodEntry> {
    moods.iter().rev().collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
