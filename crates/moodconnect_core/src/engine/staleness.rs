//! Contact staleness in whole days.

use crate::model::contact::Contact;
use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Days since last contact, or `Never` for contacts never reached.
///
/// `Never` orders above every finite day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Staleness {
    Days(u64),
    Never,
}

impl Staleness {
    /// Finite day count, `None` when never contacted.
    pub fn days(self) -> Option<u64> {
        match self {
            Self::Days(days) => Some(days),
            Self::Never => None,
        }
    }

    /// Whether this staleness meets a reconnect threshold (inclusive).
    pub fn is_due(self, reconnect_days: u32) -> bool {
        match self {
            Self::Days(days) => days >= u64::from(reconnect_days),
            Self::Never => true,
        }
    }
}

impl Display for Staleness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Days(1) => write!(f, "1 day"),
            Self::Days(days) => write!(f, "{days} days"),
            Self::Never => write!(f, "never contacted"),
        }
    }
}

/// Whole days between `now` and the contact's last contact.
///
/// Absolute elapsed time is rounded up, so any partial day counts as a full
/// one and a timestamp slightly in the future still yields a positive count.
pub fn staleness(contact: &Contact, now: DateTime<Utc>) -> Staleness {
    match contact.last_contact_at {
        None => Staleness::Never,
        Some(last) => {
            let elapsed_ms = (now - last).num_milliseconds().unsigned_abs();
            Staleness::Days(elapsed_ms.div_ceil(MILLIS_PER_DAY))
        }
    }
}
