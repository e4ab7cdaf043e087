//! Recommendation engine.
//!
//! # Responsibility
//! - Compute contact staleness, today's suggestions, reconnect candidates and
//!   rolling mood statistics.
//!
//! # Invariants
//! - Every query is a pure function of `(moods, contacts, now)`.
//! - Nothing is cached; each call rescans the collections it receives.

pub mod staleness;
pub mod stats;
pub mod suggestions;
