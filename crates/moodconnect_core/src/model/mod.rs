//! Domain model for mood tracking and the contact roster.
//!
//! # Responsibility
//! - Define the canonical records owned by a session (`MoodEntry`, `Contact`).
//! - Provide value-returning collection operations (upsert/insert/update/remove).
//!
//! # Invariants
//! - At most one `MoodEntry` per calendar date; later writes replace earlier ones.
//! - `Contact::id` is unique within a collection and `reconnect_days > 0`.
//! - Contact deletion is a hard delete; there are no tombstones.

pub mod contact;
pub mod mood;
