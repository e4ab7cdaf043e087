//! Persistence collaborators for session state.
//!
//! # Responsibility
//! - Define the key-value contract the session controller saves through.
//! - Keep SQL details out of the session and engine layers.

pub mod kv_store;
