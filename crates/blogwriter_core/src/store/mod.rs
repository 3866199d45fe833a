//! In-memory authoritative record collection.
//!
//! # Responsibility
//! - Own the ordered record collection for one running session.
//! - Apply mutations through a pure reducer over `StoreAction` values.
//! - Notify registered observers after every committed change.
//!
//! # Invariants
//! - Newest records come first.
//! - Record ids are unique within the collection.
//! - Observers are notified only when the collection actually changed.

pub mod action;
pub mod record_store;
