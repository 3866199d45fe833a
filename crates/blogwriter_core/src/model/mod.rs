//! Domain model for blog entries.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, persistence and views.
//!
//! # Invariants
//! - Every record is identified by a stable `RecordId`.
//! - Records leave the collection by hard delete; there are no tombstones.

pub mod record;
