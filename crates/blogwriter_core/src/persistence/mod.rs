//! Durable persistence for the record collection.
//!
//! # Responsibility
//! - Abstract the device key-value storage behind `KeyValueStorage`.
//! - Serialize the full collection to one JSON slot and restore it.
//! - Run writes off the caller thread, one at a time, in issuance order.
//!
//! # Invariants
//! - The slot always holds the complete collection as a JSON array.
//! - Persistence failures never reach end users; the in-memory store stays
//!   authoritative for the running session.

pub mod bridge;
pub mod storage;
pub mod writer;
