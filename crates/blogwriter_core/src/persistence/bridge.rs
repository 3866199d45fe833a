//! JSON bridge between the record collection and one storage slot.
//!
//! # Invariants
//! - An absent or empty-string slot loads as an empty collection, not a
//!   failure.
//! - A present slot that is not a JSON array of records is a `LoadFailure`.
//! - `save` always writes the full collection, overwriting the slot.

use crate::model::record::Record;
use crate::persistence::storage::{KeyValueStorage, StorageError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default durable slot key.
pub const DEFAULT_STORAGE_KEY: &str = "@blogs";

/// Startup restore failure. Callers fall back to an empty collection.
#[derive(Debug)]
pub enum LoadFailure {
    Storage(StorageError),
    Malformed(serde_json::Error),
}

impl Display for LoadFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "failed to read records: {err}"),
            Self::Malformed(err) => write!(f, "stored records are malformed: {err}"),
        }
    }
}

impl Error for LoadFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<StorageError> for LoadFailure {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Write failure. Logged only; never rolls back in-memory state.
#[derive(Debug)]
pub enum SaveFailure {
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for SaveFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "failed to write records: {err}"),
            Self::Encode(err) => write!(f, "failed to encode records: {err}"),
        }
    }
}

impl Error for SaveFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for SaveFailure {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Synchronizes one storage slot with a record collection.
pub struct PersistenceBridge<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> PersistenceBridge<S> {
    /// Creates a bridge bound to the default `@blogs` slot.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    /// Reads the slot and decodes the stored collection.
    ///
    /// # Errors
    /// - `Storage` when the backend read fails.
    /// - `Malformed` when the slot content is not a JSON record array.
    pub fn load(&self) -> Result<Vec<Record>, LoadFailure> {
        let stored = self.storage.get_item(&self.key)?;
        let Some(raw) = stored.filter(|raw| !raw.is_empty()) else {
            info!(
                "event=records_load module=persistence status=ok source=empty key={}",
                self.key
            );
            return Ok(Vec::new());
        };

        let records: Vec<Record> = serde_json::from_str(&raw).map_err(|err| {
            warn!(
                "event=records_load module=persistence status=error error_code=malformed key={} bytes={}",
                self.key,
                raw.len()
            );
            LoadFailure::Malformed(err)
        })?;

        info!(
            "event=records_load module=persistence status=ok source=slot key={} count={}",
            self.key,
            records.len()
        );
        Ok(records)
    }

    /// Encodes the full collection and overwrites the slot.
    pub fn save(&mut self, records: &[Record]) -> Result<(), SaveFailure> {
        let raw = serde_json::to_string(records).map_err(SaveFailure::Encode)?;
        self.storage.set_item(&self.key, &raw)?;
        Ok(())
    }
}
