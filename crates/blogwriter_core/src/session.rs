//! Session bootstrap wiring store, persistence and projection.
//!
//! # Responsibility
//! - Restore the durable slot exactly once before anything can be rendered.
//! - Attach the persistence hook only after the restore has been applied.
//! - Expose the store operations the presentation layer invokes.
//!
//! # Invariants
//! - No save is ever issued before `load` has completed or been abandoned.
//! - A corrupt or unreadable slot degrades to an empty collection.
//! - Dropping the session drains saves already queued before the writer
//!   thread stops.

use crate::config::{ConfigError, CoreConfig};
use crate::logging::{init_logging, LoggingError};
use crate::model::record::{Record, RecordId};
use crate::persistence::bridge::PersistenceBridge;
use crate::persistence::storage::KeyValueStorage;
use crate::persistence::writer::{persist_on_change, PersistenceWriter};
use crate::store::action::StoreEvent;
use crate::store::record_store::{RecordStore, SubscriptionId};
use crate::validation::ValidationError;
use crate::view::{project_cards, CardView};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session bootstrap failure.
#[derive(Debug)]
pub enum SessionError {
    Config(ConfigError),
    WriterSpawn(std::io::Error),
    Logging(LoggingError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::WriterSpawn(err) => write!(f, "failed to start persistence writer: {err}"),
            Self::Logging(err) => write!(f, "failed to start logging: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::WriterSpawn(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// How the startup restore resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Slot read successfully (possibly absent, yielding zero records).
    Restored { count: usize },
    /// Slot unreadable or malformed; started from an empty collection.
    FellBackToEmpty,
}

/// One running app session.
pub struct BlogSession {
    config: CoreConfig,
    store: RecordStore,
    writer: PersistenceWriter,
    restore: RestoreOutcome,
}

impl BlogSession {
    /// Loads the slot, seeds the store and starts persistence.
    ///
    /// # Errors
    /// - `Config` when `config` fails validation.
    /// - `Logging` when `log_dir` is set but logging cannot start. A logger
    ///   already running with other settings is kept and only warned about.
    /// - `WriterSpawn` when the persistence thread cannot start.
    pub fn start<S>(config: &CoreConfig, storage: S) -> Result<Self, SessionError>
    where
        S: KeyValueStorage + 'static,
    {
        let config = config.validate()?;
        if let Some(log_dir) = config.log_dir.as_deref() {
            start_logging(&config.log_level, log_dir)?;
        }
        let bridge = PersistenceBridge::with_key(storage, config.storage_key.as_str());

        let (records, restore) = match bridge.load() {
            Ok(records) => {
                let count = records.len();
                (records, RestoreOutcome::Restored { count })
            }
            Err(err) => {
                warn!(
                    "event=session_restore module=session status=error fallback=empty error={err}"
                );
                (Vec::new(), RestoreOutcome::FellBackToEmpty)
            }
        };

        let mut store = RecordStore::new();
        store.set_all(records);

        let writer = PersistenceWriter::spawn(bridge).map_err(SessionError::WriterSpawn)?;
        persist_on_change(&mut store, writer.handle());

        info!(
            "event=session_start module=session status=ok key={} count={}",
            config.storage_key,
            store.len()
        );

        Ok(Self {
            config,
            store,
            writer,
            restore,
        })
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn restore_outcome(&self) -> RestoreOutcome {
        self.restore
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Cards for the current collection using the configured preview length.
    pub fn cards(&self) -> Vec<CardView> {
        project_cards(self.store.records(), self.config.preview_chars)
    }

    /// Registers a presentation observer (for example, a re-render hook).
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &[Record]) + Send + 'static,
    {
        self.store.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Creates a record from form input.
    ///
    /// # Errors
    /// - `ValidationError` when either field is blank; nothing is persisted.
    pub fn add(&mut self, title: &str, content: &str) -> Result<Record, ValidationError> {
        self.store.add(title, content).map_err(|err| {
            info!("event=record_add module=session status=rejected reason={err}");
            err
        })
    }

    /// Deletes a record. Confirmation is the caller's responsibility.
    pub fn delete(&mut self, id: &RecordId) {
        self.store.delete(id);
    }

    pub fn toggle_expand(&mut self, id: &RecordId) {
        self.store.toggle_expand(id);
    }

    /// Blocks until all saves issued so far have completed.
    pub fn flush(&self) {
        self.writer.flush();
    }

    /// Count of saves that failed since start; failures are otherwise silent.
    pub fn failed_saves(&self) -> usize {
        self.writer.failed_count()
    }
}

fn start_logging(level: &str, log_dir: &str) -> Result<(), SessionError> {
    match init_logging(level, log_dir) {
        Ok(()) => Ok(()),
        Err(LoggingError::Conflict(message)) => {
            warn!("event=logging_init module=session status=skipped reason=conflict detail={message}");
            Ok(())
        }
        Err(err) => Err(SessionError::Logging(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::{BlogSession, RestoreOutcome};
    use crate::config::CoreConfig;
    use crate::persistence::storage::{KeyValueStorage, MemoryKeyValueStorage};

    #[test]
    fn invalid_config_is_rejected_before_touching_storage() {
        let config = CoreConfig {
            storage_key: String::new(),
            ..CoreConfig::default()
        };
        assert!(BlogSession::start(&config, MemoryKeyValueStorage::new()).is_err());
    }

    #[test]
    fn startup_does_not_write_restored_slot() {
        let mut storage = MemoryKeyValueStorage::new();
        let raw = r#"[{"id":"1","title":"A","content":"a","expanded":true}]"#;
        storage.set_item("@blogs", raw).unwrap();

        let session = BlogSession::start(&CoreConfig::default(), storage.clone()).unwrap();
        session.flush();

        assert_eq!(session.restore_outcome(), RestoreOutcome::Restored { count: 1 });
        assert_eq!(storage.get_item("@blogs").unwrap().as_deref(), Some(raw));
    }
}
