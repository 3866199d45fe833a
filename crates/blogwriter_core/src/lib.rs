//! Core data management for Blog Writer.
//! This crate owns the record collection, its validation rules and its
//! durable persistence; UI layers consume it through `BlogSession`.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod session;
pub mod store;
pub mod validation;
pub mod view;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{Record, RecordId};
pub use persistence::bridge::{LoadFailure, PersistenceBridge, SaveFailure, DEFAULT_STORAGE_KEY};
pub use persistence::storage::{
    KeyValueStorage, MemoryKeyValueStorage, SqliteKeyValueStorage, StorageError, StorageResult,
};
pub use persistence::writer::{persist_on_change, PersistenceWriter, SaveHandle};
pub use session::{BlogSession, RestoreOutcome, SessionError};
pub use store::action::{reduce, StoreAction, StoreEvent};
pub use store::record_store::{RecordStore, SubscriptionId};
pub use validation::{is_valid_entry, validate_entry, ValidationError};
pub use view::{
    project_cards, CardView, DELETE_CONFIRMATION, EMPTY_LIST_MESSAGE, VALIDATION_NOTICE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
