//! Blog record model.
//!
//! # Responsibility
//! - Define the record persisted under the durable slot.
//! - Generate opaque record identifiers.
//!
//! # Invariants
//! - `id` is stable for the record lifetime and never reused.
//! - `title` and `content` are trimmed and non-empty when created through
//!   the store; restored records are trusted as-is.
//! - Wire field names are `id`, `title`, `content`, `expanded`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque record identifier.
///
/// Compared only for equality inside one local collection. Any string read
/// back from storage is accepted, including ids minted by older builds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Mints a fresh identifier backed by a random UUID v4.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One user-authored blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    /// Display flag; `true` renders the full body instead of a preview.
    #[serde(default)]
    pub expanded: bool,
}

impl Record {
    /// Builds a collapsed record with a freshly generated id.
    ///
    /// Callers are expected to pass already validated, trimmed text.
    pub(crate) fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(RecordId::generate(), title, content)
    }

    /// Builds a collapsed record with a caller-provided id.
    ///
    /// Used by restore/import paths and tests where identity already exists.
    pub fn with_id(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            expanded: false,
        }
    }
}
