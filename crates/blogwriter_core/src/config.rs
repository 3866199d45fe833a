//! Core runtime configuration.
//!
//! # Invariants
//! - `storage_key` is non-empty after trimming.
//! - `preview_chars` is at least 1.
//! - `log_level` is one of `trace|debug|info|warn|error`.
//! - A blank `log_dir` means "do not start file logging".

use crate::logging::{default_log_level, normalize_level};
use crate::persistence::bridge::DEFAULT_STORAGE_KEY;
use crate::view::DEFAULT_PREVIEW_CHARS;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyStorageKey,
    ZeroPreviewChars,
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStorageKey => write!(f, "storage_key cannot be empty"),
            Self::ZeroPreviewChars => write!(f, "preview_chars must be at least 1"),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {}

/// Settings shared by session bootstrap and presentation projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Durable slot holding the serialized collection.
    pub storage_key: String,
    /// Characters shown for a collapsed record before the ellipsis.
    pub preview_chars: usize,
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` leaves logging to
    /// the host process.
    pub log_dir: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Checks invariants and returns a normalized copy.
    pub fn validate(&self) -> Result<Self, ConfigError> {
        let storage_key = self.storage_key.trim();
        if storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.preview_chars == 0 {
            return Err(ConfigError::ZeroPreviewChars);
        }
        let log_level = normalize_level(&self.log_level)
            .map_err(|err| ConfigError::InvalidLogLevel(err.to_string()))?;

        Ok(Self {
            storage_key: storage_key.to_string(),
            preview_chars: self.preview_chars,
            log_level: log_level.to_string(),
            log_dir: self
                .log_dir
                .as_deref()
                .map(str::trim)
                .filter(|dir| !dir.is_empty())
                .map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};

    #[test]
    fn default_config_is_valid() {
        let config = CoreConfig::default().validate().unwrap();
        assert_eq!(config.storage_key, "@blogs");
        assert_eq!(config.preview_chars, 140);
    }

    #[test]
    fn validate_normalizes_key_and_level() {
        let config = CoreConfig {
            storage_key: "  @drafts ".to_string(),
            preview_chars: 20,
            log_level: "WARNING".to_string(),
            log_dir: Some("   ".to_string()),
        }
        .validate()
        .unwrap();
        assert_eq!(config.storage_key, "@drafts");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let blank_key = CoreConfig {
            storage_key: " ".to_string(),
            ..CoreConfig::default()
        };
        assert_eq!(blank_key.validate(), Err(ConfigError::EmptyStorageKey));

        let zero_preview = CoreConfig {
            preview_chars: 0,
            ..CoreConfig::default()
        };
        assert_eq!(zero_preview.validate(), Err(ConfigError::ZeroPreviewChars));

        let bad_level = CoreConfig {
            log_level: "loud".to_string(),
            ..CoreConfig::default()
        };
        assert!(matches!(
            bad_level.validate(),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
