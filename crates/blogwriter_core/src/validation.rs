//! Entry validation gate.
//!
//! # Invariants
//! - Both fields must be non-empty after trimming leading/trailing whitespace.
//! - No length or character restrictions exist.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection reason for a new entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    EmptyContent,
    EmptyTitleAndContent,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyContent => write!(f, "content must not be empty"),
            Self::EmptyTitleAndContent => write!(f, "title and content must not be empty"),
        }
    }
}

impl Error for ValidationError {}

/// Returns whether both fields are non-empty after trimming.
pub fn is_valid_entry(title: &str, content: &str) -> bool {
    validate_entry(title, content).is_ok()
}

/// Validates an entry and returns its trimmed `(title, content)` pair.
///
/// # Errors
/// - Returns a `ValidationError` naming the blank field(s).
pub fn validate_entry<'a>(
    title: &'a str,
    content: &'a str,
) -> Result<(&'a str, &'a str), ValidationError> {
    let title = title.trim();
    let content = content.trim();
    match (title.is_empty(), content.is_empty()) {
        (false, false) => Ok((title, content)),
        (true, false) => Err(ValidationError::EmptyTitle),
        (false, true) => Err(ValidationError::EmptyContent),
        (true, true) => Err(ValidationError::EmptyTitleAndContent),
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_entry, validate_entry, ValidationError};

    #[test]
    fn accepts_non_blank_fields_and_trims_them() {
        assert_eq!(
            validate_entry("  Hello ", "\tWorld\n").unwrap(),
            ("Hello", "World")
        );
        assert!(is_valid_entry("a", "b"));
    }

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(validate_entry("", "x"), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_entry("x", "   "), Err(ValidationError::EmptyContent));
        assert_eq!(
            validate_entry(" \n", "\t"),
            Err(ValidationError::EmptyTitleAndContent)
        );
        assert!(!is_valid_entry("", "x"));
    }

    #[test]
    fn has_no_length_limit() {
        let long = "x".repeat(10_000);
        assert!(is_valid_entry(&long, &long));
    }
}
