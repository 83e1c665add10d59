//! Configuration errors.
//!
//! Reading and parsing failures carry the source they came from; validation
//! failures name the offending `[rule]` value.

use std::path::PathBuf;

use super::error_code::{self, TailsortErrorCode};

/// Errors raised while loading, validating or writing a `TailsortConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read tailsort config {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    /// `origin` is a file path, or `<string>` for in-memory TOML.
    #[error("Malformed tailsort config {origin}: {message}")]
    Malformed { origin: String, message: String },

    #[error("Identifier marker {marker:?} must be non-empty and contain no whitespace")]
    InvalidMarker { marker: String },

    #[error("Joining function names must not be blank (got {name:?})")]
    BlankJoiningFunction { name: String },

    #[error("Class attribute pattern {pattern:?} does not compile: {message}")]
    InvalidAttributePattern { pattern: String, message: String },

    #[error("Cannot serialize tailsort config: {message}")]
    Serialize { message: String },
}

impl ConfigError {
    /// The `[rule]` key a validation error refers to.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidMarker { .. } => Some("rule.identifier_marker"),
            Self::BlankJoiningFunction { .. } => Some("rule.joining_functions"),
            Self::InvalidAttributePattern { .. } => Some("rule.class_attributes.patterns"),
            Self::Unreadable { .. } | Self::Malformed { .. } | Self::Serialize { .. } => None,
        }
    }
}

impl TailsortErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unreadable { .. } => error_code::IO_ERROR,
            Self::Malformed { .. } | Self::Serialize { .. } => error_code::CONFIG_ERROR,
            Self::InvalidMarker { .. }
            | Self::BlankJoiningFunction { .. }
            | Self::InvalidAttributePattern { .. } => error_code::CONFIG_INVALID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_name_their_field() {
        let err = ConfigError::InvalidMarker {
            marker: "i d".to_string(),
        };
        assert_eq!(err.field(), Some("rule.identifier_marker"));
        assert_eq!(err.error_code(), "CONFIG_INVALID");
        assert_eq!(
            err.coded_string(),
            "[CONFIG_INVALID] Identifier marker \"i d\" must be non-empty and contain no whitespace"
        );
    }

    #[test]
    fn test_read_failure_is_io() {
        let err = ConfigError::Unreadable {
            path: PathBuf::from("tailsort.toml"),
            message: "permission denied".to_string(),
        };
        assert_eq!(err.field(), None);
        assert_eq!(err.error_code(), "IO_ERROR");
        assert!(err.to_string().contains("tailsort.toml"));
    }
}
