//! Order oracle errors.
//!
//! These never abort a file pass: the oracle session logs them and
//! degrades to "no sorting" for the rest of the session.

use std::path::PathBuf;

use super::error_code::{self, TailsortErrorCode};

/// Errors raised while locating or constructing an ordering context.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("No class-order configuration found from {root}")]
    ConfigNotFound { root: PathBuf },

    #[error("Failed to read class-order configuration {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("Malformed class-order configuration {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

impl TailsortErrorCode for OracleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => error_code::ORACLE_CONFIG_NOT_FOUND,
            Self::Unreadable { .. } | Self::Malformed { .. } => error_code::ORACLE_ERROR,
        }
    }
}
