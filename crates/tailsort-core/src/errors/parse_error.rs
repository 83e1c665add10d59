//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, TailsortErrorCode};

/// Errors that can occur while reading or parsing a source file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Unsupported language: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("Tree-sitter error parsing {path}: {message}")]
    TreeSitterError { path: PathBuf, message: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },
}

impl TailsortErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage { .. } => error_code::UNSUPPORTED_LANGUAGE,
            Self::Io { .. } => error_code::IO_ERROR,
            Self::TreeSitterError { .. } => error_code::PARSE_ERROR,
        }
    }
}
