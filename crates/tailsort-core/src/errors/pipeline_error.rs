//! Pipeline errors surfaced to the host.

use super::{ConfigError, ParseError, TailsortErrorCode};

/// Errors that can end a file pass or engine construction.
/// Aggregates subsystem errors via `From` conversions. Oracle errors are
/// absorbed by the session and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TailsortErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
