//! Error handling for tailsort.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod oracle_error;
pub mod parse_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use error_code::TailsortErrorCode;
pub use oracle_error::OracleError;
pub use parse_error::ParseError;
pub use pipeline_error::PipelineError;
