//! TailsortErrorCode trait for host-facing error codes.

/// Every error enum implements this to expose a structured code string
/// that hosts (editor integrations, CI reporters) can match on.
pub trait TailsortErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const UNSUPPORTED_LANGUAGE: &str = "UNSUPPORTED_LANGUAGE";
pub const IO_ERROR: &str = "IO_ERROR";
pub const ORACLE_CONFIG_NOT_FOUND: &str = "ORACLE_CONFIG_NOT_FOUND";
pub const ORACLE_ERROR: &str = "ORACLE_ERROR";
