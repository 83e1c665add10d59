//! Tree-sitter parser subsystem for JSX-capable languages.

pub mod error_tolerant;
pub mod language;

pub use language::{parse_source, Language};
