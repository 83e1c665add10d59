//! File-pass engine: parse, walk class-like attributes, collect diagnostics.

pub mod file_pass;

pub use file_pass::{ClassOrderEngine, FileReport};
