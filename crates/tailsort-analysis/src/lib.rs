//! tailsort-analysis: class-list ordering and extraction for JSX/TSX markup.
//!
//! Pipeline per class-like attribute:
//! span extraction -> identifier markers -> tokenizing -> oracle ordering ->
//! patch building -> diagnostics with fixes.

pub mod classes;
pub mod engine;
pub mod extraction;
pub mod oracle;
pub mod parsers;
pub mod rules;

pub use engine::{ClassOrderEngine, FileReport};
pub use rules::{ClassOrderRule, Diagnostic, DiagnosticKind, Fix, TextEdit};
