//! Rule orchestration: attribute matching, per-span decisions, diagnostics.

pub mod class_order;
pub mod matcher;
pub mod registry;
pub mod types;

pub use class_order::{AttributeNode, ClassOrderRule, InsertionPoint, RuleContext, RULE_ID};
pub use matcher::AttributeMatcher;
pub use registry::ExtractionRegistry;
pub use types::{Diagnostic, DiagnosticKind, Fix, Severity, TextEdit};
