//! Span extraction: which parts of an attribute value hold rewritable class lists.

pub mod extractor;
pub mod types;

pub use extractor::SpanExtractor;
pub use types::{ClassNameExtraction, ExtractionArena, NodeHandle, SpanId};
