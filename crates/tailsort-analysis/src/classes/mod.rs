//! Class-list string handling: tokenizing, identifier markers, patch text.

pub mod identifier;
pub mod patch;
pub mod tokenizer;

pub use identifier::{outsource_identifier_from_class_name, IdentifierRequest};
pub use patch::{build_identifier_reference, build_inline_class_name, build_outsourced_class_name};
pub use tokenizer::{split_class_name, SplitClassName};
