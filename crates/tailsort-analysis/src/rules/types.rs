//! Diagnostics and fixes produced by the class-order rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity levels for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
            Self::Hint => write!(f, "hint"),
        }
    }
}

/// The two diagnostics the rule can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A class list is not in canonical order.
    InvalidOrder,
    /// A class list carries an extraction marker.
    InvalidInline,
}

impl DiagnosticKind {
    pub fn message_id(&self) -> &'static str {
        match self {
            Self::InvalidOrder => "invalid-order",
            Self::InvalidInline => "invalid-inline",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message_id())
    }
}

/// Replace `[start, end)` of the source with `text`. Insertions have `start == end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl TextEdit {
    pub fn replace(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(at, at, text)
    }
}

/// A set of edits that resolves one diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    pub description: String,
    pub edits: Vec<TextEdit>,
}

impl Fix {
    /// Apply the edits to `source`, back to front so earlier offsets stay valid.
    /// Edits must not overlap.
    pub fn apply(&self, source: &str) -> String {
        apply_edits(source, self.edits.iter())
    }
}

/// Apply a batch of non-overlapping edits from several fixes at once.
pub fn apply_edits<'a>(source: &str, edits: impl IntoIterator<Item = &'a TextEdit>) -> String {
    let mut edits: Vec<(usize, &TextEdit)> = edits.into_iter().enumerate().collect();
    // Insertions at one offset end up in the order they were given.
    edits.sort_by_key(|(i, e)| std::cmp::Reverse((e.start, e.end, *i)));
    let mut out = source.to_string();
    for (_, edit) in edits {
        out.replace_range(edit.start..edit.end, &edit.text);
    }
    out
}

/// A single finding for one class span or attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule_id: String,
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub message: String,
    pub file: String,
    /// 1-based line of the reported range.
    pub line: u32,
    /// 0-based column of the reported range.
    pub column: u32,
    pub start: usize,
    pub end: usize,
    pub fix: Option<Fix>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replacement_and_insertion() {
        let fix = Fix {
            description: "t".to_string(),
            edits: vec![
                TextEdit::replace(0, 3, "abc"),
                TextEdit::insert(7, "!"),
            ],
        };
        assert_eq!(fix.apply("xyz def"), "abc def!");
    }

    #[test]
    fn test_apply_edits_across_fixes() {
        let edits = [TextEdit::replace(4, 7, "BBB"), TextEdit::replace(0, 3, "AA")];
        assert_eq!(apply_edits("aaa bbb ccc", edits.iter()), "AA BBB ccc");
    }

    #[test]
    fn test_same_offset_insertions_keep_order() {
        let edits = [TextEdit::insert(1, "A"), TextEdit::insert(1, "B")];
        assert_eq!(apply_edits("xy", edits.iter()), "xABy");
    }

    #[test]
    fn test_kind_ids() {
        assert_eq!(DiagnosticKind::InvalidOrder.to_string(), "invalid-order");
        assert_eq!(DiagnosticKind::InvalidInline.message_id(), "invalid-inline");
        assert_eq!(
            serde_json::to_string(&DiagnosticKind::InvalidInline).unwrap(),
            "\"invalid-inline\""
        );
    }
}
