//! Whitespace-preserving class tokenizer.

use super::patch::build_inline_class_name;

/// A class string split into tokens and the whitespace runs around them.
///
/// `whitespaces.len() == classes.len() + 1`; interleaving
/// `whitespaces[0], classes[0], .., classes[n-1], whitespaces[n]` rebuilds the
/// input byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitClassName {
    pub classes: Vec<String>,
    pub whitespaces: Vec<String>,
}

impl SplitClassName {
    /// Rebuild the original string.
    pub fn join(&self) -> String {
        build_inline_class_name(&self.classes, &self.whitespaces)
    }
}

/// Split `class_name` on ASCII whitespace runs, keeping every run verbatim.
///
/// Separators are the HTML class-list whitespace set; other Unicode spaces
/// such as U+00A0 stay inside their token. Returns `None` when there is
/// nothing but whitespace.
pub fn split_class_name(class_name: &str) -> Option<SplitClassName> {
    if class_name.trim_ascii().is_empty() {
        return None;
    }

    let mut classes = Vec::new();
    let mut whitespaces = Vec::new();
    let mut run = String::new();
    let mut token = String::new();

    for ch in class_name.chars() {
        if ch.is_ascii_whitespace() {
            if !token.is_empty() {
                classes.push(std::mem::take(&mut token));
            }
            run.push(ch);
        } else {
            if token.is_empty() {
                whitespaces.push(std::mem::take(&mut run));
            }
            token.push(ch);
        }
    }
    if !token.is_empty() {
        classes.push(token);
    }
    whitespaces.push(run);

    Some(SplitClassName { classes, whitespaces })
}

/// Byte ranges of each whitespace-delimited token in `s`.
pub(crate) fn token_spans(s: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (idx, ch) in s.char_indices() {
        match (ch.is_ascii_whitespace(), start) {
            (true, Some(st)) => {
                spans.push((st, idx));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(st) = start {
        spans.push((st, s.len()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_single_spaces() {
        let split = split_class_name("z-10 items-center").unwrap();
        assert_eq!(split.classes, vec!["z-10", "items-center"]);
        assert_eq!(split.whitespaces, vec!["", " ", ""]);
    }

    #[test]
    fn test_split_keeps_mixed_whitespace() {
        let input = "\t flex  \n p-4\tm-2 ";
        let split = split_class_name(input).unwrap();
        assert_eq!(split.classes, vec!["flex", "p-4", "m-2"]);
        assert_eq!(split.whitespaces, vec!["\t ", "  \n ", "\t", " "]);
        assert_eq!(split.join(), input);
    }

    #[test]
    fn test_split_blank_is_none() {
        assert!(split_class_name("").is_none());
        assert!(split_class_name("   \t\n").is_none());
    }

    #[test]
    fn test_non_breaking_space_stays_in_token() {
        let split = split_class_name("a\u{a0}b c").unwrap();
        assert_eq!(split.classes, vec!["a\u{a0}b", "c"]);
        assert_eq!(split.whitespaces, vec!["", " ", ""]);
        assert!(split_class_name("\u{a0}").is_some());
        assert_eq!(token_spans("a\u{a0}b c"), vec![(0, 4), (5, 6)]);
    }

    #[test]
    fn test_token_spans() {
        assert_eq!(token_spans(" ab  c "), vec![(1, 3), (5, 6)]);
        assert!(token_spans("   ").is_empty());
    }
}
