//! Extraction requests embedded in a class list (`id:<name>`).

use super::tokenizer::token_spans;

/// Result of scanning a class string for an extraction marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRequest {
    /// Requested constant name; `None` means "sort in place".
    pub identifier: Option<String>,
    /// The class string with the marker token removed.
    pub class_name: String,
}

/// Split a marker token such as `id:box` off `raw`.
///
/// The first token of the form `<marker><name>` with an identifier-shaped
/// `name` is removed along with one adjacent whitespace run: the run before
/// it, or the run after it when the marker leads the list. Markers with an
/// empty or invalid name are ordinary tokens and `raw` comes back unchanged.
pub fn outsource_identifier_from_class_name(raw: &str, marker: &str) -> IdentifierRequest {
    let spans = token_spans(raw);

    let found = spans.iter().enumerate().find_map(|(idx, &(start, end))| {
        raw[start..end]
            .strip_prefix(marker)
            .filter(|name| is_identifier(name))
            .map(|name| (idx, name.to_string()))
    });

    let Some((idx, identifier)) = found else {
        return IdentifierRequest {
            identifier: None,
            class_name: raw.to_string(),
        };
    };

    let (token_start, token_end) = spans[idx];
    let (cut_start, cut_end) = if idx > 0 {
        (spans[idx - 1].1, token_end)
    } else if let Some(&(next_start, _)) = spans.get(idx + 1) {
        (token_start, next_start)
    } else {
        (token_start, token_end)
    };

    let mut class_name = String::with_capacity(raw.len());
    class_name.push_str(&raw[..cut_start]);
    class_name.push_str(&raw[cut_end..]);

    IdentifierRequest {
        identifier: Some(identifier),
        class_name,
    }
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_marker() {
        let req = outsource_identifier_from_class_name("z-10 items-center id:box", "id:");
        assert_eq!(req.identifier.as_deref(), Some("box"));
        assert_eq!(req.class_name, "z-10 items-center");
    }

    #[test]
    fn test_leading_marker_keeps_leading_whitespace() {
        let req = outsource_identifier_from_class_name("  id:card  p-4 m-2", "id:");
        assert_eq!(req.identifier.as_deref(), Some("card"));
        assert_eq!(req.class_name, "  p-4 m-2");
    }

    #[test]
    fn test_middle_marker() {
        let req = outsource_identifier_from_class_name("p-4 id:card\tm-2", "id:");
        assert_eq!(req.identifier.as_deref(), Some("card"));
        assert_eq!(req.class_name, "p-4\tm-2");
    }

    #[test]
    fn test_no_marker_passes_through() {
        let raw = "  p-4  m-2 ";
        let req = outsource_identifier_from_class_name(raw, "id:");
        assert_eq!(req.identifier, None);
        assert_eq!(req.class_name, raw);
    }

    #[test]
    fn test_invalid_names_are_not_markers() {
        for raw in ["p-4 id:", "p-4 id:9lives", "p-4 id:foo-bar", "p-4 grid:cols"] {
            let req = outsource_identifier_from_class_name(raw, "id:");
            assert_eq!(req.identifier, None, "{raw}");
            assert_eq!(req.class_name, raw);
        }
    }

    #[test]
    fn test_only_first_marker_is_taken() {
        let req = outsource_identifier_from_class_name("id:a p-4 id:b", "id:");
        assert_eq!(req.identifier.as_deref(), Some("a"));
        assert_eq!(req.class_name, "p-4 id:b");
    }

    #[test]
    fn test_custom_marker() {
        let req = outsource_identifier_from_class_name("flex as:row", "as:");
        assert_eq!(req.identifier.as_deref(), Some("row"));
        assert_eq!(req.class_name, "flex");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("box"));
        assert!(is_identifier("_private$1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1box"));
        assert!(!is_identifier("a-b"));
    }
}
