//! Patch text builders.

/// Re-interleave reordered tokens with the original whitespace runs.
///
/// Whitespace keeps its positions; only token order changes.
pub fn build_inline_class_name(ordered_classes: &[String], whitespaces: &[String]) -> String {
    let capacity = ordered_classes.iter().map(String::len).sum::<usize>()
        + whitespaces.iter().map(String::len).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    for (idx, class) in ordered_classes.iter().enumerate() {
        let run = whitespaces
            .get(idx)
            .map(String::as_str)
            .unwrap_or(if idx == 0 { "" } else { " " });
        out.push_str(run);
        out.push_str(class);
    }
    if let Some(trailing) = whitespaces.get(ordered_classes.len()) {
        out.push_str(trailing);
    }
    out
}

/// Declaration snippet binding `identifier` to the space-joined classes,
/// inserted after the last top-level statement.
pub fn build_outsourced_class_name(
    ordered_classes: &[String],
    identifier: &str,
    indent_column: usize,
) -> String {
    let value = ordered_classes.join(" ");
    format!(
        "\n\n{indent}const {identifier} = \"{value}\";",
        indent = " ".repeat(indent_column),
        value = escape_double_quoted(&value),
    )
}

/// Attribute text pointing at an extracted constant: `className={box}`.
pub fn build_identifier_reference(attribute_name: &str, identifier: &str) -> String {
    format!("{attribute_name}={{{identifier}}}")
}

fn escape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
