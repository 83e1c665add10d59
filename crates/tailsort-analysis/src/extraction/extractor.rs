//! Walks an attribute value expression and records every string span whose
//! text can be rewritten as a class list.
//!
//! Leaves are string literals, substitution-free template literals, and the
//! literal chunks of templates with substitutions. Containers (joining-function
//! calls, arrays, conditionals, logical expressions, objects, templates with
//! substitutions) bracket nested leaves. Anything else contributes nothing.
//!
//! Only a span that is the whole attribute value may be a root leaf; every
//! literal reached through a compound expression has a container parent.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tree_sitter::Node;

use super::types::{ClassNameExtraction, ExtractionArena, NodeHandle, SpanId};

/// Child kinds that make a literal's raw text differ from its runtime value.
const ESCAPE_KINDS: &[&str] = &["escape_sequence", "html_character_reference"];

/// Logical operators whose operands are both followed.
const LOGICAL_OPERATORS: &[&str] = &["&&", "||", "??"];

/// Extracts class-name spans from one attribute value.
pub struct SpanExtractor<'a> {
    source: &'a str,
    joining_functions: &'a FxHashSet<String>,
}

impl<'a> SpanExtractor<'a> {
    pub fn new(source: &'a str, joining_functions: &'a FxHashSet<String>) -> Self {
        Self {
            source,
            joining_functions,
        }
    }

    /// Build the span tree for `value`, the value node of a JSX attribute.
    pub fn extract(&self, value: Node<'_>) -> ExtractionArena {
        let mut arena = ExtractionArena::new();
        let roots = self.visit(value, None, &mut arena);
        arena.set_roots(roots.into_vec());
        arena
    }

    /// Returns the spans produced directly at this level, parented to `parent`.
    fn visit(
        &self,
        node: Node<'_>,
        parent: Option<SpanId>,
        arena: &mut ExtractionArena,
    ) -> SmallVec<[SpanId; 4]> {
        match node.kind() {
            "string" => self.literal(node, parent, arena).into_iter().collect(),
            "template_string" => {
                if has_child_kind(node, "template_substitution") {
                    self.container(node, parent, arena, |this, id, arena| {
                        this.template_chunks(node, id, arena)
                    })
                    .into_iter()
                    .collect()
                } else {
                    self.literal(node, parent, arena).into_iter().collect()
                }
            }
            "jsx_expression" | "parenthesized_expression" => {
                self.visit_named_children(node, parent, arena)
            }
            "array" => self
                .container(node, parent, arena, |this, id, arena| {
                    this.visit_named_children(node, Some(id), arena)
                })
                .into_iter()
                .collect(),
            "call_expression" => {
                if !self.is_joining_call(node) {
                    return SmallVec::new();
                }
                let Some(arguments) = node.child_by_field_name("arguments") else {
                    return SmallVec::new();
                };
                self.container(node, parent, arena, |this, id, arena| {
                    this.visit_named_children(arguments, Some(id), arena)
                })
                .into_iter()
                .collect()
            }
            "ternary_expression" => self
                .container(node, parent, arena, |this, id, arena| {
                    let mut out = SmallVec::new();
                    for field in ["consequence", "alternative"] {
                        if let Some(branch) = node.child_by_field_name(field) {
                            out.extend(this.visit(branch, Some(id), arena));
                        }
                    }
                    out
                })
                .into_iter()
                .collect(),
            "binary_expression" => {
                let logical = node
                    .child_by_field_name("operator")
                    .is_some_and(|op| LOGICAL_OPERATORS.contains(&op.kind()));
                if !logical {
                    return SmallVec::new();
                }
                self.container(node, parent, arena, |this, id, arena| {
                    let mut out = SmallVec::new();
                    for field in ["left", "right"] {
                        if let Some(operand) = node.child_by_field_name(field) {
                            out.extend(this.visit(operand, Some(id), arena));
                        }
                    }
                    out
                })
                .into_iter()
                .collect()
            }
            "object" => self
                .container(node, parent, arena, |this, id, arena| {
                    let mut out = SmallVec::new();
                    let mut cursor = node.walk();
                    for pair in node.named_children(&mut cursor) {
                        if pair.kind() != "pair" {
                            continue;
                        }
                        if let Some(key) = pair.child_by_field_name("key") {
                            if key.kind() == "string" {
                                out.extend(this.visit(key, Some(id), arena));
                            }
                        }
                    }
                    out
                })
                .into_iter()
                .collect(),
            _ => SmallVec::new(),
        }
    }

    fn visit_named_children(
        &self,
        node: Node<'_>,
        parent: Option<SpanId>,
        arena: &mut ExtractionArena,
    ) -> SmallVec<[SpanId; 4]> {
        let mut out = SmallVec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            out.extend(self.visit(child, parent, arena));
        }
        out
    }

    /// Allocate a container, fill it, and drop it again if nothing nested was found.
    fn container<F>(
        &self,
        node: Node<'_>,
        parent: Option<SpanId>,
        arena: &mut ExtractionArena,
        fill: F,
    ) -> Option<SpanId>
    where
        F: FnOnce(&Self, SpanId, &mut ExtractionArena) -> SmallVec<[SpanId; 4]>,
    {
        let id = arena.push(ClassNameExtraction {
            start: node.start_byte(),
            end: node.end_byte(),
            value: String::new(),
            node: NodeHandle::of(&node),
            quote: None,
            parent,
            children: SmallVec::new(),
        });
        let children = fill(self, id, arena);
        if children.is_empty() {
            arena.discard_last(id);
            return None;
        }
        arena.set_children(id, children);
        Some(id)
    }

    /// A quoted string or plain template literal. Skipped when it carries escapes.
    fn literal(
        &self,
        node: Node<'_>,
        parent: Option<SpanId>,
        arena: &mut ExtractionArena,
    ) -> Option<SpanId> {
        if ESCAPE_KINDS.iter().any(|kind| has_child_kind(node, kind)) {
            return None;
        }
        let (start, end) = (node.start_byte(), node.end_byte());
        let raw = self.source.get(start..end)?;
        let quote = raw.chars().next()?;
        if raw.len() < 2 || !matches!(quote, '"' | '\'' | '`') || !raw.ends_with(quote) {
            return None;
        }
        let value = &raw[1..raw.len() - 1];
        Some(arena.push(ClassNameExtraction {
            start,
            end,
            value: value.to_string(),
            node: NodeHandle::of(&node),
            quote: Some(quote),
            parent,
            children: SmallVec::new(),
        }))
    }

    /// Literal chunks and substitution expressions of a template with substitutions.
    fn template_chunks(
        &self,
        template: Node<'_>,
        container: SpanId,
        arena: &mut ExtractionArena,
    ) -> SmallVec<[SpanId; 4]> {
        let mut out = SmallVec::new();
        let mut cursor = template.walk();
        let children: Vec<Node<'_>> = template.children(&mut cursor).collect();

        for (i, child) in children.iter().enumerate() {
            match child.kind() {
                "string_fragment" => {
                    // An edge that touches anything but the backtick may be half a token.
                    let open_left = i == 0 || children[i - 1].kind() == "`";
                    let open_right = children.get(i + 1).map_or(true, |n| n.kind() == "`");
                    if let Some(id) = self.chunk(*child, open_left, open_right, container, arena) {
                        out.push(id);
                    }
                }
                "template_substitution" => {
                    out.extend(self.visit_named_children(*child, Some(container), arena));
                }
                _ => {}
            }
        }
        out
    }

    fn chunk(
        &self,
        fragment: Node<'_>,
        open_left: bool,
        open_right: bool,
        parent: SpanId,
        arena: &mut ExtractionArena,
    ) -> Option<SpanId> {
        let (mut start, mut end) = (fragment.start_byte(), fragment.end_byte());
        let text = self.source.get(start..end)?;

        if !open_left && !text.starts_with(|c: char| c.is_ascii_whitespace()) {
            let cut = text.find(|c: char| c.is_ascii_whitespace())?;
            start += cut;
        }
        if !open_right && !text.ends_with(|c: char| c.is_ascii_whitespace()) {
            let cut = text.rfind(|c: char| c.is_ascii_whitespace())?;
            end = fragment.start_byte() + cut + 1;
        }
        if start >= end {
            return None;
        }

        let value = self.source.get(start..end)?;
        if value.trim_ascii().is_empty() {
            return None;
        }
        Some(arena.push(ClassNameExtraction {
            start,
            end,
            value: value.to_string(),
            node: NodeHandle::of(&fragment),
            quote: None,
            parent: Some(parent),
            children: SmallVec::new(),
        }))
    }

    fn is_joining_call(&self, call: Node<'_>) -> bool {
        call.child_by_field_name("function")
            .filter(|f| f.kind() == "identifier")
            .and_then(|f| self.source.get(f.start_byte()..f.end_byte()))
            .is_some_and(|name| self.joining_functions.contains(name))
    }
}

fn has_child_kind(node: Node<'_>, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|c| c.kind() == kind);
    found
}
