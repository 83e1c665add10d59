//! The class-order rule: one visit per class-like attribute.
//!
//! For every leaf span the rule either reports an `invalid-order`
//! diagnostic (class list not in canonical order) or, when the literal
//! carries an extraction marker, an `invalid-inline` diagnostic whose fix
//! moves the list into a top-level constant.

use rustc_hash::FxHashSet;
use tailsort_core::config::RuleOptions;
use tree_sitter::Node;

use super::registry::ExtractionRegistry;
use super::types::{Diagnostic, DiagnosticKind, Fix, Severity, TextEdit};
use crate::classes::{
    build_identifier_reference, build_inline_class_name, build_outsourced_class_name,
    outsource_identifier_from_class_name, split_class_name,
};
use crate::extraction::{ClassNameExtraction, SpanExtractor};
use crate::oracle::{sort_class_list, OracleSession, OrderContext};

pub const RULE_ID: &str = "tailsort/class-order";

/// Where extracted constants are declared: right after the last top-level
/// statement, indented to that statement's column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertionPoint {
    pub offset: usize,
    pub indent_column: usize,
}

impl InsertionPoint {
    /// Insertion point for a program node. Falls back to the end of the
    /// source when the program has no statements.
    pub fn after_last_statement(program: Node<'_>, source_len: usize) -> Self {
        let mut cursor = program.walk();
        let last = program
            .named_children(&mut cursor)
            .filter(|n| n.kind() != "comment")
            .last();
        match last {
            Some(stmt) => Self {
                offset: stmt.end_byte(),
                indent_column: stmt.start_position().column,
            },
            None => Self {
                offset: source_len,
                indent_column: 0,
            },
        }
    }
}

/// A `jsx_attribute` with its name resolved.
#[derive(Debug, Clone)]
pub struct AttributeNode<'tree> {
    pub name: String,
    pub node: Node<'tree>,
    /// `None` for valueless attributes (`<input disabled />`).
    pub value: Option<Node<'tree>>,
}

impl<'tree> AttributeNode<'tree> {
    pub fn from_node(node: Node<'tree>, source: &str) -> Option<Self> {
        if node.kind() != "jsx_attribute" {
            return None;
        }
        let mut cursor = node.walk();
        let mut named = node.named_children(&mut cursor);
        let name_node = named.next()?;
        let value = named.next();
        let name = source.get(name_node.byte_range())?.to_string();
        Some(Self { name, node, value })
    }
}

/// Per-file state handed to the rule for each attribute.
pub struct RuleContext<'a> {
    pub file: &'a str,
    pub source: &'a str,
    /// Shared across every file of the analysis.
    pub session: &'a mut OracleSession,
    /// Scoped to this file pass.
    pub registry: &'a mut ExtractionRegistry,
    pub insertion: InsertionPoint,
}

/// Canonical class order and class-list extraction for JSX attributes.
#[derive(Debug, Clone)]
pub struct ClassOrderRule {
    config_path: Option<String>,
    joining_functions: FxHashSet<String>,
    identifier_marker: String,
}

impl ClassOrderRule {
    pub fn new(options: &RuleOptions) -> Self {
        Self {
            config_path: options.config_path.clone(),
            joining_functions: options.effective_joining_functions().into_iter().collect(),
            identifier_marker: options.effective_identifier_marker().to_string(),
        }
    }

    /// Visit one matched attribute and report every finding in it.
    pub fn check_attribute(
        &self,
        attribute: &AttributeNode<'_>,
        ctx: &mut RuleContext<'_>,
    ) -> Vec<Diagnostic> {
        let Some(value) = attribute.value else {
            return Vec::new();
        };
        let arena = SpanExtractor::new(ctx.source, &self.joining_functions).extract(value);
        if arena.is_empty() {
            return Vec::new();
        }

        let mut diagnostics = Vec::new();
        for id in arena.leaves() {
            if let Some(d) = self.check_span(attribute, arena.get(id), ctx) {
                diagnostics.push(d);
            }
        }
        diagnostics
    }

    fn check_span(
        &self,
        attribute: &AttributeNode<'_>,
        span: &ClassNameExtraction,
        ctx: &mut RuleContext<'_>,
    ) -> Option<Diagnostic> {
        let request = outsource_identifier_from_class_name(&span.value, &self.identifier_marker);
        let split = split_class_name(&request.class_name)?;
        if split.classes.is_empty() {
            return None;
        }

        match request.identifier {
            None => {
                let order = self.order_context(ctx)?;
                let sorted = sort_class_list(&split.classes, &order);
                if sorted == split.classes {
                    return None;
                }
                let inline = build_inline_class_name(&sorted, &split.whitespaces);
                let fix = Fix {
                    description: "Sort classes".to_string(),
                    edits: vec![TextEdit::replace(span.start, span.end, span.wrap(&inline))],
                };
                Some(self.diagnostic(
                    DiagnosticKind::InvalidOrder,
                    format!("Classes are not in canonical order, expected \"{}\"", sorted.join(" ")),
                    (span.start, span.end),
                    fix,
                    ctx,
                ))
            }
            Some(identifier) => {
                if !span.is_root() {
                    tracing::debug!(
                        file = ctx.file,
                        identifier = %identifier,
                        offset = span.start,
                        "extraction marker inside a nested expression is not supported; span skipped"
                    );
                    return None;
                }
                let classes = match self.order_context(ctx) {
                    Some(order) => sort_class_list(&split.classes, &order),
                    None => split.classes,
                };
                let declaration =
                    build_outsourced_class_name(&classes, &identifier, ctx.insertion.indent_column);
                // A second request for the same name rebinds the registry entry
                // but must not declare the constant twice.
                let rebound = ctx.registry.insert(identifier.clone(), classes).is_some();

                let (start, end) = (attribute.node.start_byte(), attribute.node.end_byte());
                let mut edits = vec![TextEdit::replace(
                    start,
                    end,
                    build_identifier_reference(&attribute.name, &identifier),
                )];
                if rebound {
                    tracing::debug!(
                        file = ctx.file,
                        identifier = %identifier,
                        "identifier already extracted in this file; declaration not repeated"
                    );
                } else {
                    edits.push(TextEdit::insert(ctx.insertion.offset, declaration));
                }
                let fix = Fix {
                    description: format!("Extract classes into `{identifier}`"),
                    edits,
                };
                Some(self.diagnostic(
                    DiagnosticKind::InvalidInline,
                    format!("Inline class list can be extracted into `{identifier}`"),
                    (start, end),
                    fix,
                    ctx,
                ))
            }
        }
    }

    fn order_context(&self, ctx: &mut RuleContext<'_>) -> Option<OrderContext> {
        ctx.session.context(self.config_path.as_deref())
    }

    fn diagnostic(
        &self,
        kind: DiagnosticKind,
        message: String,
        (start, end): (usize, usize),
        fix: Fix,
        ctx: &RuleContext<'_>,
    ) -> Diagnostic {
        let (line, column) = line_column(ctx.source, start);
        Diagnostic {
            rule_id: RULE_ID.to_string(),
            kind,
            severity: Severity::Warning,
            message,
            file: ctx.file.to_string(),
            line,
            column,
            start,
            end,
            fix: Some(fix),
        }
    }
}

/// 1-based line and 0-based byte column of `offset`.
fn line_column(source: &str, offset: usize) -> (u32, u32) {
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let column = before.rfind('\n').map_or(before.len(), |nl| before.len() - nl - 1);
    (line as u32, column as u32)
}
