//! Arena-backed span tree produced per attribute visit.

use serde::Serialize;
use smallvec::SmallVec;

/// Index of a span inside its `ExtractionArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SpanId(pub usize);

/// Opaque handle to the owning syntax node (tree-sitter node id).
/// Never dereferenced by the pipeline; only used to correlate with the host tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeHandle(pub usize);

impl NodeHandle {
    pub fn of(node: &tree_sitter::Node<'_>) -> Self {
        Self(node.id())
    }
}

/// One extractable string span of an attribute value expression.
#[derive(Debug, Clone, Serialize)]
pub struct ClassNameExtraction {
    /// Byte offset of the span start (quote included for literals).
    pub start: usize,
    /// Byte offset one past the span end.
    pub end: usize,
    /// Literal class text. Empty for containers.
    pub value: String,
    pub node: NodeHandle,
    /// Quote character wrapping `value` inside `[start, end)`, if any.
    pub quote: Option<char>,
    pub parent: Option<SpanId>,
    pub children: SmallVec<[SpanId; 4]>,
}

impl ClassNameExtraction {
    /// Containers bracket nested spans and carry no class text themselves.
    pub fn is_container(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Replacement text for the whole span given new class text.
    pub fn wrap(&self, class_text: &str) -> String {
        match self.quote {
            Some(q) => format!("{q}{class_text}{q}"),
            None => class_text.to_string(),
        }
    }
}

/// All spans found in one attribute. Dropped once the attribute is processed.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ExtractionArena {
    spans: Vec<ClassNameExtraction>,
    roots: Vec<SpanId>,
}

impl ExtractionArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: SpanId) -> &ClassNameExtraction {
        &self.spans[id.0]
    }

    pub fn roots(&self) -> &[SpanId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Leaf spans in source order.
    pub fn leaves(&self) -> Vec<SpanId> {
        let mut out = Vec::new();
        for root in &self.roots {
            self.collect_leaves(*root, &mut out);
        }
        out
    }

    fn collect_leaves(&self, id: SpanId, out: &mut Vec<SpanId>) {
        let span = self.get(id);
        if span.is_container() {
            for child in &span.children {
                self.collect_leaves(*child, out);
            }
        } else {
            out.push(id);
        }
    }

    pub(crate) fn push(&mut self, span: ClassNameExtraction) -> SpanId {
        let id = SpanId(self.spans.len());
        self.spans.push(span);
        id
    }

    /// Drop the most recently pushed span (an empty container).
    pub(crate) fn discard_last(&mut self, id: SpanId) {
        debug_assert_eq!(id.0 + 1, self.spans.len());
        self.spans.truncate(id.0);
    }

    pub(crate) fn set_children(&mut self, id: SpanId, children: SmallVec<[SpanId; 4]>) {
        self.spans[id.0].children = children;
    }

    pub(crate) fn set_roots(&mut self, roots: Vec<SpanId>) {
        self.roots = roots;
    }
}
