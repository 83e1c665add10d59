//! Error-tolerant parsing: partial trees still get analyzed outside ERROR nodes.

use tree_sitter::Node;

/// Count ERROR and MISSING nodes in a tree.
pub fn count_errors(root: Node) -> u32 {
    let mut count = 0u32;
    collect_errors(root, &mut count);
    count
}

fn collect_errors(node: Node, count: &mut u32) {
    if node.is_error() || node.is_missing() {
        *count += 1;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_errors(child, count);
    }
}

/// Check if a node is inside an ERROR subtree.
pub fn is_in_error(node: &Node) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.is_error() {
            return true;
        }
        current = parent.parent();
    }
    false
}
