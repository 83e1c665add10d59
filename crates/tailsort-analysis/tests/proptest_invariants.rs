//! Property-based tests for class-list invariants.
//!
//! - Tokenizer round-trip and whitespace-run preservation
//! - Inline patching keeps the original whitespace layout
//! - Identifier extraction never invents text
//! - Sorting is idempotent for the built-in ordering
//! - Fixes for one attribute never overlap, whatever the value's nesting

use std::path::Path;
use std::sync::Arc;

use proptest::prelude::*;

use tailsort_analysis::classes::{
    build_inline_class_name, outsource_identifier_from_class_name, split_class_name,
};
use tailsort_analysis::oracle::{sort_class_list, OrderContext, UtilityOrder, UtilitySettings};
use tailsort_analysis::ClassOrderEngine;
use tailsort_core::config::RuleOptions;

const CLASS: &str = "(flex|p-[0-9]|m-[0-9]|z-[0-9]{2}|hover:p-[0-9]|md:flex|text-red-500|items-center|card|[a-z]{2,5})";

/// A quoted class list, sometimes carrying an extraction marker.
fn class_literal() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(CLASS, 1..4),
        prop::option::of("(box|card|badge)[0-9]?"),
    )
        .prop_map(|(mut tokens, name)| {
            if let Some(name) = name {
                tokens.push(format!("id:{name}"));
            }
            format!("\"{}\"", tokens.join(" "))
        })
}

/// Attribute values mixing arrays, joining calls, conditionals, logical
/// operators and templates around class literals.
fn class_value() -> impl Strategy<Value = String> {
    class_literal().prop_recursive(3, 24, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..3).prop_map(|xs| format!("[{}]", xs.join(", "))),
            prop::collection::vec(inner.clone(), 1..3).prop_map(|xs| format!("cn({})", xs.join(", "))),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("(on ? {a} : {b})")),
            inner.clone().prop_map(|a| format!("(on && {a})")),
            (CLASS, inner.clone()).prop_map(|(c, a)| format!("`{c} flex ${{{a}}}`")),
        ]
    })
}

proptest! {
    /// Joining tokens and whitespace runs reproduces the input exactly.
    #[test]
    fn prop_split_round_trip(s in "[ \t\na-z0-9:-]{0,64}") {
        match split_class_name(&s) {
            Some(split) => {
                prop_assert_eq!(split.whitespaces.len(), split.classes.len() + 1);
                prop_assert_eq!(split.join(), s);
            }
            None => prop_assert!(s.trim().is_empty()),
        }
    }

    /// Every class is non-empty and whitespace-free; inner runs are non-empty.
    #[test]
    fn prop_split_shapes(s in "[ \ta-z-]{1,64}") {
        if let Some(split) = split_class_name(&s) {
            for class in &split.classes {
                prop_assert!(!class.is_empty());
                prop_assert!(!class.chars().any(char::is_whitespace));
            }
            let inner = &split.whitespaces[1..split.whitespaces.len() - 1];
            for run in inner {
                prop_assert!(!run.is_empty());
            }
        }
    }

    /// Rebuilding with a permutation keeps every whitespace run in place.
    #[test]
    fn prop_inline_preserves_whitespace(classes in prop::collection::vec(CLASS, 1..8), gap in "[ \t]{1,3}") {
        let s = classes.join(gap.as_str());
        let split = split_class_name(&s).unwrap();
        let mut reversed = split.classes.clone();
        reversed.reverse();
        let rebuilt = build_inline_class_name(&reversed, &split.whitespaces);
        prop_assert_eq!(rebuilt.len(), s.len());
        let again = split_class_name(&rebuilt).unwrap();
        prop_assert_eq!(again.whitespaces, split.whitespaces);
        prop_assert_eq!(again.classes, reversed);
    }

    /// Without a marker token the input passes through untouched.
    #[test]
    fn prop_no_marker_is_identity(s in "[ a-z0-9-]{0,48}") {
        let request = outsource_identifier_from_class_name(&s, "id:");
        prop_assert!(request.identifier.is_none());
        prop_assert_eq!(request.class_name, s);
    }

    /// Removing a marker leaves the other classes in order.
    #[test]
    fn prop_marker_removal_keeps_classes(classes in prop::collection::vec("[a-z]{1,6}", 0..6), at in 0usize..6, name in "[a-z_][a-z0-9_]{0,8}") {
        let mut tokens = classes.clone();
        let at = at.min(tokens.len());
        tokens.insert(at, format!("id:{name}"));
        let request = outsource_identifier_from_class_name(&tokens.join(" "), "id:");
        prop_assert_eq!(request.identifier.as_deref(), Some(name.as_str()));
        let remaining: Vec<&str> = request.class_name.split_whitespace().collect();
        let expected: Vec<&str> = classes.iter().map(String::as_str).collect();
        prop_assert_eq!(remaining, expected);
    }

    /// Sorting with the built-in ordering is idempotent and a permutation.
    #[test]
    fn prop_builtin_sort_idempotent(classes in prop::collection::vec(CLASS, 0..10)) {
        let ctx = OrderContext::new(
            "tailwind.config.js",
            Arc::new(UtilityOrder::new(UtilitySettings::default())),
        );
        let once = sort_class_list(&classes, &ctx);
        let twice = sort_class_list(&once, &ctx);
        prop_assert_eq!(&once, &twice);
        let mut a = once.clone();
        let mut b = classes.clone();
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }

    /// Edits collected from one file pass are pairwise disjoint and applying
    /// them all leaves nothing to report.
    #[test]
    fn prop_compound_value_edits_disjoint(value in class_value()) {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("tailwind.config.js"), "module.exports = {}\n").unwrap();
        let mut engine = ClassOrderEngine::new(dir.path(), &RuleOptions::default()).unwrap();

        let source = format!("const A = ({{ on }}) => <div className={{{value}}} />;\n");
        let report = engine.analyze_source(Path::new("A.tsx"), &source).unwrap();
        prop_assert_eq!(report.parse_errors, 0);

        let mut ranges: Vec<(usize, usize)> = report
            .diagnostics
            .iter()
            .flat_map(|d| d.fix.iter().flat_map(|f| f.edits.iter()))
            .map(|e| (e.start, e.end))
            .collect();
        ranges.sort();
        for pair in ranges.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].0, "overlapping edits {:?} in {}", pair, value);
        }

        let fixed = report.apply_fixes(&source);
        let again = engine.analyze_source(Path::new("A.tsx"), &fixed).unwrap();
        prop_assert!(again.is_clean(), "{:?} after fixing {}", again.diagnostics, value);
    }
}
