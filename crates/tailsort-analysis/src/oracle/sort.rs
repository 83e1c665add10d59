//! Stable canonical sort over oracle ranks.

use super::traits::OrderContext;

/// Sort `classes` into canonical order.
///
/// Recognized classes come first in ascending rank, unrecognized ones follow
/// in their original relative order. Equal ranks keep their original order.
pub fn sort_class_list(classes: &[String], context: &OrderContext) -> Vec<String> {
    let refs: Vec<&str> = classes.iter().map(String::as_str).collect();
    let ranks = context.oracle().class_order(&refs);

    let mut indexed: Vec<(usize, Option<u64>)> = (0..classes.len())
        .map(|i| (i, ranks.get(i).copied().flatten()))
        .collect();
    // `sort_by_key` is stable.
    indexed.sort_by_key(|&(_, rank)| match rank {
        Some(r) => (0u8, r),
        None => (1u8, 0),
    });

    indexed.into_iter().map(|(i, _)| classes[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::*;
    use crate::oracle::traits::OrderOracle;

    /// Ranks by position in a fixed list; anything else is unknown.
    struct ListOracle(Vec<&'static str>);

    impl OrderOracle for ListOracle {
        fn class_order(&self, classes: &[&str]) -> Vec<Option<u64>> {
            classes
                .iter()
                .map(|c| self.0.iter().position(|k| k == c).map(|p| p as u64))
                .collect()
        }
    }

    /// Ranks by string length; every class is recognized.
    struct LengthOracle;

    impl OrderOracle for LengthOracle {
        fn class_order(&self, classes: &[&str]) -> Vec<Option<u64>> {
            classes.iter().map(|c| Some(c.len() as u64)).collect()
        }
    }

    fn list_context() -> OrderContext {
        OrderContext::new(
            "tailwind.config.js",
            Arc::new(ListOracle(vec!["flex", "items-center", "z-10", "p-4"])),
        )
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sorts_by_rank() {
        let sorted = sort_class_list(&strings(&["z-10", "items-center", "flex"]), &list_context());
        assert_eq!(sorted, strings(&["flex", "items-center", "z-10"]));
    }

    #[test]
    fn test_unknown_classes_trail_in_original_order() {
        let sorted = sort_class_list(
            &strings(&["custom-b", "p-4", "custom-a", "flex"]),
            &list_context(),
        );
        assert_eq!(sorted, strings(&["flex", "p-4", "custom-b", "custom-a"]));
    }

    #[test]
    fn test_empty_list() {
        assert!(sort_class_list(&[], &list_context()).is_empty());
    }

    proptest! {
        #[test]
        fn prop_sort_is_idempotent(classes in prop::collection::vec("[a-z]{1,6}", 0..12)) {
            let ctx = OrderContext::new("t.js", Arc::new(LengthOracle));
            let once = sort_class_list(&classes, &ctx);
            let twice = sort_class_list(&once, &ctx);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_sort_is_permutation(classes in prop::collection::vec("[a-z]{1,6}", 0..12)) {
            let ctx = OrderContext::new("t.js", Arc::new(LengthOracle));
            let mut sorted = sort_class_list(&classes, &ctx);
            let mut original = classes.clone();
            sorted.sort();
            original.sort();
            prop_assert_eq!(sorted, original);
        }

        #[test]
        fn prop_equal_ranks_keep_order(classes in prop::collection::vec("[a-z]{3}", 0..12)) {
            // Every class has length 3, so all ranks tie.
            let ctx = OrderContext::new("t.js", Arc::new(LengthOracle));
            prop_assert_eq!(sort_class_list(&classes, &ctx), classes);
        }
    }
}
