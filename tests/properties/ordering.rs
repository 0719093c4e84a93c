//! Property tests for selector ordering.

use std::cmp::Ordering;

use proptest::prelude::*;

use menucli::menu::selector::{compare, numeric};
use menucli::{Entry, MenuSettings, MenuTree};

fn selector_string() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..500).prop_map(|n| n.to_string()),
        proptest::string::string_regex("[A-Za-z]{1,3}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after sorting, every integer selector precedes every other one.
    #[test]
    fn property_integers_precede_words(mut selectors in proptest::collection::vec(selector_string(), 0..20)) {
        selectors.sort_by(|a, b| compare(a, b));
        let first_word = selectors.iter().position(|s| numeric(s).is_none()).unwrap_or(selectors.len());
        prop_assert!(selectors[first_word..].iter().all(|s| numeric(s).is_none()));
    }

    /// PROPERTY: the comparison is antisymmetric.
    #[test]
    fn property_compare_is_antisymmetric(a in selector_string(), b in selector_string()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    /// PROPERTY: integer selectors come out in numeric order.
    #[test]
    fn property_integers_sort_numerically(a in 0i32..10_000, b in 0i32..10_000) {
        let ord = compare(&a.to_string(), &b.to_string());
        prop_assert_eq!(ord, a.cmp(&b));
    }

    /// PROPERTY: the visible set at the root is sorted whatever the registration order.
    #[test]
    fn property_visible_entries_are_sorted(
        selectors in proptest::collection::btree_set("[0-9]{1,2}|[C-L]", 1..12)
    ) {
        let mut tree = MenuTree::with_writer(MenuSettings::default(), Vec::new());
        for s in selectors.iter().rev() {
            tree.register(Entry::new(s.clone(), "item")).unwrap();
        }

        let visible: Vec<String> = tree
            .visible_entries()
            .into_iter()
            .map(|id| tree.entry(id).unwrap().selector().to_string())
            .collect();
        for pair in visible.windows(2) {
            prop_assert_ne!(compare(&pair[0], &pair[1]), Ordering::Greater);
        }
    }
}
