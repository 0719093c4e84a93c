//! Property tests for registration and resolution invariants.

use proptest::prelude::*;

use menucli::{Entry, MenuError, MenuSettings, MenuTree};

fn tree() -> MenuTree<Vec<u8>> {
    MenuTree::with_writer(MenuSettings::default(), Vec::new())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a sibling whose selector differs only in case is a duplicate.
    #[test]
    fn property_case_variants_collide(sel in "[a-k]{1,4}") {
        let mut tree = tree();
        let parent = tree.register(Entry::new("1", "Parent")).unwrap();
        tree.register(Entry::new(sel.clone(), "first").parent(parent)).unwrap();

        let err = tree
            .register(Entry::new(sel.to_uppercase(), "second").parent(parent))
            .unwrap_err();
        let is_duplicate = matches!(err, MenuError::DuplicateSelector { .. });
        prop_assert!(is_duplicate);
    }

    /// PROPERTY: resolution never changes the position and never sees other levels.
    #[test]
    fn property_children_are_hidden_at_root(sel in "[a-k]{1,4}") {
        let mut tree = tree();
        let parent = tree.register(Entry::new("1", "Parent")).unwrap();
        tree.register(Entry::new(format!("{sel}9"), "child").parent(parent)).unwrap();

        prop_assert_eq!(tree.resolve(&format!("{sel}9")), None);
        let response = tree.interpret(&format!("{sel}9"), true).unwrap();
        prop_assert!(response.ok && response.continue_session);
        prop_assert_eq!(tree.current_position(), None);
    }

    /// PROPERTY: quit ends the session at any depth.
    #[test]
    fn property_quit_from_any_depth(depth in 0usize..6) {
        let mut tree = tree();
        let mut parent = None;
        for _ in 0..=depth {
            let entry = match parent {
                Some(p) => Entry::new("1", "level").parent(p),
                None => Entry::new("1", "level"),
            };
            parent = Some(tree.register(entry).unwrap());
        }
        for _ in 0..depth {
            tree.interpret("1", false).unwrap();
        }

        let response = tree.interpret("Q", false).unwrap();
        prop_assert!(!response.continue_session);
    }
}
