//! Property tests for replacement modes and group keys.

use std::collections::BTreeSet;

use anagram_transform::{GroupKey, LatinMode, ModeRegistry, ModernMode, ReplacementMode, normalize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn latin_removes_its_source_letters(input in ".*") {
        let output = LatinMode.transform(&input);
        prop_assert!(!output.contains(['i', 'u', 'w']));
    }

    #[test]
    fn latin_expands_only_w(input in ".*") {
        let expected = input.chars().count() + input.chars().filter(|c| *c == 'w').count();
        prop_assert_eq!(LatinMode.transform(&input).chars().count(), expected);
    }

    #[test]
    fn modern_removes_its_source_letters(input in ".*") {
        let output = ModernMode.transform(&input);
        prop_assert!(!output.contains(['v', 's', 'c']));
        prop_assert_eq!(output.chars().count(), input.chars().count());
    }

    #[test]
    fn untouched_characters_pass_through(input in "[^iuw]*") {
        prop_assert_eq!(LatinMode.transform(&input), input);
    }

    #[test]
    fn group_key_ignores_order(input in "[a-zA-Z ,.!]{0,40}") {
        let reversed: String = input.chars().rev().collect();
        prop_assert_eq!(GroupKey::of(&input), GroupKey::of(&reversed));
    }

    #[test]
    fn normalized_text_is_ascii_lowercase(input in ".*") {
        prop_assert!(normalize(&input).chars().all(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn registry_lists_builtin_rules() {
    let registry = ModeRegistry::builtin();
    let names: Vec<&str> = registry.iter().map(|mode| mode.name()).collect();
    assert_eq!(names, vec!["LATIN", "MODERN"]);
    assert_eq!(
        registry.get("modern").map(|mode| mode.replacements().len()),
        Some(3)
    );
}

#[test]
fn custom_mode_replaces_builtin_in_place() {
    struct PlainLatin;

    impl ReplacementMode for PlainLatin {
        fn name(&self) -> &'static str {
            "LATIN"
        }

        fn replacements(&self) -> &'static [(char, &'static str)] {
            &[]
        }

        fn transform(&self, input: &str) -> String {
            input.to_string()
        }
    }

    let mut registry = ModeRegistry::builtin();
    registry.register(Box::new(PlainLatin));
    assert_eq!(registry.len(), 2);
    let active = BTreeSet::from([registry.resolve("latin").expect("latin is registered")]);
    assert_eq!(registry.apply(&active, "wuhuw"), "wuhuw");
    assert_eq!(registry.ids().next().map(|id| id.to_string()), Some("LATIN".to_string()));
}
