//! Property tests for target part resolution.

use proptest::prelude::*;

use st2make::target::{TargetResolver, TargetRule, BUILTIN_TARGETS};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A part resolves to the flags of the first table entry that
    /// matches it, and to an error (never empty flags) when none does.
    #[test]
    fn property_first_match_or_error(part in "(STM32|Generic )?[A-Z0-9 -]{0,16}") {
        let resolver = TargetResolver::builtin();
        let first = resolver.entries().iter().find(|e| e.is_match(&part));

        match (resolver.resolve(&part), first) {
            (Ok(flags), Some(entry)) => {
                prop_assert_eq!(flags, entry.flags());
                prop_assert!(!flags.is_empty());
            }
            (Err(_), None) => {}
            (got, want) => prop_assert!(false, "resolve={:?} first={:?}", got.is_ok(), want.map(|e| e.pattern())),
        }
    }

    /// PROPERTY: Every built-in family prefix resolves for any suffix.
    #[test]
    fn property_family_prefix_resolves(
        family in "STM32[FL][0-4]",
        suffix in "[0-9A-Z]{0,8}",
    ) {
        let part = format!("{family}{suffix}");
        prop_assert!(TargetResolver::builtin().resolve(&part).is_ok());
    }

    /// PROPERTY: A user rule matching the part always takes precedence.
    #[test]
    fn property_user_rule_precedes_builtin(suffix in "[0-9A-Z]{0,8}") {
        let rules = vec![TargetRule {
            pattern: "STM32".to_string(),
            flags: "-mthumb -mcpu=custom".to_string(),
        }];
        let (resolver, invalid) = TargetResolver::with_rules(&rules);

        prop_assert!(invalid.is_empty());
        prop_assert_eq!(
            resolver.resolve(&format!("STM32F4{suffix}")).unwrap(),
            "-mthumb -mcpu=custom"
        );
        prop_assert_eq!(resolver.entries().len(), BUILTIN_TARGETS.len() + 1);
    }
}
