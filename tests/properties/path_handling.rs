//! Property tests for descriptor path normalization.

use proptest::prelude::*;

use st2make::paths::{
    normalize_source_location, normalize_tool_path, strip_parent_prefix,
    strip_parent_prefix_up_to, COMPILER_STRIP_DEPTH,
};

fn relative_suffix() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9._-]{0,11}").unwrap();
    proptest::collection::vec(segment, 1..=4)
        .prop_map(|segments| segments.join("/"))
        .prop_filter("no leading parent segment", |s| !s.starts_with(".."))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(s in "(?s).{0,256}") {
        let _ = normalize_source_location(&s);
        let _ = normalize_tool_path(&s, 3);
        let _ = strip_parent_prefix(&s, 2);
    }

    /// PROPERTY: `PARENT-N-PROJECT_LOC/x` normalizes to `x` for N <= 3.
    #[cfg(unix)]
    #[test]
    fn property_placeholder_round_trip(n in 1usize..=3, suffix in relative_suffix()) {
        let location = format!("PARENT-{n}-PROJECT_LOC/{suffix}");
        prop_assert_eq!(normalize_source_location(&location), suffix);
    }

    /// PROPERTY: Exact stripping leaves shallower paths untouched.
    #[test]
    fn property_exact_strip_requires_full_depth(depth in 1usize..=4, suffix in relative_suffix()) {
        let shallow = format!("{}{}", "../".repeat(depth - 1), suffix);
        let deep = format!("{}{}", "../".repeat(depth), suffix);

        prop_assert_eq!(strip_parent_prefix(&shallow, depth), shallow.as_str());
        prop_assert_eq!(strip_parent_prefix(&deep, depth), suffix.as_str());
    }

    /// PROPERTY: Up-to stripping removes at most `depth` segments.
    #[test]
    fn property_up_to_strip_is_bounded(extra in 0usize..=3, suffix in relative_suffix()) {
        let path = format!("{}{}", "../".repeat(COMPILER_STRIP_DEPTH + extra), suffix);
        let stripped = strip_parent_prefix_up_to(&path, COMPILER_STRIP_DEPTH);
        let expected = format!("{}{}", "../".repeat(extra), suffix);
        prop_assert_eq!(stripped, expected.as_str());
    }
}
