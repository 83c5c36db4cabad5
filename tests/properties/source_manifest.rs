//! Property tests for source classification and ordering.

use proptest::prelude::*;

use st2make::SourceManifest;

fn source_path() -> impl Strategy<Value = String> {
    let dir = proptest::string::string_regex("[A-Za-z0-9_]{1,8}").unwrap();
    let stem = proptest::string::string_regex("[A-Za-z0-9_]{1,12}").unwrap();
    let ext = prop_oneof![Just("c"), Just("s"), Just("a")];
    (proptest::collection::vec(dir, 0..=3), stem, ext).prop_map(|(dirs, stem, ext)| {
        let mut parts = dirs;
        parts.push(format!("{stem}.{ext}"));
        parts.join("/")
    })
}

fn is_strictly_sorted(list: &[String]) -> bool {
    list.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every recognized path lands in exactly one role list, sorted
    /// and without duplicates.
    #[test]
    fn property_each_path_in_one_sorted_list(
        paths in proptest::collection::vec(source_path(), 0..=24)
    ) {
        let manifest = SourceManifest::from_paths(paths.clone()).unwrap();

        prop_assert!(is_strictly_sorted(&manifest.c_sources));
        prop_assert!(is_strictly_sorted(&manifest.asm_sources));
        prop_assert!(is_strictly_sorted(&manifest.libraries));

        for path in &paths {
            let hits = [&manifest.c_sources, &manifest.asm_sources, &manifest.libraries]
                .iter()
                .filter(|list| list.contains(path))
                .count();
            prop_assert_eq!(hits, 1, "{} listed {} times", path, hits);
        }
    }

    /// PROPERTY: The manifest does not depend on input order.
    #[test]
    fn property_order_independent(
        paths in proptest::collection::vec(source_path(), 0..=24)
    ) {
        let mut reversed = paths.clone();
        reversed.reverse();

        prop_assert_eq!(
            SourceManifest::from_paths(paths).unwrap(),
            SourceManifest::from_paths(reversed).unwrap()
        );
    }

    /// PROPERTY: An unknown extension anywhere fails the whole manifest.
    #[test]
    fn property_unknown_extension_is_error(
        paths in proptest::collection::vec(source_path(), 0..=8),
        stem in "[a-z]{1,8}",
        ext in "(cpp|h|txt|S|o|ld)",
    ) {
        let mut all = paths;
        all.push(format!("{stem}.{ext}"));

        prop_assert!(SourceManifest::from_paths(all).is_err());
    }
}
