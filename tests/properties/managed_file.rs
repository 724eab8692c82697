//! Property tests for managed file name validation.

use std::path::{Component, Path};

use proptest::prelude::*;

use assetmini::ManagedFile;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics, and accepted names stay inside the target.
    #[test]
    fn property_accepted_names_stay_inside_target(
        s in "(?s).{0,64}"
    ) {
        if let Ok(file) = ManagedFile::new(&s) {
            let target = Path::new("/project/assets");
            let dest = file.destination_path(target);
            prop_assert!(dest.starts_with(target));
            prop_assert!(dest
                .components()
                .all(|c| !matches!(c, Component::ParentDir)));
        }
    }

    /// PROPERTY: plain relative names are always accepted.
    #[test]
    fn property_plain_relative_names_are_accepted(
        parts in proptest::collection::vec("[A-Za-z0-9._-]{1,12}", 1..=3)
            .prop_filter("no dot segments", |p| p.iter().all(|s| s != "." && s != ".."))
    ) {
        let name = parts.join("/");
        prop_assert!(ManagedFile::new(&name).is_ok(), "rejected {:?}", name);
    }
}
