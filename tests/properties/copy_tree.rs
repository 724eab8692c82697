//! Property tests for the recursive copy.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use proptest::prelude::*;

use assetmini::{copy_tree, LocalFs};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("\\.?[a-z0-9_-]{1,8}")
        .unwrap()
        .prop_filter("not a dot entry", |s| s != "." && s != "..")
}

/// Relative file paths, one to three segments deep, with their contents
fn tree() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    let path = proptest::collection::vec(segment(), 1..=3).prop_map(|parts| parts.join("/"));
    let content = proptest::collection::vec(any::<u8>(), 0..256);
    proptest::collection::btree_map(path, content, 0..12)
}

/// Drop paths that would need a file and a directory at the same location
fn without_conflicts(files: BTreeMap<String, Vec<u8>>) -> BTreeMap<String, Vec<u8>> {
    let mut kept: BTreeMap<String, Vec<u8>> = BTreeMap::new();
    for (path, content) in files {
        let clashes = kept.keys().any(|existing| {
            existing.starts_with(&format!("{}/", path)) || path.starts_with(&format!("{}/", existing))
        });
        if !clashes {
            kept.insert(path, content);
        }
    }
    kept
}

fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<String, Vec<u8>>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/");
                out.insert(rel, fs::read(&path).unwrap());
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every file in the source appears in the destination with identical bytes.
    #[test]
    fn property_copy_is_byte_identical(files in tree().prop_map(without_conflicts)) {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("skel");
        let dst = dir.path().join("assets");
        fs::create_dir_all(&src).unwrap();
        for (rel, content) in &files {
            let path = src.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
        }

        let stats = copy_tree(&LocalFs::new(), &src, &dst).unwrap();

        prop_assert_eq!(stats.files, files.len());
        prop_assert_eq!(snapshot(&dst), files);
    }
}
