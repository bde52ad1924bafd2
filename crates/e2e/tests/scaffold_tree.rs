//! Shape and determinism of the scaffolder's output.

mod common;

use std::collections::BTreeMap;
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::TempDir;
use walkdir::WalkDir;

use atoll_e2e::tree::{self, Entry};
use atoll_e2e::{process, workspace};

async fn scaffold(target: &Path, styled: bool) {
    let mut args = vec![target.to_string_lossy().into_owned()];
    if styled {
        args.push("--twind".to_string());
    }
    let result = process::run(workspace::init_bin(), args).await.unwrap();
    result.expect_code("atoll-init", 0).unwrap();
}

/// Relative path -> content digest (directories marked as such), for
/// structural comparison of two scaffolds.
fn digests(root: &Path) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.unwrap();
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .into_owned();
        let digest = if entry.file_type().is_dir() {
            "<dir>".to_string()
        } else {
            let bytes = std::fs::read(entry.path()).unwrap();
            hex::encode(Sha256::digest(&bytes))
        };
        map.insert(rel, digest);
    }
    map
}

#[tokio::test]
async fn plain_scaffold_matches_the_expected_tree() {
    common::init_logging();
    if !workspace::ensure_binaries() {
        eprintln!("Skipping: cargo not available to build the workspace binaries");
        return;
    }

    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("demo");
    scaffold(&target, false).await;

    tree::verify(&common::expected_tree(false), Some(&target)).unwrap();
    assert!(!target.join("utils/twind.ts").exists());
}

#[tokio::test]
async fn styled_scaffold_adds_the_styling_util() {
    common::init_logging();
    if !workspace::ensure_binaries() {
        eprintln!("Skipping: cargo not available to build the workspace binaries");
        return;
    }

    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("demo");
    scaffold(&target, true).await;

    tree::verify(&common::expected_tree(true), Some(&target)).unwrap();
}

#[tokio::test]
async fn scaffolds_with_the_same_flag_are_identical() {
    common::init_logging();
    if !workspace::ensure_binaries() {
        eprintln!("Skipping: cargo not available to build the workspace binaries");
        return;
    }

    let tmp = TempDir::new().unwrap();
    let first = tmp.path().join("one");
    let second = tmp.path().join("two");
    scaffold(&first, true).await;
    scaffold(&second, true).await;

    assert_eq!(digests(&first), digests(&second));
}

#[test]
fn summary_entries_are_annotation_not_paths() {
    // a summaries-only tree resolves nothing, even under a missing base
    let entries = vec![Entry::Summary { dirs: 3, files: 8 }];
    tree::verify(&entries, Some(Path::new("/definitely/not/here"))).unwrap();
}
