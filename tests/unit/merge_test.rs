//! Tests for merging one directory tree into another

use dirtidy::TidyError;
use dirtidy::fsops::Exclude;
use dirtidy::ops::merge;

use crate::common::TestTree;

#[test]
fn test_new_files_are_moved_with_structure() {
    let tree = TestTree::new();
    tree.add_file("in/a.txt", "alpha");
    tree.add_file("in/sub/deep/b.txt", "beta");
    tree.add_dir("out");

    let report = merge(&tree.join("in"), &tree.join("out"), &Exclude::default()).unwrap();

    assert_eq!(report.moved.len(), 2);
    assert_eq!(tree.read("out/a.txt"), "alpha");
    assert_eq!(tree.read("out/sub/deep/b.txt"), "beta");
    assert!(!tree.exists("in"), "emptied input tree is pruned");
}

#[test]
fn test_same_size_duplicate_is_deleted() {
    let tree = TestTree::new();
    tree.add_file("in/dup.txt", "12345");
    tree.add_file("out/dup.txt", "abcde");

    let report = merge(&tree.join("in"), &tree.join("out"), &Exclude::default()).unwrap();

    assert_eq!(report.deleted.len(), 1);
    assert!(report.moved.is_empty());
    // Output copy is kept untouched
    assert_eq!(tree.read("out/dup.txt"), "abcde");
    assert!(!tree.exists("in/dup.txt"));
}

#[test]
fn test_different_size_replaces_output() {
    let tree = TestTree::new();
    tree.add_file("in/doc.txt", "a longer version");
    tree.add_file("out/doc.txt", "short");

    let report = merge(&tree.join("in"), &tree.join("out"), &Exclude::default()).unwrap();

    assert_eq!(report.conflicts.len(), 1);
    assert_eq!(tree.read("out/doc.txt"), "a longer version");
    assert!(!tree.exists("in/doc.txt"));
}

#[test]
fn test_directory_in_output_is_not_a_duplicate() {
    let tree = TestTree::new();
    let blocker = tree.add_dir("out/data");
    // Same size as the directory entry, so only the file type tells them apart
    let dir_len = usize::try_from(std::fs::metadata(&blocker).unwrap().len()).unwrap();
    tree.add_bytes("in/data", &vec![b'x'; dir_len]);

    let report = merge(&tree.join("in"), &tree.join("out"), &Exclude::default()).unwrap();

    assert!(report.deleted.is_empty());
    assert!(report.conflicts.is_empty());
    assert_eq!(report.errors.len(), 1);
    assert!(tree.exists("in/data"));
    assert!(tree.join("out/data").is_dir());
}

#[test]
fn test_output_created_when_missing() {
    let tree = TestTree::new();
    tree.add_file("in/x/y.txt", "y");

    let report = merge(&tree.join("in"), &tree.join("new/out"), &Exclude::default()).unwrap();

    assert!(tree.exists("new/out/x/y.txt"));
    assert!(report.created_dirs.iter().any(|d| d.ends_with("x")));
}

#[test]
fn test_excluded_files_stay_behind() {
    let tree = TestTree::new();
    tree.add_file("in/keep.md", "k");
    tree.add_file("in/.DS_Store", "junk");
    tree.add_dir("out");

    let exclude = Exclude::new(&[".DS_Store"]).unwrap();
    let report = merge(&tree.join("in"), &tree.join("out"), &exclude).unwrap();

    assert_eq!(report.moved.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert!(tree.exists("in/.DS_Store"));
    assert!(!tree.exists("out/.DS_Store"));
}

#[test]
fn test_partially_emptied_tree_keeps_nonempty_dirs() {
    let tree = TestTree::new();
    tree.add_file("in/a/one.txt", "1");
    tree.add_file("in/b/excluded.tmp", "t");
    tree.add_dir("out");

    let exclude = Exclude::new(&["*.tmp"]).unwrap();
    let report = merge(&tree.join("in"), &tree.join("out"), &exclude).unwrap();

    assert!(!tree.exists("in/a"));
    assert!(tree.exists("in/b/excluded.tmp"));
    assert_eq!(report.removed_dirs.len(), 1);
}

#[test]
fn test_same_directory_rejected() {
    let tree = TestTree::new();
    tree.add_file("in/a.txt", "a");

    let err = merge(&tree.join("in"), &tree.join("in"), &Exclude::default()).unwrap_err();
    assert!(matches!(err, TidyError::SameDirectory(_)));
    assert!(tree.exists("in/a.txt"));
}

#[test]
fn test_missing_input_rejected() {
    let tree = TestTree::new();
    let err = merge(&tree.join("nope"), &tree.join("out"), &Exclude::default()).unwrap_err();
    assert!(matches!(err, TidyError::NotFound(_)));
}

#[test]
fn test_output_inside_input_rejected() {
    let tree = TestTree::new();
    tree.add_file("in/a.txt", "a");

    let err = merge(&tree.join("in"), &tree.join("in/out"), &Exclude::default()).unwrap_err();
    assert!(matches!(err, TidyError::NestedOutput { .. }));
}
