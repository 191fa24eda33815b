//! End-to-end journal workflow
//!
//! A chat export is split into daily notes, the notes are filed into a
//! year-based archive, and the archive is merged into a long-lived one.

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use super::{dirtidy, write};

#[test]
fn test_split_collect_merge_workflow() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write(
        &root.join("export.txt"),
        "[12/30/23, 9:00:00 AM] planning\nbook flights\n\
         [12/31/23, 11:00:00 PM] party\nbring snacks\n\
         [1/1/24, 12:05:00 AM] new year\nresolutions\n",
    );
    write(&root.join("archive/2023/2023_12_31.md"), "earlier note\n");

    // Step 1: split the export into daily files
    dirtidy(root)
        .args(["split-log", "export.txt", "-u", "me", "-o", "inbox"])
        .assert()
        .success();
    assert_eq!(fs::read_dir(root.join("inbox")).unwrap().count(), 3);

    // Step 2: file them by year
    dirtidy(root)
        .args(["journal", "collect", "inbox", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully moved new files: 3"));
    assert!(root.join("staging/2023/2023_12_30.md").exists());
    assert!(root.join("staging/2024/2024_01_01.md").exists());

    // Step 3: fold staging into the archive; the differing 12/31 note replaces the old one
    dirtidy(root)
        .args(["merge", "staging", "archive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved (new file): 2"))
        .stdout(predicate::str::contains("Moved (conflict, replaced): 1"));

    let dec31 = fs::read_to_string(root.join("archive/2023/2023_12_31.md")).unwrap();
    assert!(dec31.contains("bring snacks"));
    assert!(!root.join("staging").exists());
}
