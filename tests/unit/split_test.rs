//! Tests for splitting chat logs by date

use std::fs;

use dirtidy::TidyError;
use dirtidy::ops::split_log;

use crate::common::TestTree;

const LOG: &str = "\
preamble line
[3/5/24, 9:00:00 AM] Alice: morning
how are you
[3/6/24, 10:15:30 PM] Bob: next day
late reply
";

#[test]
fn test_split_writes_one_file_per_date() {
    let tree = TestTree::new();
    let input = tree.add_file("chat.txt", LOG);

    let report = split_log(&input, "alice", &tree.join("out")).unwrap();

    assert_eq!(report.files.len(), 2);
    assert_eq!(report.discarded_lines, 1);
    assert_eq!(
        tree.read("out/2024_03_05.md"),
        "[3/5/24, 9:00:00 AM] Alice: morning\n alice:  2024_03_05.md: how are you\n"
    );
    assert_eq!(
        tree.read("out/2024_03_06.md"),
        "[3/6/24, 10:15:30 PM] Bob: next day\n alice:  2024_03_06.md: late reply\n"
    );
}

#[test]
fn test_split_same_date_segments_are_appended() {
    let tree = TestTree::new();
    let input = tree.add_file(
        "chat.txt",
        "[1/1/24, 1:00:00 AM] a\none\n[1/2/24, 1:00:00 AM] b\n[1/1/24, 2:00:00 AM] c\ntwo\n",
    );

    let report = split_log(&input, "u", &tree.join("out")).unwrap();

    assert_eq!(report.files.len(), 2);
    let first = &report.files[0];
    assert_eq!(first.name, "2024_01_01.md");
    assert_eq!(first.segments, 2);
    assert_eq!(first.lines, 2);
    assert_eq!(
        tree.read("out/2024_01_01.md"),
        "[1/1/24, 1:00:00 AM] a\n u:  2024_01_01.md: one\n[1/1/24, 2:00:00 AM] c\n u:  2024_01_01.md: two\n"
    );
}

#[test]
fn test_split_invalid_date_drops_segment() {
    let tree = TestTree::new();
    let input = tree.add_file(
        "chat.txt",
        "[2/30/24, 1:00:00 AM] bad\nlost\n[3/1/24, 1:00:00 AM] good\nkept\n",
    );

    let report = split_log(&input, "u", &tree.join("out")).unwrap();

    assert_eq!(report.invalid_dates.len(), 1);
    assert_eq!(report.discarded_lines, 1);
    assert_eq!(report.files.len(), 1);
    assert!(tree.read("out/2024_03_01.md").ends_with("kept\n"));
}

#[test]
fn test_split_overwrites_previous_run() {
    let tree = TestTree::new();
    let input = tree.add_file("chat.txt", "[1/1/24, 1:00:00 AM] a\nbody\n");
    tree.add_file("out/2024_01_01.md", "stale content from an earlier run");

    split_log(&input, "u", &tree.join("out")).unwrap();
    split_log(&input, "u", &tree.join("out")).unwrap();

    assert_eq!(tree.read("out/2024_01_01.md"), "[1/1/24, 1:00:00 AM] a\n u:  2024_01_01.md: body\n");
}

#[test]
fn test_split_last_line_without_newline() {
    let tree = TestTree::new();
    let input = tree.add_file("chat.txt", "[1/1/24, 1:00:00 AM] a\nend");

    split_log(&input, "u", &tree.join("out")).unwrap();

    assert_eq!(tree.read("out/2024_01_01.md"), "[1/1/24, 1:00:00 AM] a\n u:  2024_01_01.md: end");
}

#[test]
fn test_split_no_dates_writes_nothing() {
    let tree = TestTree::new();
    let input = tree.add_file("chat.txt", "nothing\nto see\n");

    let report = split_log(&input, "u", &tree.join("out")).unwrap();

    assert!(report.files.is_empty());
    assert_eq!(report.discarded_lines, 2);
    assert_eq!(fs::read_dir(tree.join("out")).unwrap().count(), 0);
}

#[test]
fn test_split_missing_input() {
    let tree = TestTree::new();
    let err = split_log(&tree.join("absent.txt"), "u", &tree.join("out")).unwrap_err();
    assert!(matches!(err, TidyError::NotFound(_)));
}
