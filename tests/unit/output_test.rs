//! Tests for the Output module
//!
//! Reports are rendered either as human-readable text or as JSON; these
//! tests pin down the JSON shape scripts rely on.

use std::path::PathBuf;

use dirtidy::output::{
    FileError, MergeReport, OperationResult, OutputMode, SegmentFile, SplitReport, StampReport,
    Transfer,
};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn merge_report_serialization() {
    let report = MergeReport {
        input: PathBuf::from("in"),
        output: PathBuf::from("out"),
        moved: vec![Transfer::new("in/a.txt", "out/a.txt")],
        deleted: vec![PathBuf::from("in/b.txt")],
        ..MergeReport::default()
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["moved"][0]["from"], "in/a.txt");
    assert_eq!(json["moved"][0]["to"], "out/a.txt");
    assert_eq!(json["deleted"][0], "in/b.txt");
    assert_eq!(json["conflicts"].as_array().unwrap().len(), 0);
}

#[test]
fn stamp_report_processed_counts_outcomes() {
    let report = StampReport {
        total: 4,
        renamed: vec![Transfer::new("a", "b")],
        merged: vec![Transfer::new("c", "b")],
        already_named: vec![PathBuf::from("d")],
        errors: vec![FileError::new("e", "boom")],
        ..StampReport::default()
    };
    assert_eq!(report.processed(), 3);
}

#[test]
fn split_report_serialization() {
    let report = SplitReport {
        input: PathBuf::from("chat.txt"),
        output_dir: PathBuf::from("."),
        files: vec![SegmentFile {
            name: "2024_01_01.md".to_string(),
            path: PathBuf::from("./2024_01_01.md"),
            segments: 2,
            lines: 7,
        }],
        invalid_dates: vec![],
        discarded_lines: 1,
        errors: vec![],
    };

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"name\":\"2024_01_01.md\""));
    assert!(json.contains("\"segments\":2"));
    assert!(json.contains("\"discarded_lines\":1"));
}

#[test]
fn file_error_keeps_message() {
    let err = FileError::new("x.md", "permission denied");
    assert_eq!(err.path, PathBuf::from("x.md"));
    assert_eq!(err.message, "permission denied");
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: false,
        message: "Operation cancelled.".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":false"));
    assert!(json.contains("Operation cancelled."));
}
