use super::*;
use crate::formatter::{ChangeKind, FormatResult};
use crate::validator::ValidationResult;

#[test]
fn changes_serialize_with_summary() {
    let files = vec![FormattedFile {
        name: "app.fs".to_string(),
        result: FormatResult {
            formatted: "let x = 1;".to_string(),
            changes: vec![Change::new(
                ChangeKind::Fix,
                1,
                "Added missing semicolon",
                "let x = 1",
                "let x = 1;",
            )],
        },
    }];

    let output = JsonFormatter.format_changes(&files).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total_files"], 1);
    assert_eq!(parsed["summary"]["files_with_changes"], 1);
    assert_eq!(parsed["summary"]["total_changes"], 1);
    assert_eq!(parsed["files"][0]["name"], "app.fs");
    assert_eq!(parsed["files"][0]["changed"], true);
    assert_eq!(parsed["files"][0]["changes"][0]["type"], "fix");
    assert_eq!(parsed["files"][0]["changes"][0]["line"], 1);
}

#[test]
fn validation_serializes_results_and_summary() {
    let results = vec![BatchValidationResult::new(
        "a.exe",
        ValidationResult::failure("Invalid file extension: .exe. Allowed extensions: .fs, .forsure, .txt"),
        ValidationResult::valid(),
    )];

    let output = JsonFormatter.format_validation(&results).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total"], 1);
    assert_eq!(parsed["summary"]["invalid"], 1);
    assert_eq!(parsed["results"][0]["file_name"], "a.exe");
    assert_eq!(parsed["results"][0]["overall_valid"], false);
    assert_eq!(parsed["results"][0]["content_validation"]["is_valid"], true);
}

#[test]
fn empty_batches_produce_zero_summaries() {
    let output = JsonFormatter.format_changes(&[]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["summary"]["total_files"], 0);
    assert!(parsed["files"].as_array().unwrap().is_empty());
}
