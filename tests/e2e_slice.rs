// logslice - tests/e2e_slice.rs
//
// End-to-end tests for the slice pipeline.
//
// These exercise the real filesystem, the real line source, the real
// parser and filter, and the real renderers. No mocks.

use logslice::app::slice::{run, SliceRequest};
use logslice::core::render::{render, OutputFormat};
use logslice::util::error::{FilterError, LogSliceError, SourceError};
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn request(level: Option<&str>, pattern: Option<&str>, limit: usize) -> SliceRequest {
    SliceRequest {
        path: fixture("service_sample.log"),
        level: level.map(str::to_string),
        pattern: pattern.map(str::to_string),
        limit,
    }
}

fn line_numbers(req: &SliceRequest) -> Vec<u64> {
    run(req).unwrap().iter().map(|r| r.line_number).collect()
}

// =============================================================================
// Parsing E2E
// =============================================================================

/// Without filters every line comes back, numbered 1..N in order.
#[test]
fn e2e_unfiltered_returns_every_line() {
    let records = run(&request(None, None, 0)).unwrap();
    assert_eq!(records.len(), 12);
    let numbers: Vec<u64> = records.iter().map(|r| r.line_number).collect();
    assert_eq!(numbers, (1..=12).collect::<Vec<u64>>());
}

/// Structured and unstructured lines are split as expected.
#[test]
fn e2e_fixture_fields() {
    let records = run(&request(None, None, 0)).unwrap();

    let r = &records[2];
    assert_eq!(r.timestamp.as_deref(), Some("2024-05-01 08:00:02,118"));
    assert_eq!(r.level.as_deref(), Some("WARN"));
    assert_eq!(r.message, "cache directory missing, creating it");

    let r = &records[3];
    assert_eq!(r.timestamp.as_deref(), Some("2024-05-01T08:00:03+02:00"));

    // Continuation line keeps its trimmed text.
    let r = &records[4];
    assert!(r.is_unstructured());
    assert_eq!(r.message, "at db::connect (src/db.rs:42)");

    // Blank line is an unstructured record with an empty message.
    let r = &records[5];
    assert!(r.is_unstructured());
    assert_eq!(r.message, "");

    // Unrecognised level keeps the whole line.
    assert!(records[10].is_unstructured());
}

// =============================================================================
// Filtering E2E
// =============================================================================

#[test]
fn e2e_level_filter_is_case_insensitive_and_skips_unstructured() {
    assert_eq!(line_numbers(&request(Some("Error"), None, 0)), vec![4, 7]);
}

#[test]
fn e2e_warn_and_warning_are_separate_levels() {
    assert_eq!(line_numbers(&request(Some("warn"), None, 0)), vec![3]);
    assert_eq!(line_numbers(&request(Some("warning"), None, 0)), vec![8]);
}

#[test]
fn e2e_pattern_filter() {
    assert_eq!(line_numbers(&request(None, Some("FAILED"), 0)), vec![4, 7]);
    assert_eq!(line_numbers(&request(None, Some(r"retr(y|ies)"), 0)), vec![7, 9]);
}

#[test]
fn e2e_limit_keeps_first_matches() {
    assert_eq!(line_numbers(&request(None, None, 3)), vec![1, 2, 3]);
    assert_eq!(line_numbers(&request(Some("error"), Some("fail"), 1)), vec![4]);
}

#[test]
fn e2e_same_request_twice_is_identical() {
    let req = request(None, Some("a"), 5);
    assert_eq!(run(&req).unwrap(), run(&req).unwrap());
}

// =============================================================================
// Errors E2E
// =============================================================================

#[test]
fn e2e_invalid_pattern_fails_fast() {
    let result = run(&request(None, Some("a(b"), 0));
    assert!(
        matches!(
            result,
            Err(LogSliceError::Filter(FilterError::InvalidPattern { .. }))
        ),
        "expected InvalidPattern, got {result:?}"
    );
}

#[test]
fn e2e_missing_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let req = SliceRequest {
        path: dir.path().join("absent.log"),
        ..Default::default()
    };
    let result = run(&req);
    assert!(
        matches!(result, Err(LogSliceError::Source(SourceError::Unavailable { .. }))),
        "expected Unavailable, got {result:?}"
    );
}

// =============================================================================
// Rendering E2E
// =============================================================================

#[test]
fn e2e_json_output_round_trips_through_serde() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    fs::write(
        &path,
        "2024-01-01T00:00:00 ERROR disk failure\n2024-01-01T00:00:01 INFO disk ok\nloose line\n",
    )
    .unwrap();

    let req = SliceRequest {
        path,
        ..Default::default()
    };
    let records = run(&req).unwrap();
    let mut out = Vec::new();
    render(&records, OutputFormat::Json, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["lineNumber"], 1);
    assert_eq!(items[0]["level"], "ERROR");
    assert_eq!(items[1]["message"], "disk ok");
    assert!(items[2]["timestamp"].is_null());
    assert!(items[2]["level"].is_null());
    assert_eq!(items[2]["message"], "loose line");
}

#[test]
fn e2e_table_output_one_row_per_record() {
    let records = run(&request(Some("critical"), None, 0)).unwrap();
    let mut out = Vec::new();
    render(&records, OutputFormat::Table, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "2024-05-01T08:00:07Z  CRITICAL  pager alert sent\n"
    );
}
