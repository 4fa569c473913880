//! End-to-end vendor transforms over real files.

use std::fs;
use std::path::PathBuf;

use support_transform::{SchemaTransformer, TransformError, TransformOptions, TransformOutcome};
use tempfile::TempDir;

const VENDOR_HEADER: &str = "Conversation ID,Conversation created at (America/Vancouver),Teammate currently assigned,Conversation priority,Current conversation state,Conversation first replied at (America/Vancouver),Conversation first closed at (America/Vancouver),Topics,Team currently assigned,Last teammate rating";

fn write_vendor_file(dir: &TempDir, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut content = String::from(VENDOR_HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}

fn written(outcome: TransformOutcome) -> support_transform::WriteSummary {
    match outcome {
        TransformOutcome::Written(summary) => summary,
        TransformOutcome::DryRun(_) => panic!("expected a written outcome"),
    }
}

#[test]
fn transforms_a_vendor_export_into_canonical_csv() {
    let dir = TempDir::new().unwrap();
    let input = write_vendor_file(
        &dir,
        "vendor.csv",
        &[
            "101,2024-01-15 10:30:00,alice@company.com,urgent,waiting,2024-01-15 11:00:00,,Bug,Technical,4",
            "T-102,2024-01-16 09:00:00,bob@company.com,not_priority,closed,2024-01-16 09:10:00,2024-01-16 12:00:00,Question,Billing,5",
        ],
    );
    let output = dir.path().join("canonical.csv");

    let outcome = SchemaTransformer::new()
        .transform_file(&input, &output, TransformOptions::default())
        .unwrap();
    let summary = written(outcome);
    assert_eq!(summary.rows_processed, 2);
    assert!(summary.errors.is_empty());
    assert!(summary.warnings.is_empty());

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[1],
        "T-101,2024-01-15T18:30:00.000Z,alice@company.com,Critical,In Progress,Bug,Technical,2024-01-15T19:00:00.000Z,,,false,,4"
    );
    assert_eq!(
        lines[2],
        "T-102,2024-01-16T17:00:00.000Z,bob@company.com,Low,Resolved,Question,Billing,2024-01-16T17:10:00.000Z,2024-01-16T20:00:00.000Z,,false,,5"
    );
}

#[test]
fn transformed_output_passes_canonical_validation() {
    let dir = TempDir::new().unwrap();
    let input = write_vendor_file(
        &dir,
        "vendor.csv",
        &[
            "201,2024-01-15 10:30:00,alice@company.com,high,open,,,Bug,Technical,",
            "202,2024-07-15 08:00:00,bob@company.com,low,snoozed,2024-07-15 09:30:00,,Question,Billing,3",
        ],
    );
    let output = dir.path().join("canonical.csv");

    SchemaTransformer::new()
        .transform_file(&input, &output, TransformOptions::default())
        .unwrap();

    let check = support_ingest::validate_file(&output).unwrap();
    assert!(check.valid, "unexpected errors: {:?}", check.errors);
    assert_eq!(check.rows_processed, 2);
    assert_eq!(check.tickets_valid, 2);
}

#[test]
fn strict_mode_collects_errors_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_vendor_file(
        &dir,
        "vendor.csv",
        &[
            "103,not a date,carol@company.com,high,open,,,Bug,Technical,",
            ",2024-01-15 10:30:00,dave@company.com,low,open,,,Bug,Technical,",
        ],
    );
    let output = dir.path().join("canonical.csv");

    let err = SchemaTransformer::new()
        .transform_file(&input, &output, TransformOptions::default())
        .unwrap_err();
    let TransformError::Transformation {
        errors,
        rows_processed,
    } = err
    else {
        panic!("expected a transformation error");
    };
    assert_eq!(rows_processed, 0);
    assert_eq!(
        errors,
        vec![
            "Line 2: Invalid date format for 'created_date': not a date".to_string(),
            "Line 3: Required field 'ticket_id' is empty".to_string(),
        ]
    );
    assert!(!output.exists());
}

#[test]
fn ignore_errors_keeps_the_clean_rows() {
    let dir = TempDir::new().unwrap();
    let input = write_vendor_file(
        &dir,
        "vendor.csv",
        &[
            "103,not a date,carol@company.com,high,open,,,Bug,Technical,",
            "104,2024-01-15 10:30:00,dave@company.com,low,open,,,Bug,Technical,",
        ],
    );
    let output = dir.path().join("canonical.csv");

    let outcome = SchemaTransformer::new()
        .transform_file(
            &input,
            &output,
            TransformOptions {
                ignore_errors: true,
                dry_run: false,
            },
        )
        .unwrap();
    let summary = written(outcome);
    assert_eq!(summary.rows_processed, 1);
    assert_eq!(summary.errors.len(), 1);

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains("T-104"));
    assert!(!text.contains("T-103"));
}

#[test]
fn dry_run_previews_without_writing() {
    let dir = TempDir::new().unwrap();
    let rows: Vec<String> = (201..=207)
        .map(|id| format!("{id},2024-01-15 10:30:00,alice@company.com,low,open,,,Bug,Technical,"))
        .collect();
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let input = write_vendor_file(&dir, "vendor.csv", &refs);
    let output = dir.path().join("canonical.csv");

    let outcome = SchemaTransformer::new()
        .transform_file(
            &input,
            &output,
            TransformOptions {
                ignore_errors: false,
                dry_run: true,
            },
        )
        .unwrap();
    let TransformOutcome::DryRun(preview) = outcome else {
        panic!("expected a dry-run outcome");
    };
    assert_eq!(preview.rows_processed, 7);
    assert_eq!(preview.sample.len(), 5);
    assert_eq!(preview.sample[0].ticket_id.as_deref(), Some("T-201"));
    assert_eq!(preview.sample[4].ticket_id.as_deref(), Some("T-205"));
    assert!(preview.errors.is_empty());
    assert!(!output.exists());
}

#[test]
fn dry_run_still_fails_fast_in_strict_mode() {
    let dir = TempDir::new().unwrap();
    let input = write_vendor_file(
        &dir,
        "vendor.csv",
        &[",2024-01-15 10:30:00,alice@company.com,low,open,,,Bug,Technical,"],
    );
    let output = dir.path().join("canonical.csv");

    let err = SchemaTransformer::new()
        .transform_file(
            &input,
            &output,
            TransformOptions {
                ignore_errors: false,
                dry_run: true,
            },
        )
        .unwrap_err();
    assert!(matches!(err, TransformError::Transformation { .. }));
    assert!(!output.exists());
}

#[test]
fn missing_vendor_columns_warn_and_backfill() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vendor.csv");
    let content = "Conversation ID,Conversation created at (America/Vancouver),Teammate currently assigned,Conversation priority,Current conversation state,Conversation first replied at (America/Vancouver),Conversation first closed at (America/Vancouver),Last teammate rating\n104,2024-01-15 10:30:00,erin@company.com,medium,open,,,3\n";
    fs::write(&path, content).unwrap();
    let output = dir.path().join("canonical.csv");

    let outcome = SchemaTransformer::new()
        .transform_file(&path, &output, TransformOptions::default())
        .unwrap();
    let summary = written(outcome);
    assert_eq!(
        summary.warnings,
        vec!["Missing expected vendor columns: Topics, Team currently assigned".to_string()]
    );

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[1],
        "T-104,2024-01-15T18:30:00.000Z,erin@company.com,Medium,Open,General,General,,,,false,,3"
    );
}

#[test]
fn unknown_tokens_default_and_warn() {
    let dir = TempDir::new().unwrap();
    let input = write_vendor_file(
        &dir,
        "vendor.csv",
        &["105,2024-01-15 10:30:00,frank@company.com,frobnicated,blocked,,,Bug,Technical,"],
    );
    let output = dir.path().join("canonical.csv");

    let outcome = SchemaTransformer::new()
        .transform_file(&input, &output, TransformOptions::default())
        .unwrap();
    let summary = written(outcome);
    assert_eq!(
        summary.warnings,
        vec![
            "Line 2: unknown priority 'frobnicated', defaulting to Medium".to_string(),
            "Line 2: unknown status 'blocked', defaulting to Open".to_string(),
        ]
    );

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains(",Medium,Open,"));
}

#[test]
fn ignoring_errors_with_no_survivors_is_empty_output() {
    let dir = TempDir::new().unwrap();
    let input = write_vendor_file(
        &dir,
        "vendor.csv",
        &[",2024-01-15 10:30:00,alice@company.com,low,open,,,Bug,Technical,"],
    );
    let output = dir.path().join("canonical.csv");

    let err = SchemaTransformer::new()
        .transform_file(
            &input,
            &output,
            TransformOptions {
                ignore_errors: true,
                dry_run: false,
            },
        )
        .unwrap_err();
    assert!(matches!(err, TransformError::EmptyOutput));
    assert_eq!(err.to_string(), "no data to transform");
    assert!(!output.exists());
}

#[test]
fn values_containing_delimiters_survive_the_round_trip_quoted() {
    let dir = TempDir::new().unwrap();
    let input = write_vendor_file(
        &dir,
        "vendor.csv",
        &[r#"106,2024-01-15 10:30:00,grace@company.com,low,open,,,"Bug, Feature",Technical,"#],
    );
    let output = dir.path().join("canonical.csv");

    SchemaTransformer::new()
        .transform_file(&input, &output, TransformOptions::default())
        .unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    insta::assert_snapshot!(
        lines[1],
        @r#"T-106,2024-01-15T18:30:00.000Z,grace@company.com,Low,Open,"Bug, Feature",Technical,,,,false,,"#
    );
}

#[test]
fn a_configured_timezone_changes_the_utc_mapping() {
    let dir = TempDir::new().unwrap();
    let input = write_vendor_file(
        &dir,
        "vendor.csv",
        &["107,2024-01-15 10:30:00,henry@company.com,low,open,,,Bug,Technical,"],
    );
    let output = dir.path().join("canonical.csv");

    SchemaTransformer::new()
        .with_timezone(chrono_tz::Europe::Berlin)
        .transform_file(&input, &output, TransformOptions::default())
        .unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("2024-01-15T09:30:00.000Z"));
}

#[test]
fn a_missing_input_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("nope.csv");
    let output = dir.path().join("canonical.csv");

    let err = SchemaTransformer::new()
        .transform_file(&input, &output, TransformOptions::default())
        .unwrap_err();
    assert!(matches!(err, TransformError::Read { .. }));
}
