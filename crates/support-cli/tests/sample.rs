//! End-to-end checks for generated sample data.

use support_cli::sample::{SAMPLE_COLUMNS, generate_rows};
use support_transform::write_rows;
use tempfile::TempDir;

#[test]
fn generated_sample_file_passes_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample-tickets.csv");
    let rows = generate_rows(25);

    let bytes_written = write_rows(&path, &rows, &SAMPLE_COLUMNS).unwrap();
    assert_eq!(bytes_written, std::fs::metadata(&path).unwrap().len());

    let check = support_ingest::validate_file(&path).unwrap();
    assert!(check.valid, "unexpected errors: {:?}", check.errors);
    assert_eq!(check.rows_processed, 25);
    assert_eq!(check.tickets_valid, 25);
}

#[test]
fn generated_sample_file_feeds_the_analytics_engine() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample-tickets.csv");
    write_rows(&path, &generate_rows(40), &SAMPLE_COLUMNS).unwrap();

    let tickets = support_ingest::parse_file(&path).unwrap();
    let reports = support_analytics::AnalyticsEngine::new(tickets).all_reports();
    assert_eq!(reports.volume.summary.total_tickets, 40);
    assert!(!reports.response.responders.is_empty());
}
