//! Vendor export transformation: field mapping, value cascades, run modes.
//!
//! One pass over the vendor file. Every row is transformed independently and
//! row-level failures are collected with their line numbers, never
//! fail-fast; the strict/ignore-errors/dry-run decision is made only once
//! the file has been drained.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use csv::{ReaderBuilder, StringRecord};
use support_model::RawTicketRow;
use tracing::{debug, info, warn};

use crate::datetime::{self, DEFAULT_TIMEZONE, LocalTimeError};
use crate::error::TransformError;
use crate::mapping::{CascadeRule, FIELD_MAPPING, PRIORITY_CASCADE, STATUS_CASCADE, ValueCascade};
use crate::writer::{OUTPUT_COLUMNS, write_rows};

/// Rows included in a dry-run preview.
const PREVIEW_ROWS: usize = 5;

/// Caller-selectable processing switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Keep going past row-level errors and write whatever transformed
    /// cleanly.
    pub ignore_errors: bool,
    /// Transform in memory and report a preview without writing anything.
    pub dry_run: bool,
}

/// What a transform run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformOutcome {
    /// Dry run: nothing written, preview only.
    DryRun(DryRunPreview),
    /// Canonical output written to disk.
    Written(WriteSummary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DryRunPreview {
    /// Rows that transformed cleanly.
    pub rows_processed: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// First few transformed rows, for eyeballing the mapping.
    pub sample: Vec<RawTicketRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Rows that transformed cleanly and were written.
    pub rows_processed: usize,
    /// Row-level errors skipped over, non-empty only under ignore-errors.
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub bytes_written: u64,
}

/// Transforms vendor helpdesk exports into the canonical ticket schema.
///
/// Stateless apart from the source timezone; one instance can run any number
/// of files.
#[derive(Debug, Clone)]
pub struct SchemaTransformer {
    timezone: Tz,
}

impl Default for SchemaTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaTransformer {
    pub fn new() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
        }
    }

    /// Interpret naive vendor timestamps in `timezone` instead of the
    /// default.
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Transform a vendor CSV into the canonical schema.
    ///
    /// Strict runs fail on any row-level error once the whole file has been
    /// scanned; the failure carries the complete error list. Under
    /// ignore-errors the clean rows are written anyway, and under dry-run
    /// nothing is written at all.
    pub fn transform_file(
        &self,
        input: &Path,
        output: &Path,
        options: TransformOptions,
    ) -> Result<TransformOutcome, TransformError> {
        let (rows, warnings, errors) = self.transform_rows(input)?;

        for warning in &warnings {
            warn!(path = %input.display(), "{warning}");
        }

        if !errors.is_empty() && !options.ignore_errors {
            return Err(TransformError::Transformation {
                errors,
                rows_processed: rows.len(),
            });
        }

        if options.dry_run {
            info!(path = %input.display(), rows = rows.len(), "dry run, skipping write");
            return Ok(TransformOutcome::DryRun(DryRunPreview {
                rows_processed: rows.len(),
                errors,
                warnings,
                sample: rows.into_iter().take(PREVIEW_ROWS).collect(),
            }));
        }

        let bytes_written = write_rows(output, &rows, &OUTPUT_COLUMNS)?;
        info!(
            input = %input.display(),
            output = %output.display(),
            rows = rows.len(),
            bytes = bytes_written,
            "wrote canonical CSV"
        );
        Ok(TransformOutcome::Written(WriteSummary {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            rows_processed: rows.len(),
            errors,
            warnings,
            bytes_written,
        }))
    }

    /// Read the vendor file and transform every row, collecting warnings and
    /// `Line <n>: <message>` errors along the way.
    fn transform_rows(
        &self,
        input: &Path,
    ) -> Result<(Vec<RawTicketRow>, Vec<String>, Vec<String>), TransformError> {
        let file = File::open(input).map_err(|source| TransformError::read(input, source))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader
            .headers()
            .map_err(|source| TransformError::csv(input, &source))?
            .clone();
        let mut column_index = HashMap::new();
        for (idx, header) in headers.iter().enumerate() {
            column_index.insert(header.trim_matches('\u{feff}').trim().to_string(), idx);
        }

        let mut warnings = Vec::new();
        let missing: Vec<&str> = FIELD_MAPPING
            .iter()
            .map(|(vendor, _)| *vendor)
            .filter(|vendor| !column_index.contains_key(*vendor))
            .collect();
        if !missing.is_empty() {
            warnings.push(format!(
                "Missing expected vendor columns: {}",
                missing.join(", ")
            ));
        }

        let mut rows = Vec::new();
        let mut errors = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|source| TransformError::csv(input, &source))?;
            // Header is line 1, so the first data row is line 2.
            let line = idx + 2;
            match self.transform_record(&record, &column_index, line, &mut warnings) {
                Ok(row) => rows.push(row),
                Err(message) => errors.push(format!("Line {line}: {message}")),
            }
        }
        debug!(
            path = %input.display(),
            rows = rows.len(),
            errors = errors.len(),
            "transformed vendor rows"
        );
        Ok((rows, warnings, errors))
    }

    fn transform_record(
        &self,
        record: &StringRecord,
        column_index: &HashMap<String, usize>,
        line: usize,
        warnings: &mut Vec<String>,
    ) -> Result<RawTicketRow, String> {
        let mut row = RawTicketRow::default();
        for (vendor, field) in FIELD_MAPPING {
            let raw = column_index
                .get(vendor)
                .and_then(|&idx| record.get(idx))
                .unwrap_or("");
            let value = self.transform_value(field, raw, line, warnings)?;
            row.set(field, &value);
        }
        // Vendor exports never carry an escalation flag.
        row.set("escalated", "false");
        Ok(row)
    }

    /// Transform one mapped value. Blank handling runs first: the
    /// backfillable required fields get their defaults, the rest of the
    /// required set is a row-level error, optional fields stay empty.
    fn transform_value(
        &self,
        field: &str,
        raw: &str,
        line: usize,
        warnings: &mut Vec<String>,
    ) -> Result<String, String> {
        let value = raw.trim();
        if value.is_empty() {
            return match field {
                "assigned_to" => Ok("unassigned@company.com".to_string()),
                "category" | "team" => Ok("General".to_string()),
                "ticket_id" | "created_date" | "priority" | "status" => {
                    Err(format!("Required field '{field}' is empty"))
                }
                _ => Ok(String::new()),
            };
        }

        match field {
            "ticket_id" => Ok(ensure_ticket_prefix(value)),
            "created_date" | "first_response_date" | "resolution_date" => {
                self.transform_date(field, value)
            }
            "priority" => Ok(apply_cascade(&PRIORITY_CASCADE, value, line, warnings)),
            "status" => Ok(apply_cascade(&STATUS_CASCADE, value, line, warnings)),
            "satisfaction_score" => Ok(transform_rating(value, line, warnings)),
            _ => Ok(value.to_string()),
        }
    }

    fn transform_date(&self, field: &str, value: &str) -> Result<String, String> {
        match datetime::to_canonical_utc(value, self.timezone) {
            Ok(instant) => Ok(instant),
            Err(LocalTimeError::Unrecognized) => {
                Err(format!("Invalid date format for '{field}': {value}"))
            }
            Err(LocalTimeError::Nonexistent) => {
                Err(format!("Nonexistent local time for '{field}': {value}"))
            }
        }
    }
}

fn apply_cascade(
    cascade: &ValueCascade,
    value: &str,
    line: usize,
    warnings: &mut Vec<String>,
) -> String {
    let (canonical, rule) = cascade.resolve(value);
    if rule == CascadeRule::Default {
        warnings.push(format!(
            "Line {line}: unknown {} '{value}', defaulting to {canonical}",
            cascade.field
        ));
    }
    canonical.to_string()
}

fn transform_rating(value: &str, line: usize, warnings: &mut Vec<String>) -> String {
    match value.parse::<i64>() {
        Ok(score) if (1..=5).contains(&score) => score.to_string(),
        Ok(score) => {
            warnings.push(format!(
                "Line {line}: satisfaction score '{score}' outside 1-5 range, ignoring"
            ));
            String::new()
        }
        Err(_) => {
            warnings.push(format!(
                "Line {line}: invalid satisfaction score '{value}', ignoring"
            ));
            String::new()
        }
    }
}

fn ensure_ticket_prefix(value: &str) -> String {
    if value.starts_with("T-") {
        value.to_string()
    } else {
        format!("T-{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_fields_backfill_or_fail() {
        let transformer = SchemaTransformer::new();
        let mut warnings = Vec::new();
        assert_eq!(
            transformer
                .transform_value("assigned_to", "  ", 2, &mut warnings)
                .unwrap(),
            "unassigned@company.com"
        );
        assert_eq!(
            transformer
                .transform_value("category", "", 2, &mut warnings)
                .unwrap(),
            "General"
        );
        assert_eq!(
            transformer
                .transform_value("team", "", 2, &mut warnings)
                .unwrap(),
            "General"
        );
        assert_eq!(
            transformer
                .transform_value("priority", "", 2, &mut warnings)
                .unwrap_err(),
            "Required field 'priority' is empty"
        );
        assert_eq!(
            transformer
                .transform_value("first_response_date", "", 2, &mut warnings)
                .unwrap(),
            ""
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn ticket_ids_get_the_canonical_prefix_once() {
        let transformer = SchemaTransformer::new();
        let mut warnings = Vec::new();
        assert_eq!(
            transformer
                .transform_value("ticket_id", "12345", 2, &mut warnings)
                .unwrap(),
            "T-12345"
        );
        assert_eq!(
            transformer
                .transform_value("ticket_id", "T-12345", 2, &mut warnings)
                .unwrap(),
            "T-12345"
        );
    }

    #[test]
    fn ratings_outside_the_range_are_dropped_with_a_warning() {
        let transformer = SchemaTransformer::new();
        let mut warnings = Vec::new();
        assert_eq!(
            transformer
                .transform_value("satisfaction_score", "4", 2, &mut warnings)
                .unwrap(),
            "4"
        );
        assert_eq!(
            transformer
                .transform_value("satisfaction_score", "7", 3, &mut warnings)
                .unwrap(),
            ""
        );
        assert_eq!(
            transformer
                .transform_value("satisfaction_score", "4.5", 4, &mut warnings)
                .unwrap(),
            ""
        );
        assert_eq!(
            warnings,
            vec![
                "Line 3: satisfaction score '7' outside 1-5 range, ignoring".to_string(),
                "Line 4: invalid satisfaction score '4.5', ignoring".to_string(),
            ]
        );
    }

    #[test]
    fn cascade_defaults_record_a_warning_naming_the_line() {
        let transformer = SchemaTransformer::new();
        let mut warnings = Vec::new();
        assert_eq!(
            transformer
                .transform_value("status", "frobnicated", 7, &mut warnings)
                .unwrap(),
            "Open"
        );
        assert_eq!(
            warnings,
            vec!["Line 7: unknown status 'frobnicated', defaulting to Open".to_string()]
        );
    }

    #[test]
    fn dates_error_with_field_context() {
        let transformer = SchemaTransformer::new();
        let mut warnings = Vec::new();
        assert_eq!(
            transformer
                .transform_value("created_date", "2024-01-15 10:30:00", 2, &mut warnings)
                .unwrap(),
            "2024-01-15T18:30:00.000Z"
        );
        assert_eq!(
            transformer
                .transform_value("created_date", "not a date", 2, &mut warnings)
                .unwrap_err(),
            "Invalid date format for 'created_date': not a date"
        );
        assert_eq!(
            transformer
                .transform_value("created_date", "2024-03-10 02:30:00", 2, &mut warnings)
                .unwrap_err(),
            "Nonexistent local time for 'created_date': 2024-03-10 02:30:00"
        );
    }
}
