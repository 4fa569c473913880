//! File-level parsing with the collect-all policy.
//!
//! A file scan validates every row and accumulates every defect before any
//! success/failure decision is made; the first bad row never short-circuits
//! the rest. `rows_processed` counts structurally-parsed data rows, so
//! validation errors annotate the file without shrinking that count.

use std::path::Path;

use serde::{Deserialize, Serialize};
use support_model::Ticket;
use tracing::info;

use crate::error::IngestError;
use crate::normalize::TicketNormalizer;
use crate::reader::read_rows;
use crate::validate::TicketValidator;

/// Everything a full scan of one file produces.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Canonical tickets from clean rows, in input order.
    pub tickets: Vec<Ticket>,
    /// Every defect across the whole file, `Line <n>: <message>` form.
    pub errors: Vec<String>,
    /// Structurally-parsed data rows, clean or not.
    pub rows_processed: usize,
}

/// Result of `validate_file`, shaped for rendering and serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCheck {
    pub valid: bool,
    pub rows_processed: usize,
    pub tickets_valid: usize,
    pub errors: Vec<String>,
}

impl FileCheck {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Scan a canonical CSV: validate every row, normalize the clean ones.
///
/// Fails only when the file itself cannot be read or decoded; validation
/// defects are reported through the outcome.
pub fn scan_file(path: &Path) -> Result<ScanOutcome, IngestError> {
    let rows = read_rows(path)?;
    let validator = TicketValidator::new();
    let normalizer = TicketNormalizer::new();

    let mut tickets = Vec::new();
    let mut errors = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        // Header is line 1, so the first data row is line 2.
        let line = idx + 2;
        let row_errors = validator.validate_row(row, line);
        if row_errors.is_empty() {
            match normalizer.normalize(row) {
                Ok(ticket) => tickets.push(ticket),
                Err(message) => errors.push(format!("Line {line}: {message}")),
            }
        } else {
            errors.extend(row_errors);
        }
    }

    info!(
        path = %path.display(),
        rows = rows.len(),
        tickets = tickets.len(),
        errors = errors.len(),
        "scanned ticket file"
    );
    Ok(ScanOutcome {
        tickets,
        errors,
        rows_processed: rows.len(),
    })
}

/// Parse a canonical CSV into tickets, failing on any validation defect.
///
/// The failure carries the complete error list and the processed-row count as
/// a single aggregate value.
pub fn parse_file(path: &Path) -> Result<Vec<Ticket>, IngestError> {
    let outcome = scan_file(path)?;
    if outcome.errors.is_empty() {
        Ok(outcome.tickets)
    } else {
        Err(IngestError::Validation {
            errors: outcome.errors,
            rows_processed: outcome.rows_processed,
        })
    }
}

/// Validate a canonical CSV without failing on row defects.
pub fn validate_file(path: &Path) -> Result<FileCheck, IngestError> {
    let outcome = scan_file(path)?;
    Ok(FileCheck {
        valid: outcome.errors.is_empty(),
        rows_processed: outcome.rows_processed,
        tickets_valid: outcome.tickets.len(),
        errors: outcome.errors,
    })
}
