//! Canonical CSV serialization: whole document in memory, one write.

use std::fs;
use std::path::Path;

use support_model::RawTicketRow;

use crate::error::TransformError;

/// Canonical transform output columns, required fields first.
pub const OUTPUT_COLUMNS: [&str; 13] = [
    "ticket_id",
    "created_date",
    "assigned_to",
    "priority",
    "status",
    "category",
    "team",
    "first_response_date",
    "resolution_date",
    "customer_tier",
    "escalated",
    "escalation_date",
    "satisfaction_score",
];

/// Serialize rows into a complete CSV document. Absent columns serialize as
/// empty fields; a value containing the delimiter or a quote is quote-wrapped
/// with inner quotes doubled.
pub fn csv_document(rows: &[RawTicketRow], columns: &[&str]) -> Result<Vec<u8>, TransformError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns)?;
    for row in rows {
        let record: Vec<&str> = columns
            .iter()
            .map(|column| row.get(column).unwrap_or(""))
            .collect();
        writer.write_record(&record)?;
    }
    writer
        .into_inner()
        .map_err(|source| TransformError::Serialize(source.into_error().into()))
}

/// Serialize `rows` and write the document to `path` in one call, returning
/// the byte count. Nothing lands on disk unless the whole document
/// serialized.
pub fn write_rows(
    path: &Path,
    rows: &[RawTicketRow],
    columns: &[&str],
) -> Result<u64, TransformError> {
    if rows.is_empty() {
        return Err(TransformError::EmptyOutput);
    }
    let document = csv_document(rows, columns)?;
    fs::write(path, &document).map_err(|source| TransformError::write(path, source))?;
    Ok(document.len() as u64)
}
