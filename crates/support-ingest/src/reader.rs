//! CSV reading into raw ticket rows.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;
use support_model::{RawTicketRow, is_canonical_field};
use tracing::debug;

use crate::error::IngestError;

/// Read a canonical ticket CSV into raw rows, in file order.
///
/// Headers are trimmed and stripped of a UTF-8 BOM; columns outside the
/// declared canonical set are dropped with a debug log. Values are kept
/// verbatim, trimming belongs to the normalizer. Short records simply leave
/// trailing columns absent.
pub fn read_rows(path: &Path) -> Result<Vec<RawTicketRow>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::io(path, source))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|source| IngestError::csv(path, &source))?
        .clone();
    let columns: Vec<String> = headers
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let unknown: Vec<&str> = columns
        .iter()
        .map(String::as_str)
        .filter(|name| !name.is_empty() && !is_canonical_field(name))
        .collect();
    if !unknown.is_empty() {
        debug!(
            path = %path.display(),
            columns = ?unknown,
            "ignoring columns outside the canonical field set"
        );
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::csv(path, &source))?;
        let mut row = RawTicketRow::default();
        for (idx, value) in record.iter().enumerate() {
            if let Some(name) = columns.get(idx) {
                row.set(name, value);
            }
        }
        rows.push(row);
    }
    Ok(rows)
}
