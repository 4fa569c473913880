//! Ticket ingestion: CSV reading, row validation, and normalization.
//!
//! The pipeline is a single pass: raw rows come off the reader in file order,
//! every row is validated (collect-all, never fail-fast), clean rows are
//! normalized into canonical tickets, and the success/failure decision is
//! made only once the whole file has been drained.

pub mod error;
pub mod normalize;
pub mod parse;
pub mod reader;
pub mod timestamp;
pub mod validate;

pub use error::IngestError;
pub use normalize::TicketNormalizer;
pub use parse::{FileCheck, ScanOutcome, parse_file, scan_file, validate_file};
pub use reader::read_rows;
pub use timestamp::parse_timestamp;
pub use validate::TicketValidator;
