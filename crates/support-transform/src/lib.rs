//! Vendor helpdesk export transformation into the canonical ticket schema.
//!
//! A fixed field mapping carries ten vendor columns onto canonical fields;
//! ordered value cascades normalize priority and status tokens; naive vendor
//! timestamps are read in a configurable source timezone and serialized as
//! UTC RFC 3339. Row-level failures are collected with their line numbers
//! across the whole file, never fail-fast, and the strict/ignore-errors/
//! dry-run switches decide what happens once the file has been drained.

pub mod datetime;
pub mod error;
pub mod mapping;
pub mod transformer;
pub mod writer;

pub use datetime::{DEFAULT_TIMEZONE, LocalTimeError, to_canonical_utc};
pub use error::TransformError;
pub use mapping::{CascadeRule, FIELD_MAPPING, PRIORITY_CASCADE, STATUS_CASCADE, ValueCascade};
pub use transformer::{
    DryRunPreview, SchemaTransformer, TransformOptions, TransformOutcome, WriteSummary,
};
pub use writer::{OUTPUT_COLUMNS, csv_document, write_rows};
