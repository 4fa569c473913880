//! Row-level validation against the canonical schema.

use std::str::FromStr;

use support_model::{DATE_FIELDS, Priority, RawTicketRow, Status};

use crate::timestamp::parse_timestamp;

/// Tokens accepted for the escalated flag, case-insensitive.
const ESCALATED_TOKENS: [&str; 4] = ["true", "false", "1", "0"];

/// Validates raw rows against the canonical ticket schema.
///
/// Every check is evaluated independently, so a single row can report several
/// defects at once. Errors are formatted `Line <n>: <message>` with the file
/// header counted as line 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketValidator;

impl TicketValidator {
    pub fn new() -> Self {
        TicketValidator
    }

    /// Validate one row. Returns an empty list when the row is clean.
    pub fn validate_row(&self, row: &RawTicketRow, line: usize) -> Vec<String> {
        let mut errors = Vec::new();

        for field in row.missing_required() {
            errors.push(format!("Line {line}: Missing required field '{field}'"));
        }

        for field in DATE_FIELDS {
            if let Some(value) = row.get(field)
                && !value.trim().is_empty()
                && parse_timestamp(value).is_none()
            {
                errors.push(format!(
                    "Line {line}: Invalid date format for '{field}': {value}"
                ));
            }
        }

        if let Some(value) = row.priority.as_deref()
            && !value.trim().is_empty()
            && Priority::from_str(value).is_err()
        {
            let legal = Priority::ALL.map(|p| p.as_str()).join(", ");
            errors.push(format!(
                "Line {line}: Invalid priority '{value}'. Must be one of: {legal}"
            ));
        }

        if let Some(value) = row.status.as_deref()
            && !value.trim().is_empty()
            && Status::from_str(value).is_err()
        {
            let legal = Status::ALL.map(|s| s.as_str()).join(", ");
            errors.push(format!(
                "Line {line}: Invalid status '{value}'. Must be one of: {legal}"
            ));
        }

        if let Some(value) = row.escalated.as_deref()
            && !value.trim().is_empty()
            && !ESCALATED_TOKENS.contains(&value.trim().to_lowercase().as_str())
        {
            errors.push(format!(
                "Line {line}: Invalid escalated value '{value}'. Must be true/false or 1/0"
            ));
        }

        if let Some(value) = row.satisfaction_score.as_deref()
            && !value.trim().is_empty()
            && !satisfaction_in_range(value)
        {
            errors.push(format!(
                "Line {line}: Invalid satisfaction_score '{value}'. Must be 1-5"
            ));
        }

        errors
    }
}

fn satisfaction_in_range(value: &str) -> bool {
    value
        .trim()
        .parse::<i64>()
        .is_ok_and(|score| (1..=5).contains(&score))
}
