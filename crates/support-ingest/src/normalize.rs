//! Conversion of validated raw rows into canonical tickets.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use support_model::{Priority, RawTicketRow, Status, Ticket};

use crate::timestamp::parse_timestamp;

/// Builds canonical `Ticket` values from rows that already passed validation.
///
/// String fields are trimmed, dates become UTC instants, the escalated flag
/// collapses to a bool, and absent optionals stay `None`. Vendor duration
/// columns that fail to parse as integers are treated as absent rather than
/// failing the row; validation does not constrain them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketNormalizer;

impl TicketNormalizer {
    pub fn new() -> Self {
        TicketNormalizer
    }

    /// Normalize one validated row. The error arm is unreachable for rows the
    /// validator accepted; it exists so unvalidated callers still get a
    /// diagnostic instead of a panic.
    pub fn normalize(&self, row: &RawTicketRow) -> Result<Ticket, String> {
        let priority = Priority::from_str(required(&row.priority))?;
        let status = Status::from_str(required(&row.status))?;

        Ok(Ticket {
            ticket_id: required(&row.ticket_id).to_string(),
            created_date: required_date("created_date", &row.created_date)?,
            assigned_to: required(&row.assigned_to).to_string(),
            priority,
            status,
            category: required(&row.category).to_string(),
            team: required(&row.team).to_string(),
            first_response_date: optional_date("first_response_date", &row.first_response_date)?,
            resolution_date: optional_date("resolution_date", &row.resolution_date)?,
            customer_tier: optional_text(&row.customer_tier),
            escalated: escalated_flag(&row.escalated),
            escalation_date: optional_date("escalation_date", &row.escalation_date)?,
            satisfaction_score: optional_int::<u8>(&row.satisfaction_score)
                .filter(|score| (1..=5).contains(score)),
            teammate_first_replied: optional_text(&row.teammate_first_replied),
            teammate_replied_to: optional_text(&row.teammate_replied_to),
            company_name: optional_text(&row.company_name),
            first_response_time_seconds: optional_int(&row.first_response_time_seconds),
            time_to_close_seconds: optional_int(&row.time_to_close_seconds),
            replies_sent: optional_int(&row.replies_sent),
        })
    }
}

fn required(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default().trim()
}

fn required_date(field: &str, value: &Option<String>) -> Result<DateTime<Utc>, String> {
    let raw = required(value);
    parse_timestamp(raw).ok_or_else(|| format!("Invalid date format for '{field}': {raw}"))
}

fn optional_date(field: &str, value: &Option<String>) -> Result<Option<DateTime<Utc>>, String> {
    let raw = required(value);
    if raw.is_empty() {
        return Ok(None);
    }
    parse_timestamp(raw)
        .map(Some)
        .ok_or_else(|| format!("Invalid date format for '{field}': {raw}"))
}

fn optional_text(value: &Option<String>) -> Option<String> {
    let trimmed = value.as_deref().unwrap_or_default().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn escalated_flag(value: &Option<String>) -> bool {
    matches!(
        value.as_deref().unwrap_or_default().trim().to_lowercase().as_str(),
        "true" | "1"
    )
}

fn optional_int<T: FromStr>(value: &Option<String>) -> Option<T> {
    value.as_deref()?.trim().parse().ok()
}
