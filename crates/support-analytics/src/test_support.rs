//! Fixtures shared by the report module tests.

use chrono::{DateTime, Utc};
use support_model::{Priority, Status, Ticket};

/// Parse an RFC 3339 instant.
pub(crate) fn instant(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}

/// An open Medium ticket with every optional field absent. Tests override
/// the fields they care about through struct update.
pub(crate) fn ticket(id: &str, created: &str) -> Ticket {
    Ticket {
        ticket_id: id.to_string(),
        created_date: instant(created),
        assigned_to: "alice@company.com".to_string(),
        priority: Priority::Medium,
        status: Status::Open,
        category: "General".to_string(),
        team: "Support".to_string(),
        first_response_date: None,
        resolution_date: None,
        customer_tier: None,
        escalated: false,
        escalation_date: None,
        satisfaction_score: None,
        teammate_first_replied: None,
        teammate_replied_to: None,
        company_name: None,
        first_response_time_seconds: None,
        time_to_close_seconds: None,
        replies_sent: None,
    }
}
