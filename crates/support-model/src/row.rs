use serde::{Deserialize, Serialize};

/// Canonical columns that must be present and non-blank on every row.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "ticket_id",
    "created_date",
    "assigned_to",
    "priority",
    "status",
    "category",
    "team",
];

/// Canonical columns that may be absent or blank.
pub const OPTIONAL_FIELDS: [&str; 12] = [
    "first_response_date",
    "resolution_date",
    "customer_tier",
    "escalated",
    "escalation_date",
    "satisfaction_score",
    "teammate_first_replied",
    "teammate_replied_to",
    "company_name",
    "first_response_time_seconds",
    "time_to_close_seconds",
    "replies_sent",
];

/// Canonical columns carrying timestamps.
pub const DATE_FIELDS: [&str; 4] = [
    "created_date",
    "first_response_date",
    "resolution_date",
    "escalation_date",
];

/// True when `name` is one of the declared canonical columns.
pub fn is_canonical_field(name: &str) -> bool {
    REQUIRED_FIELDS.contains(&name) || OPTIONAL_FIELDS.contains(&name)
}

/// A raw ticket row at the parser boundary.
///
/// One named optional slot per declared canonical column; anything outside the
/// declared set is dropped before it reaches domain logic. `None` means the
/// column was absent from the source; a present-but-blank value is kept as-is
/// so diagnostics can tell the two apart, but validation treats both as
/// missing. Produced by the CSV reader, the schema transformer, and the sample
/// generator alike.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTicketRow {
    pub ticket_id: Option<String>,
    pub created_date: Option<String>,
    pub assigned_to: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub team: Option<String>,
    pub first_response_date: Option<String>,
    pub resolution_date: Option<String>,
    pub customer_tier: Option<String>,
    pub escalated: Option<String>,
    pub escalation_date: Option<String>,
    pub satisfaction_score: Option<String>,
    pub teammate_first_replied: Option<String>,
    pub teammate_replied_to: Option<String>,
    pub company_name: Option<String>,
    pub first_response_time_seconds: Option<String>,
    pub time_to_close_seconds: Option<String>,
    pub replies_sent: Option<String>,
}

impl RawTicketRow {
    /// Store a value under a canonical column name. Returns false (and stores
    /// nothing) when the name is not part of the declared field set.
    pub fn set(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "ticket_id" => &mut self.ticket_id,
            "created_date" => &mut self.created_date,
            "assigned_to" => &mut self.assigned_to,
            "priority" => &mut self.priority,
            "status" => &mut self.status,
            "category" => &mut self.category,
            "team" => &mut self.team,
            "first_response_date" => &mut self.first_response_date,
            "resolution_date" => &mut self.resolution_date,
            "customer_tier" => &mut self.customer_tier,
            "escalated" => &mut self.escalated,
            "escalation_date" => &mut self.escalation_date,
            "satisfaction_score" => &mut self.satisfaction_score,
            "teammate_first_replied" => &mut self.teammate_first_replied,
            "teammate_replied_to" => &mut self.teammate_replied_to,
            "company_name" => &mut self.company_name,
            "first_response_time_seconds" => &mut self.first_response_time_seconds,
            "time_to_close_seconds" => &mut self.time_to_close_seconds,
            "replies_sent" => &mut self.replies_sent,
            _ => return false,
        };
        *slot = Some(value.to_string());
        true
    }

    /// Look up a value by canonical column name. `None` for unknown names and
    /// absent columns alike.
    pub fn get(&self, field: &str) -> Option<&str> {
        let slot = match field {
            "ticket_id" => &self.ticket_id,
            "created_date" => &self.created_date,
            "assigned_to" => &self.assigned_to,
            "priority" => &self.priority,
            "status" => &self.status,
            "category" => &self.category,
            "team" => &self.team,
            "first_response_date" => &self.first_response_date,
            "resolution_date" => &self.resolution_date,
            "customer_tier" => &self.customer_tier,
            "escalated" => &self.escalated,
            "escalation_date" => &self.escalation_date,
            "satisfaction_score" => &self.satisfaction_score,
            "teammate_first_replied" => &self.teammate_first_replied,
            "teammate_replied_to" => &self.teammate_replied_to,
            "company_name" => &self.company_name,
            "first_response_time_seconds" => &self.first_response_time_seconds,
            "time_to_close_seconds" => &self.time_to_close_seconds,
            "replies_sent" => &self.replies_sent,
            _ => &None,
        };
        slot.as_deref()
    }

    /// True when the column is absent or contains only whitespace.
    pub fn is_blank(&self, field: &str) -> bool {
        self.get(field).is_none_or(|value| value.trim().is_empty())
    }

    /// Required columns that are absent or blank, in declaration order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| self.is_blank(field))
            .collect()
    }
}
