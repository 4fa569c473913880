use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ticket priority levels, ordered by severity.
///
/// The derived `Ord` follows declaration order (Low < Medium < High < Critical),
/// which is the order priority-grouped report sections are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// All priorities in severity order.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Returns the canonical priority name as it appears in ticket files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    /// Parse a canonical priority name. Membership is exact (after trimming):
    /// vendor spellings like "urgent" are handled by the transform cascade,
    /// not here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            "Critical" => Ok(Priority::Critical),
            other => Err(format!("Unknown priority: {other}")),
        }
    }
}

/// Ticket lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl Status {
    /// All statuses in lifecycle order.
    pub const ALL: [Status; 4] = [
        Status::Open,
        Status::InProgress,
        Status::Resolved,
        Status::Closed,
    ];

    /// Returns the canonical status name as it appears in ticket files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
            Status::Closed => "Closed",
        }
    }

    /// True for the statuses counted as resolved by the aggregate reports
    /// (Resolved and Closed).
    pub fn is_resolved(&self) -> bool {
        matches!(self, Status::Resolved | Status::Closed)
    }

    /// True for statuses that still count toward active workload.
    pub fn is_active(&self) -> bool {
        matches!(self, Status::Open | Status::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    /// Parse a canonical status name. Exact membership after trimming;
    /// vendor state tokens go through the transform cascade instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Open" => Ok(Status::Open),
            "In Progress" => Ok(Status::InProgress),
            "Resolved" => Ok(Status::Resolved),
            "Closed" => Ok(Status::Closed),
            other => Err(format!("Unknown status: {other}")),
        }
    }
}

/// A canonical support ticket.
///
/// Built once by the normalizer from a validated raw row and never mutated
/// afterwards; every aggregate report consumes it read-only. Required fields
/// are guaranteed non-empty, enum fields hold only listed values, and
/// `satisfaction_score` is within 1..=5 when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: String,
    pub created_date: DateTime<Utc>,
    pub assigned_to: String,
    pub priority: Priority,
    pub status: Status,
    pub category: String,
    pub team: String,
    pub first_response_date: Option<DateTime<Utc>>,
    pub resolution_date: Option<DateTime<Utc>>,
    pub customer_tier: Option<String>,
    pub escalated: bool,
    pub escalation_date: Option<DateTime<Utc>>,
    pub satisfaction_score: Option<u8>,
    /// Vendor-sourced attribution fields, present only on imported exports.
    pub teammate_first_replied: Option<String>,
    pub teammate_replied_to: Option<String>,
    pub company_name: Option<String>,
    /// Vendor-precomputed durations, present only on imported exports.
    pub first_response_time_seconds: Option<i64>,
    pub time_to_close_seconds: Option<i64>,
    pub replies_sent: Option<i64>,
}

impl Ticket {
    /// Fractional hours from creation to first response, if one was recorded.
    pub fn response_hours(&self) -> Option<f64> {
        self.first_response_date
            .map(|responded| hours_between(self.created_date, responded))
    }

    /// Fractional hours from creation to resolution, if one was recorded.
    pub fn resolution_hours(&self) -> Option<f64> {
        self.resolution_date
            .map(|resolved| hours_between(self.created_date, resolved))
    }

    /// Fractional hours from creation to escalation, if a timestamp was recorded.
    pub fn escalation_hours(&self) -> Option<f64> {
        self.escalation_date
            .map(|escalated| hours_between(self.created_date, escalated))
    }

    /// Fractional hours from creation to the given instant.
    pub fn age_hours(&self, now: DateTime<Utc>) -> f64 {
        hours_between(self.created_date, now)
    }
}

fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}
