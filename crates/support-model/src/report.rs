//! Report structures produced by the analytics engine.
//!
//! Each report pairs a data section with a scalar summary. All of them are
//! pure values: serializable, comparable, and detached from the ticket
//! sequence they were computed from. Serialized keys are camelCase to match
//! the shape consumed by downstream tooling.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ticket count for one ISO week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyVolume {
    /// Monday of the ISO week.
    pub week: NaiveDate,
    pub tickets: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSummary {
    pub total_tickets: usize,
    /// Mean tickets per observed week, rounded to the nearest integer.
    pub average_weekly: u64,
    /// First week reaching the maximum count, in ascending date order.
    pub peak_week: Option<NaiveDate>,
    pub peak_volume: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeReport {
    pub weekly: Vec<WeeklyVolume>,
    pub summary: VolumeSummary,
}

/// Response-time statistics for one responder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponderStats {
    pub responder: String,
    pub average_hours: f64,
    pub fastest_hours: f64,
    pub slowest_hours: f64,
    pub tickets: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSummary {
    /// Mean of the per-responder means, 2 decimals.
    pub team_average_hours: f64,
    pub fastest_responder: Option<String>,
    pub slowest_responder: Option<String>,
}

/// Shared shape for the canonical response-time report (hours between
/// creation and first response, keyed by assignee) and the vendor-metric
/// variant (precomputed seconds, keyed by the first-replying teammate). The
/// two are computed independently and never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeReport {
    /// Ranked ascending by mean, ties by responder name.
    pub responders: Vec<ResponderStats>,
    pub summary: ResponseSummary,
}

/// Resolution statistics for one priority or category group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResolution {
    pub group: String,
    pub average_hours: f64,
    pub tickets: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionSummary {
    pub total_resolved: usize,
    pub average_hours: f64,
    /// resolved / total × 100, rounded half away from zero; 0 for empty input.
    pub resolution_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    /// Priority groups in severity order.
    pub by_priority: Vec<GroupResolution>,
    /// Category groups alphabetically.
    pub by_category: Vec<GroupResolution>,
    pub summary: ResolutionSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPerformance {
    pub team: String,
    pub total_tickets: usize,
    pub resolved_tickets: usize,
    pub resolution_rate: u32,
    /// 0 when the team has no responded tickets.
    pub average_response_hours: f64,
    /// 0 when the team has no resolved-with-timestamp tickets.
    pub average_resolution_hours: f64,
    /// 0 when the team has no rated tickets.
    pub average_satisfaction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub total_teams: usize,
    pub best_resolution_rate: u32,
    /// Lowest mean response time among teams with at least one sample;
    /// 0 when no team qualifies.
    pub best_response_hours: f64,
    /// Highest mean satisfaction among teams with at least one score;
    /// 0 when no team qualifies.
    pub highest_satisfaction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    /// Teams alphabetically.
    pub teams: Vec<TeamPerformance>,
    pub summary: PerformanceSummary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityBreakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeWorkload {
    pub assignee: String,
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    /// Resolved or Closed.
    pub resolved: usize,
    /// Active tickets older than the overdue threshold.
    pub overdue: usize,
    pub priorities: PriorityBreakdown,
    /// total + 3 × critical + 2 × high.
    pub workload_score: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadSummary {
    pub total_assignees: usize,
    /// Mean ticket count per assignee, rounded to the nearest integer.
    pub average_load: u64,
    pub busiest: Option<String>,
    pub total_overdue: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadReport {
    /// Sorted by workload score descending, ties by assignee name.
    pub assignees: Vec<AssigneeWorkload>,
    pub summary: WorkloadSummary,
}

/// One assignee's ticket count in the single-assignee volume variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeCount {
    pub assignee: String,
    pub tickets: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeVolumeSummary {
    pub total_assignees: usize,
    /// Records dropped because the assignee value named several people.
    pub multi_assignee_dropped: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeVolumeReport {
    /// Sorted by count descending, ties by assignee name.
    pub assignees: Vec<AssigneeCount>,
    pub summary: AssigneeVolumeSummary,
}

/// Escalation counts for one team, priority, or category group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationGroup {
    pub group: String,
    pub escalated: usize,
    /// escalated-in-group / total-in-group × 100, rounded.
    pub rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationSummary {
    pub total_escalated: usize,
    pub escalation_rate: u32,
    /// Mean hours from creation to escalation over escalated tickets carrying
    /// a timestamp; 0 when none do.
    pub average_hours_to_escalation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationReport {
    pub by_team: Vec<EscalationGroup>,
    pub by_priority: Vec<EscalationGroup>,
    pub by_category: Vec<EscalationGroup>,
    pub summary: EscalationSummary,
}

/// Statistics over one vendor-precomputed duration column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationStats {
    pub tickets: usize,
    /// Mean seconds rounded to the nearest integer; 0 with no samples.
    pub average_seconds: u64,
    /// The mean rendered as "Xh Ym".
    pub average_display: String,
    pub fastest_seconds: i64,
    pub slowest_seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAnalysisSummary {
    /// Tickets with a first-response duration / total × 100, rounded.
    pub response_rate: u32,
    /// Tickets with a close duration / total × 100, rounded.
    pub close_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAnalysisReport {
    pub first_response: DurationStats,
    pub time_to_close: DurationStats,
    pub summary: TimeAnalysisSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCount {
    pub company: String,
    pub tickets: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyVolumeSummary {
    pub total_companies: usize,
    pub top_company: Option<String>,
    pub top_company_tickets: usize,
    /// Mean tickets per company, 2 decimals.
    pub average_per_company: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyVolumeReport {
    /// Sorted by count descending, ties by company name.
    pub companies: Vec<CompanyCount>,
    pub summary: CompanyVolumeSummary,
}
