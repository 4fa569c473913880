use std::collections::BTreeMap;

use support_model::{PerformanceReport, PerformanceSummary, TeamPerformance, Ticket};

use crate::stats::{mean, percent, round2};

/// Teams whose name matches this (case-insensitively) can be excluded from
/// the performance report for imports where an unassigned bucket would skew
/// the ranking.
const UNASSIGNED_TEAM: &str = "Unassigned";

#[derive(Default)]
struct TeamSamples {
    total: usize,
    resolved: usize,
    response_hours: Vec<f64>,
    resolution_hours: Vec<f64>,
    satisfaction: Vec<f64>,
}

/// Per-team ticket outcomes and latency means. Summary minima/maxima only
/// consider teams with at least one sample for the metric in question, so a
/// team that never responded is not mistaken for one responding instantly.
pub fn performance_report(tickets: &[Ticket], exclude_unassigned: bool) -> PerformanceReport {
    let mut teams: BTreeMap<&str, TeamSamples> = BTreeMap::new();
    for ticket in tickets {
        if exclude_unassigned && ticket.team.eq_ignore_ascii_case(UNASSIGNED_TEAM) {
            continue;
        }
        let team = teams.entry(ticket.team.as_str()).or_default();
        team.total += 1;
        if ticket.status.is_resolved() {
            team.resolved += 1;
        }
        if let Some(hours) = ticket.response_hours() {
            team.response_hours.push(hours);
        }
        if let Some(hours) = ticket.resolution_hours() {
            team.resolution_hours.push(hours);
        }
        if let Some(score) = ticket.satisfaction_score {
            team.satisfaction.push(f64::from(score));
        }
    }

    let mut rows = Vec::with_capacity(teams.len());
    let mut best_response: Option<f64> = None;
    let mut highest_satisfaction: Option<f64> = None;

    for (name, samples) in teams {
        let row = TeamPerformance {
            team: name.to_string(),
            total_tickets: samples.total,
            resolved_tickets: samples.resolved,
            resolution_rate: percent(samples.resolved, samples.total),
            average_response_hours: round2(mean(&samples.response_hours)),
            average_resolution_hours: round2(mean(&samples.resolution_hours)),
            average_satisfaction: round2(mean(&samples.satisfaction)),
        };
        if !samples.response_hours.is_empty() {
            best_response = Some(match best_response {
                Some(best) => best.min(row.average_response_hours),
                None => row.average_response_hours,
            });
        }
        if !samples.satisfaction.is_empty() {
            highest_satisfaction = Some(match highest_satisfaction {
                Some(high) => high.max(row.average_satisfaction),
                None => row.average_satisfaction,
            });
        }
        rows.push(row);
    }

    let summary = PerformanceSummary {
        total_teams: rows.len(),
        best_resolution_rate: rows.iter().map(|row| row.resolution_rate).max().unwrap_or(0),
        best_response_hours: best_response.unwrap_or(0.0),
        highest_satisfaction: highest_satisfaction.unwrap_or(0.0),
    };

    PerformanceReport { teams: rows, summary }
}
