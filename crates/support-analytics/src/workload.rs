use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use support_model::{
    AssigneeCount, AssigneeVolumeReport, AssigneeVolumeSummary, AssigneeWorkload, Priority,
    PriorityBreakdown, Status, Ticket, WorkloadReport, WorkloadSummary,
};

use crate::stats::mean_count;

/// Open and in-progress tickets older than this many hours count as overdue.
pub const OVERDUE_THRESHOLD_HOURS: f64 = 48.0;

#[derive(Default)]
struct LoadCounters {
    total: usize,
    open: usize,
    in_progress: usize,
    resolved: usize,
    overdue: usize,
    priorities: PriorityBreakdown,
}

/// Workload distribution per assignee, scored as
/// `total + 3 × critical + 2 × high` and sorted busiest-first. Overdue age is
/// measured against the supplied `now`.
pub fn workload_report(tickets: &[Ticket], now: DateTime<Utc>) -> WorkloadReport {
    let mut assignees: BTreeMap<&str, LoadCounters> = BTreeMap::new();
    for ticket in tickets {
        let load = assignees.entry(ticket.assigned_to.as_str()).or_default();
        load.total += 1;
        match ticket.priority {
            Priority::Low => load.priorities.low += 1,
            Priority::Medium => load.priorities.medium += 1,
            Priority::High => load.priorities.high += 1,
            Priority::Critical => load.priorities.critical += 1,
        }
        match ticket.status {
            Status::Open => load.open += 1,
            Status::InProgress => load.in_progress += 1,
            Status::Resolved | Status::Closed => load.resolved += 1,
        }
        if ticket.status.is_active() && ticket.age_hours(now) > OVERDUE_THRESHOLD_HOURS {
            load.overdue += 1;
        }
    }

    let mut rows: Vec<AssigneeWorkload> = assignees
        .into_iter()
        .map(|(name, load)| AssigneeWorkload {
            assignee: name.to_string(),
            total: load.total,
            open: load.open,
            in_progress: load.in_progress,
            resolved: load.resolved,
            overdue: load.overdue,
            priorities: load.priorities,
            workload_score: load.total + 3 * load.priorities.critical + 2 * load.priorities.high,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.workload_score
            .cmp(&a.workload_score)
            .then_with(|| a.assignee.cmp(&b.assignee))
    });

    let total_load: usize = rows.iter().map(|row| row.total).sum();
    let summary = WorkloadSummary {
        total_assignees: rows.len(),
        average_load: mean_count(total_load, rows.len()),
        busiest: rows.first().map(|row| row.assignee.clone()),
        total_overdue: rows.iter().map(|row| row.overdue).sum(),
    };

    WorkloadReport { assignees: rows, summary }
}

/// Plain ticket counts per assignee. Records whose assignee field names
/// several people (comma-separated) are dropped from this report and counted
/// in the summary instead.
pub fn assignee_volume_report(tickets: &[Ticket]) -> AssigneeVolumeReport {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut dropped = 0;
    for ticket in tickets {
        if ticket.assigned_to.contains(',') {
            dropped += 1;
            continue;
        }
        *counts.entry(ticket.assigned_to.as_str()).or_insert(0) += 1;
    }

    let mut assignees: Vec<AssigneeCount> = counts
        .into_iter()
        .map(|(assignee, tickets)| AssigneeCount {
            assignee: assignee.to_string(),
            tickets,
        })
        .collect();
    assignees.sort_by(|a, b| {
        b.tickets
            .cmp(&a.tickets)
            .then_with(|| a.assignee.cmp(&b.assignee))
    });

    let summary = AssigneeVolumeSummary {
        total_assignees: assignees.len(),
        multi_assignee_dropped: dropped,
    };

    AssigneeVolumeReport { assignees, summary }
}
