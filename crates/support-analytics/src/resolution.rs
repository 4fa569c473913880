use std::collections::BTreeMap;

use support_model::{GroupResolution, Priority, ResolutionReport, ResolutionSummary, Ticket};

use crate::stats::{mean, percent, round2};

/// Resolution latency grouped by priority and by category. A ticket counts
/// as resolved here iff it carries a `resolution_date`; per-ticket hours are
/// rounded to 2 decimals before any group mean is taken.
pub fn resolution_report(tickets: &[Ticket]) -> ResolutionReport {
    let mut by_priority: BTreeMap<Priority, Vec<f64>> = BTreeMap::new();
    let mut by_category: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    let mut all_hours: Vec<f64> = Vec::new();

    for ticket in tickets {
        if let Some(hours) = ticket.resolution_hours() {
            let hours = round2(hours);
            by_priority.entry(ticket.priority).or_default().push(hours);
            by_category
                .entry(ticket.category.as_str())
                .or_default()
                .push(hours);
            all_hours.push(hours);
        }
    }

    let by_priority = by_priority
        .into_iter()
        .map(|(priority, hours)| group(priority.as_str(), &hours))
        .collect();
    let by_category = by_category
        .into_iter()
        .map(|(category, hours)| group(category, &hours))
        .collect();

    let summary = ResolutionSummary {
        total_resolved: all_hours.len(),
        average_hours: round2(mean(&all_hours)),
        resolution_rate: percent(all_hours.len(), tickets.len()),
    };

    ResolutionReport { by_priority, by_category, summary }
}

fn group(name: &str, hours: &[f64]) -> GroupResolution {
    GroupResolution {
        group: name.to_string(),
        average_hours: round2(mean(hours)),
        tickets: hours.len(),
    }
}
