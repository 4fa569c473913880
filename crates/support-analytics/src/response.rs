use std::collections::BTreeMap;

use support_model::{ResponderStats, ResponseSummary, ResponseTimeReport, Ticket};

use crate::stats::{mean, round2};

/// Response latency per assignee, measured as fractional hours between
/// `created_date` and `first_response_date`. Tickets without a recorded
/// first response are skipped.
pub fn response_time_report(tickets: &[Ticket]) -> ResponseTimeReport {
    let mut samples: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for ticket in tickets {
        if let Some(hours) = ticket.response_hours() {
            samples
                .entry(ticket.assigned_to.as_str())
                .or_default()
                .push(hours);
        }
    }
    build_report(samples)
}

/// Variant over the vendor-precomputed duration: `first_response_time_seconds`
/// converted to hours, keyed by `teammate_first_replied`. Only tickets
/// carrying both fields participate; the date-based report above stays the
/// canonical definition.
pub fn first_response_report(tickets: &[Ticket]) -> ResponseTimeReport {
    let mut samples: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for ticket in tickets {
        if let Some(teammate) = ticket.teammate_first_replied.as_deref()
            && let Some(seconds) = ticket.first_response_time_seconds
        {
            samples
                .entry(teammate)
                .or_default()
                .push(seconds as f64 / 3600.0);
        }
    }
    build_report(samples)
}

fn build_report(samples: BTreeMap<&str, Vec<f64>>) -> ResponseTimeReport {
    let mut responders: Vec<ResponderStats> = samples
        .into_iter()
        .map(|(responder, times)| ResponderStats {
            responder: responder.to_string(),
            average_hours: round2(mean(&times)),
            fastest_hours: round2(times.iter().copied().reduce(f64::min).unwrap_or(0.0)),
            slowest_hours: round2(times.iter().copied().reduce(f64::max).unwrap_or(0.0)),
            tickets: times.len(),
        })
        .collect();
    responders.sort_by(|a, b| {
        a.average_hours
            .total_cmp(&b.average_hours)
            .then_with(|| a.responder.cmp(&b.responder))
    });

    let averages: Vec<f64> = responders.iter().map(|entry| entry.average_hours).collect();
    let summary = ResponseSummary {
        team_average_hours: round2(mean(&averages)),
        fastest_responder: responders.first().map(|entry| entry.responder.clone()),
        slowest_responder: responders.last().map(|entry| entry.responder.clone()),
    };

    ResponseTimeReport { responders, summary }
}
