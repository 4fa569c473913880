use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use support_model::{Ticket, VolumeReport, VolumeSummary, WeeklyVolume};

use crate::stats::mean_count;

/// Weekly ticket volume, keyed by the Monday of each ISO week of
/// `created_date` and emitted in ascending week order.
pub fn volume_report(tickets: &[Ticket]) -> VolumeReport {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for ticket in tickets {
        let week = ticket
            .created_date
            .date_naive()
            .week(Weekday::Mon)
            .first_day();
        *counts.entry(week).or_insert(0) += 1;
    }

    let weekly: Vec<WeeklyVolume> = counts
        .into_iter()
        .map(|(week, tickets)| WeeklyVolume { week, tickets })
        .collect();

    let peak_volume = weekly.iter().map(|entry| entry.tickets).max().unwrap_or(0);
    // First week reaching the maximum wins the tie.
    let peak_week = weekly
        .iter()
        .find(|entry| entry.tickets == peak_volume)
        .map(|entry| entry.week);

    let summary = VolumeSummary {
        total_tickets: tickets.len(),
        average_weekly: mean_count(tickets.len(), weekly.len()),
        peak_week,
        peak_volume,
    };

    VolumeReport { weekly, summary }
}
