use support_model::{DurationStats, Ticket, TimeAnalysisReport, TimeAnalysisSummary};

use crate::stats::percent;

/// Statistics over the vendor-precomputed duration columns
/// (`first_response_time_seconds` and `time_to_close_seconds`), each taken
/// independently over the tickets that carry it.
pub fn time_analysis_report(tickets: &[Ticket]) -> TimeAnalysisReport {
    let response: Vec<i64> = tickets
        .iter()
        .filter_map(|ticket| ticket.first_response_time_seconds)
        .collect();
    let close: Vec<i64> = tickets
        .iter()
        .filter_map(|ticket| ticket.time_to_close_seconds)
        .collect();

    let summary = TimeAnalysisSummary {
        response_rate: percent(response.len(), tickets.len()),
        close_rate: percent(close.len(), tickets.len()),
    };

    TimeAnalysisReport {
        first_response: duration_stats(&response),
        time_to_close: duration_stats(&close),
        summary,
    }
}

fn duration_stats(samples: &[i64]) -> DurationStats {
    if samples.is_empty() {
        return DurationStats {
            tickets: 0,
            average_seconds: 0,
            average_display: hours_minutes(0),
            fastest_seconds: 0,
            slowest_seconds: 0,
        };
    }

    let total: i64 = samples.iter().sum();
    let average = (total as f64 / samples.len() as f64).round() as u64;
    DurationStats {
        tickets: samples.len(),
        average_seconds: average,
        average_display: hours_minutes(average),
        fastest_seconds: samples.iter().copied().min().unwrap_or(0),
        slowest_seconds: samples.iter().copied().max().unwrap_or(0),
    }
}

/// Render a duration in seconds as `Xh Ym`, truncating leftover seconds.
fn hours_minutes(seconds: u64) -> String {
    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}
