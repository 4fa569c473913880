use chrono::{DateTime, Utc};
use serde::Serialize;
use support_model::{
    AssigneeVolumeReport, CompanyVolumeReport, EscalationReport, PerformanceReport,
    ResolutionReport, ResponseTimeReport, Ticket, TimeAnalysisReport, VolumeReport,
    WorkloadReport,
};
use tracing::debug;

use crate::companies::company_volume_report;
use crate::escalation::escalation_report;
use crate::performance::performance_report;
use crate::resolution::resolution_report;
use crate::response::{first_response_report, response_time_report};
use crate::time::time_analysis_report;
use crate::volume::volume_report;
use crate::workload::{assignee_volume_report, workload_report};

/// The six canonical reports in one bundle, as produced by
/// [`AnalyticsEngine::all_reports`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllReports {
    pub volume: VolumeReport,
    pub response: ResponseTimeReport,
    pub resolution: ResolutionReport,
    pub performance: PerformanceReport,
    pub workload: WorkloadReport,
    pub escalation: EscalationReport,
}

/// Aggregate reporting over a frozen ticket sequence.
///
/// The engine owns its input and never mutates it; every report method is a
/// pure function of the tickets plus the configured reference instant, so
/// calling one twice gives identical results.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    tickets: Vec<Ticket>,
    now: DateTime<Utc>,
    exclude_unassigned: bool,
}

impl AnalyticsEngine {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets,
            now: Utc::now(),
            exclude_unassigned: false,
        }
    }

    /// Pin the reference instant used by age-sensitive reports (overdue
    /// detection). Defaults to the wall clock.
    #[must_use]
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Leave tickets filed under the unassigned sentinel team out of the
    /// performance report.
    #[must_use]
    pub fn with_exclude_unassigned(mut self, exclude: bool) -> Self {
        self.exclude_unassigned = exclude;
        self
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn volume(&self) -> VolumeReport {
        volume_report(&self.tickets)
    }

    pub fn response_times(&self) -> ResponseTimeReport {
        response_time_report(&self.tickets)
    }

    pub fn first_response_times(&self) -> ResponseTimeReport {
        first_response_report(&self.tickets)
    }

    pub fn resolution(&self) -> ResolutionReport {
        resolution_report(&self.tickets)
    }

    pub fn performance(&self) -> PerformanceReport {
        performance_report(&self.tickets, self.exclude_unassigned)
    }

    pub fn workload(&self) -> WorkloadReport {
        workload_report(&self.tickets, self.now)
    }

    pub fn assignee_volume(&self) -> AssigneeVolumeReport {
        assignee_volume_report(&self.tickets)
    }

    pub fn escalation(&self) -> EscalationReport {
        escalation_report(&self.tickets)
    }

    pub fn time_analysis(&self) -> TimeAnalysisReport {
        time_analysis_report(&self.tickets)
    }

    pub fn company_volume(&self) -> CompanyVolumeReport {
        company_volume_report(&self.tickets)
    }

    pub fn all_reports(&self) -> AllReports {
        debug!(tickets = self.tickets.len(), "computing aggregate reports");
        AllReports {
            volume: self.volume(),
            response: self.response_times(),
            resolution: self.resolution(),
            performance: self.performance(),
            workload: self.workload(),
            escalation: self.escalation(),
        }
    }
}
