pub mod report;
pub mod row;
pub mod ticket;

pub use report::{
    AssigneeCount, AssigneeVolumeReport, AssigneeVolumeSummary, AssigneeWorkload, CompanyCount,
    CompanyVolumeReport, CompanyVolumeSummary, DurationStats, EscalationGroup, EscalationReport,
    EscalationSummary, GroupResolution, PerformanceReport, PerformanceSummary, PriorityBreakdown,
    ResolutionReport, ResolutionSummary, ResponderStats, ResponseSummary, ResponseTimeReport,
    TeamPerformance, TimeAnalysisReport, TimeAnalysisSummary, VolumeReport, VolumeSummary,
    WeeklyVolume, WorkloadReport, WorkloadSummary,
};
pub use row::{DATE_FIELDS, OPTIONAL_FIELDS, REQUIRED_FIELDS, RawTicketRow, is_canonical_field};
pub use ticket::{Priority, Status, Ticket};
