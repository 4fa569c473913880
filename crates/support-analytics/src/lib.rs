//! Aggregate analytics over canonical support tickets.
//!
//! [`AnalyticsEngine`] is the main entry point; the per-report functions are
//! exported for callers that only need a single aggregation.

pub mod companies;
pub mod engine;
pub mod escalation;
pub mod performance;
pub mod resolution;
pub mod response;
mod stats;
pub mod time;
pub mod volume;
pub mod workload;

#[cfg(test)]
mod test_support;

pub use companies::company_volume_report;
pub use engine::{AllReports, AnalyticsEngine};
pub use escalation::escalation_report;
pub use performance::performance_report;
pub use resolution::resolution_report;
pub use response::{first_response_report, response_time_report};
pub use time::time_analysis_report;
pub use volume::volume_report;
pub use workload::{OVERDUE_THRESHOLD_HOURS, assignee_volume_report, workload_report};
