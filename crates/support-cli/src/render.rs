//! Console rendering for reports, validation results, and transform output.
//!
//! Tables follow one visual style across every subcommand; summary figures
//! are printed as plain lines underneath so they survive terminal copy-paste.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use support_analytics::AllReports;
use support_ingest::FileCheck;
use support_model::{
    AssigneeVolumeReport, CompanyVolumeReport, EscalationGroup, EscalationReport, GroupResolution,
    PerformanceReport, ResolutionReport, ResponseTimeReport, TimeAnalysisReport, VolumeReport,
    WorkloadReport,
};
use support_transform::{DryRunPreview, OUTPUT_COLUMNS, WriteSummary};

/// How many errors a dry-run preview lists before eliding the rest.
const PREVIEW_ERRORS: usize = 5;
/// How many errors a failed transformation lists before eliding the rest.
const FAILURE_ERRORS: usize = 10;
/// How many warnings a successful transformation echoes.
const SUMMARY_WARNINGS: usize = 3;

pub fn print_all_reports(reports: &AllReports) {
    print_volume(&reports.volume);
    print_response("Response times by assignee", &reports.response);
    print_resolution(&reports.resolution);
    print_performance(&reports.performance);
    print_workload(&reports.workload);
    print_escalation(&reports.escalation);
}

pub fn print_volume(report: &VolumeReport) {
    println!("Ticket volume by week:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Week"),
        header_cell("Volume"),
        header_cell("Tickets"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for week in &report.weekly {
        table.add_row(vec![
            Cell::new(week.week.format("%Y-%m-%d")),
            Cell::new(volume_bar(week.tickets)),
            Cell::new(week.tickets),
        ]);
    }
    println!("{table}");
    let summary = &report.summary;
    println!("Total tickets: {}", summary.total_tickets);
    println!("Average per week: {}", summary.average_weekly);
    if let Some(week) = summary.peak_week {
        println!(
            "Peak week: {} ({} tickets)",
            week.format("%Y-%m-%d"),
            summary.peak_volume
        );
    }
    println!();
}

pub fn print_response(title: &str, report: &ResponseTimeReport) {
    println!("{title}:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Responder"),
        header_cell("Avg Hours"),
        header_cell("Tickets"),
        header_cell("Range"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for stats in &report.responders {
        table.add_row(vec![
            Cell::new(&stats.responder),
            Cell::new(format!("{:.1}", stats.average_hours)),
            Cell::new(stats.tickets),
            Cell::new(format!(
                "{:.1}-{:.1}h",
                stats.fastest_hours, stats.slowest_hours
            )),
        ]);
    }
    println!("{table}");
    let summary = &report.summary;
    println!("Team average: {:.1} hours", summary.team_average_hours);
    if let Some(name) = &summary.fastest_responder {
        println!("Fastest responder: {name}");
    }
    if let Some(name) = &summary.slowest_responder {
        println!("Slowest responder: {name}");
    }
    println!();
}

pub fn print_resolution(report: &ResolutionReport) {
    println!("Resolution times by priority:");
    println!("{}", group_table(&report.by_priority, "Priority"));
    println!("Resolution times by category:");
    println!("{}", group_table(&report.by_category, "Category"));
    let summary = &report.summary;
    println!("Resolved tickets: {}", summary.total_resolved);
    println!("Resolution rate: {}%", summary.resolution_rate);
    println!("Average resolution: {:.1} hours", summary.average_hours);
    println!();
}

pub fn print_performance(report: &PerformanceReport) {
    println!("Team performance:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Team"),
        header_cell("Tickets"),
        header_cell("Resolved"),
        header_cell("Rate"),
        header_cell("Avg Response"),
        header_cell("Avg Resolution"),
        header_cell("Satisfaction"),
    ]);
    apply_table_style(&mut table);
    for index in 1..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for team in &report.teams {
        table.add_row(vec![
            Cell::new(&team.team),
            Cell::new(team.total_tickets),
            Cell::new(team.resolved_tickets),
            Cell::new(format!("{}%", team.resolution_rate)),
            Cell::new(format!("{:.1}h", team.average_response_hours)),
            Cell::new(format!("{:.1}h", team.average_resolution_hours)),
            Cell::new(format!("{:.1}", team.average_satisfaction)),
        ]);
    }
    println!("{table}");
    let summary = &report.summary;
    println!("Teams: {}", summary.total_teams);
    println!("Best resolution rate: {}%", summary.best_resolution_rate);
    println!("Best response time: {:.1} hours", summary.best_response_hours);
    println!("Highest satisfaction: {:.1}", summary.highest_satisfaction);
    println!();
}

pub fn print_workload(report: &WorkloadReport) {
    println!("Workload by assignee:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Assignee"),
        header_cell("Total"),
        header_cell("Open"),
        header_cell("In Progress"),
        header_cell("Resolved"),
        header_cell("Overdue"),
        header_cell("Critical"),
        header_cell("Score"),
    ]);
    apply_table_style(&mut table);
    for index in 1..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for assignee in &report.assignees {
        table.add_row(vec![
            Cell::new(&assignee.assignee),
            Cell::new(assignee.total),
            Cell::new(assignee.open),
            Cell::new(assignee.in_progress),
            Cell::new(assignee.resolved),
            count_cell(assignee.overdue, Color::Red),
            count_cell(assignee.priorities.critical, Color::Red),
            Cell::new(assignee.workload_score),
        ]);
    }
    println!("{table}");
    let summary = &report.summary;
    println!("Assignees: {}", summary.total_assignees);
    println!("Average load: {} tickets", summary.average_load);
    if let Some(name) = &summary.busiest {
        println!("Busiest: {name}");
    }
    println!("Overdue tickets: {}", summary.total_overdue);
    println!();
}

pub fn print_assignee_volume(report: &AssigneeVolumeReport) {
    println!("Ticket volume by assignee:");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Assignee"), header_cell("Tickets")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for assignee in &report.assignees {
        table.add_row(vec![
            Cell::new(&assignee.assignee),
            Cell::new(assignee.tickets),
        ]);
    }
    println!("{table}");
    let summary = &report.summary;
    println!("Assignees: {}", summary.total_assignees);
    if summary.multi_assignee_dropped > 0 {
        println!(
            "Rows with multiple assignees skipped: {}",
            summary.multi_assignee_dropped
        );
    }
    println!();
}

pub fn print_escalation(report: &EscalationReport) {
    println!("Escalations by team:");
    println!("{}", escalation_table(&report.by_team, "Team"));
    println!("Escalations by priority:");
    println!("{}", escalation_table(&report.by_priority, "Priority"));
    println!("Escalations by category:");
    println!("{}", escalation_table(&report.by_category, "Category"));
    let summary = &report.summary;
    println!("Escalated tickets: {}", summary.total_escalated);
    println!("Escalation rate: {}%", summary.escalation_rate);
    println!(
        "Average time to escalation: {:.1} hours",
        summary.average_hours_to_escalation
    );
    println!();
}

pub fn print_time_analysis(report: &TimeAnalysisReport) {
    println!("Time analysis:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("First Response"),
        header_cell("Time To Close"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let first = &report.first_response;
    let close = &report.time_to_close;
    table.add_row(vec![
        Cell::new("Tickets"),
        Cell::new(first.tickets),
        Cell::new(close.tickets),
    ]);
    table.add_row(vec![
        Cell::new("Average"),
        Cell::new(&first.average_display),
        Cell::new(&close.average_display),
    ]);
    table.add_row(vec![
        Cell::new("Fastest"),
        Cell::new(hours_text(first.fastest_seconds)),
        Cell::new(hours_text(close.fastest_seconds)),
    ]);
    table.add_row(vec![
        Cell::new("Slowest"),
        Cell::new(hours_text(first.slowest_seconds)),
        Cell::new(hours_text(close.slowest_seconds)),
    ]);
    println!("{table}");
    let summary = &report.summary;
    println!("Response rate: {}%", summary.response_rate);
    println!("Close rate: {}%", summary.close_rate);
    println!();
}

pub fn print_companies(report: &CompanyVolumeReport) {
    println!("Ticket volume by company:");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Company"), header_cell("Tickets")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for company in &report.companies {
        table.add_row(vec![
            Cell::new(&company.company),
            Cell::new(company.tickets),
        ]);
    }
    println!("{table}");
    let summary = &report.summary;
    println!("Companies: {}", summary.total_companies);
    if let Some(name) = &summary.top_company {
        println!(
            "Top company: {} ({} tickets)",
            name, summary.top_company_tickets
        );
    }
    println!("Average per company: {:.1}", summary.average_per_company);
    println!();
}

pub fn print_validation_success(check: &FileCheck) {
    println!(
        "Validation passed: {} ticket(s) across {} row(s).",
        check.tickets_valid, check.rows_processed
    );
}

pub fn print_validation_errors(errors: &[String], rows_processed: usize) {
    eprintln!("Validation errors:");
    for error in errors {
        eprintln!("- {error}");
    }
    eprintln!(
        "{} row(s) processed, {} validation error(s) found",
        rows_processed,
        errors.len()
    );
}

pub fn print_dry_run(preview: &DryRunPreview) {
    println!("Dry run: no files were written.");
    println!("Rows transformed: {}", preview.rows_processed);
    if !preview.errors.is_empty() {
        println!("Errors ({}):", preview.errors.len());
        print_elided(&preview.errors, PREVIEW_ERRORS);
    }
    if !preview.warnings.is_empty() {
        println!("Warnings ({}):", preview.warnings.len());
        print_elided(&preview.warnings, PREVIEW_ERRORS);
    }
    if let Some(row) = preview.sample.first() {
        println!("First transformed row:");
        for column in OUTPUT_COLUMNS {
            println!("  {column}: {}", row.get(column).unwrap_or(""));
        }
    }
    println!("Run again without --dry-run to write the output file.");
}

pub fn print_write_summary(summary: &WriteSummary) {
    println!("Transformation complete.");
    println!("Input: {}", summary.input.display());
    println!("Output: {}", summary.output.display());
    println!("Rows transformed: {}", summary.rows_processed);
    println!("Output size: {:.2} KB", kilobytes(summary.bytes_written));
    if !summary.errors.is_empty() {
        println!("Rows skipped: {}", summary.errors.len());
    }
    for warning in summary.warnings.iter().take(SUMMARY_WARNINGS) {
        println!("Warning: {warning}");
    }
    if summary.warnings.len() > SUMMARY_WARNINGS {
        println!(
            "... and {} more warnings",
            summary.warnings.len() - SUMMARY_WARNINGS
        );
    }
}

pub fn print_transform_errors(errors: &[String], rows_processed: usize) {
    eprintln!("Transformation failed.");
    eprintln!("Rows transformed: {rows_processed}");
    eprintln!("Errors ({}):", errors.len());
    for error in errors.iter().take(FAILURE_ERRORS) {
        eprintln!("- {error}");
    }
    if errors.len() > FAILURE_ERRORS {
        eprintln!("... and {} more errors", errors.len() - FAILURE_ERRORS);
    }
    eprintln!("Use --ignore-errors to skip rows that fail to transform.");
    eprintln!("Use --dry-run to preview the transformation without writing files.");
}

/// KB figure matching the transform summary convention.
pub fn kilobytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

fn print_elided(messages: &[String], limit: usize) {
    for message in messages.iter().take(limit) {
        println!("- {message}");
    }
    if messages.len() > limit {
        println!("... and {} more", messages.len() - limit);
    }
}

fn group_table(groups: &[GroupResolution], label: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(label),
        header_cell("Avg Hours"),
        header_cell("Tickets"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for group in groups {
        table.add_row(vec![
            Cell::new(&group.group),
            Cell::new(format!("{:.1}", group.average_hours)),
            Cell::new(group.tickets),
        ]);
    }
    table
}

fn escalation_table(groups: &[EscalationGroup], label: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(label),
        header_cell("Escalated"),
        header_cell("Rate"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for group in groups {
        table.add_row(vec![
            Cell::new(&group.group),
            count_cell(group.escalated, Color::Yellow),
            Cell::new(format!("{}%", group.rate)),
        ]);
    }
    table
}

/// One block per five tickets, with a floor marker for tiny weeks.
fn volume_bar(tickets: usize) -> String {
    let blocks = tickets / 5;
    if blocks == 0 {
        "▁".to_string()
    } else {
        "█".repeat(blocks)
    }
}

fn hours_text(seconds: i64) -> String {
    let hours = (seconds as f64 / 3600.0 * 100.0).round() / 100.0;
    format!("{hours}h")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
