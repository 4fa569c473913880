//! Subcommand implementations.

use std::path::Path;
use std::time::Instant;

use anyhow::{Result, bail};
use tracing::{debug, info_span, warn};

use support_analytics::AnalyticsEngine;
use support_cli::render;
use support_cli::sample::{SAMPLE_COLUMNS, generate_rows};
use support_ingest::{IngestError, parse_file, validate_file};
use support_transform::{
    SchemaTransformer, TransformError, TransformOptions, TransformOutcome, write_rows,
};

use crate::cli::{AnalyzeArgs, OutputArg, ReportArg, SampleArgs, TransformArgs, ValidateArgs};

pub fn run_analyze(args: &AnalyzeArgs) -> Result<i32> {
    ensure_file_exists(&args.file)?;
    let span = info_span!("analyze", file = %args.file.display());
    let _guard = span.enter();
    let started = Instant::now();

    let tickets = match parse_file(&args.file) {
        Ok(tickets) => tickets,
        Err(IngestError::Validation {
            errors,
            rows_processed,
        }) => {
            render::print_validation_errors(&errors, rows_processed);
            return Ok(1);
        }
        Err(error) => return Err(error.into()),
    };

    if matches!(args.output, OutputArg::Html | OutputArg::Both) || args.html_output.is_some() {
        warn!("HTML output is not yet implemented; printing to the console");
    }

    let engine = AnalyticsEngine::new(tickets).with_exclude_unassigned(args.exclude_unassigned);
    print_reports(&engine, args.report);
    debug!(elapsed = ?started.elapsed(), "analysis finished");
    Ok(0)
}

pub fn run_validate(args: &ValidateArgs) -> Result<i32> {
    ensure_file_exists(&args.file)?;
    let check = validate_file(&args.file)?;
    if check.valid {
        render::print_validation_success(&check);
        Ok(0)
    } else {
        render::print_validation_errors(&check.errors, check.rows_processed);
        Ok(1)
    }
}

pub fn run_sample(args: &SampleArgs) -> Result<i32> {
    if args.num_tickets == 0 {
        bail!("ticket count must be at least 1");
    }
    let span = info_span!("sample", count = args.num_tickets);
    let _guard = span.enter();
    let rows = generate_rows(args.num_tickets);
    let bytes_written = write_rows(&args.output, &rows, &SAMPLE_COLUMNS)?;
    println!("Sample data generated.");
    println!("File: {}", args.output.display());
    println!("Tickets: {}", args.num_tickets);
    println!("Size: {:.2} KB", render::kilobytes(bytes_written));
    Ok(0)
}

pub fn run_transform(args: &TransformArgs) -> Result<i32> {
    ensure_file_exists(&args.input)?;
    let span = info_span!("transform", input = %args.input.display());
    let _guard = span.enter();
    let transformer = SchemaTransformer::new().with_timezone(args.source_timezone);
    let options = TransformOptions {
        ignore_errors: args.ignore_errors,
        dry_run: args.dry_run,
    };
    match transformer.transform_file(&args.input, &args.output, options) {
        Ok(TransformOutcome::DryRun(preview)) => {
            render::print_dry_run(&preview);
            Ok(0)
        }
        Ok(TransformOutcome::Written(summary)) => {
            render::print_write_summary(&summary);
            if args.validate_output {
                let check = validate_file(&args.output)?;
                if check.valid {
                    render::print_validation_success(&check);
                } else {
                    render::print_validation_errors(&check.errors, check.rows_processed);
                }
            }
            Ok(0)
        }
        Err(TransformError::Transformation {
            errors,
            rows_processed,
        }) => {
            render::print_transform_errors(&errors, rows_processed);
            Ok(1)
        }
        Err(error) => Err(error.into()),
    }
}

fn print_reports(engine: &AnalyticsEngine, report: ReportArg) {
    match report {
        ReportArg::All => render::print_all_reports(&engine.all_reports()),
        ReportArg::Volume => render::print_volume(&engine.volume()),
        ReportArg::Response => {
            render::print_response("Response times by assignee", &engine.response_times());
        }
        ReportArg::FirstResponse => {
            render::print_response(
                "First response times by assignee",
                &engine.first_response_times(),
            );
        }
        ReportArg::Resolution => render::print_resolution(&engine.resolution()),
        ReportArg::Performance => render::print_performance(&engine.performance()),
        ReportArg::Workload => render::print_workload(&engine.workload()),
        ReportArg::Assignees => render::print_assignee_volume(&engine.assignee_volume()),
        ReportArg::Escalation => render::print_escalation(&engine.escalation()),
        ReportArg::Time => render::print_time_analysis(&engine.time_analysis()),
        ReportArg::Companies => render::print_companies(&engine.company_volume()),
    }
}

fn ensure_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("CSV file not found at {}", path.display());
    }
    Ok(())
}
