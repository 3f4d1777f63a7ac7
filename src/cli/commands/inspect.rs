//! Inspect command implementation

use anyhow::Context;
use colored::*;
use tracing::info;

use super::shared::setup_logging;
use crate::app::services::position_service::{PositionService, SourceReport};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::constants::MAX_REPORTED_ERRORS;

/// Parse a source once and report what the API would serve from it
pub async fn run_inspect(args: InspectArgs) -> anyhow::Result<()> {
    setup_logging(&args.log);

    let service = PositionService::new(args.source.locator());
    info!("Inspecting {}", service.source());

    let report = service
        .inspect()
        .await
        .with_context(|| format!("Failed to inspect {}", service.source()))?;

    match args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &SourceReport) {
    let parse = &report.parse;
    let series = &report.series;

    println!("{}", "Source Summary".bright_green().bold());
    println!("  {} {}", "Source:".bright_cyan(), report.source);
    println!(
        "  {} {}",
        "Rows read:".bright_cyan(),
        parse.total_records.to_string().bright_white()
    );
    println!(
        "  {} {} ({:.1}%)",
        "Records parsed:".bright_cyan(),
        parse.records_parsed.to_string().bright_white(),
        parse.success_rate()
    );
    if parse.records_skipped > 0 {
        println!(
            "  {} {}",
            "Rows skipped:".bright_red(),
            parse.records_skipped.to_string().bright_red().bold()
        );
    }
    if parse.total_records > 0 && !parse.is_successful() {
        println!(
            "  {} at most 90% of rows became records",
            "Warning:".bright_yellow().bold()
        );
    }

    println!("\n{}", "Time Series".bright_green().bold());
    println!(
        "  {} {}",
        "Points:".bright_cyan(),
        series.points_emitted.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Missing pressure:".bright_cyan(),
        series.missing_pressure
    );
    if series.timestamp_failures > 0 {
        println!(
            "  {} {}",
            "Bad observation times:".bright_red(),
            series.timestamp_failures.to_string().bright_red().bold()
        );
    }

    println!("\n{}", "Fix Days".bright_green().bold());
    println!(
        "  {} {}",
        "Distinct days:".bright_cyan(),
        report.fix_days.len().to_string().bright_white()
    );
    if let (Some(first), Some(last)) = (report.fix_days.first(), report.fix_days.last()) {
        println!("  {} {} .. {}", "Span:".bright_cyan(), first, last);
    }

    if !parse.errors.is_empty() {
        println!("\n{}", "Skipped Rows".bright_yellow().bold());
        for error in parse.errors.iter().take(MAX_REPORTED_ERRORS) {
            println!("  {} {}", "-".bright_yellow(), error);
        }
        if parse.errors.len() > MAX_REPORTED_ERRORS {
            println!(
                "  ... and {} more",
                parse.errors.len() - MAX_REPORTED_ERRORS
            );
        }
    }
}
