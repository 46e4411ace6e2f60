//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::batch::{BatchReport, ResultRecord};
use crate::classify::AddressClass;
use crate::probe::ProbeOutcome;
use console::{style, Style};
use std::io::{self, Write};

const RULE: &str = "═══════════════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────────";

fn outcome_style(outcome: &ProbeOutcome) -> Style {
    match outcome {
        ProbeOutcome::Connected | ProbeOutcome::Resolved(_) => Style::new().green().bold(),
        ProbeOutcome::Failed(_) => Style::new().red(),
        ProbeOutcome::Skipped(_) => Style::new().yellow(),
    }
}

fn class_style(class: AddressClass) -> Style {
    match class {
        AddressClass::Private => Style::new().magenta(),
        AddressClass::Public => Style::new().cyan(),
        AddressClass::Invalid => Style::new().yellow(),
    }
}

/// Print the result of a single check.
pub fn print_record(record: &ResultRecord) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if record.class == AddressClass::Invalid {
        writeln!(
            out,
            "{} {:?} is not a valid IP address",
            style("✗").red().bold(),
            record.address
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "  {} {}",
        style("IP Type:").bold(),
        class_style(record.class).apply_to(record.class)
    )?;

    let target = match &record.port {
        Some(port) => format!("{}:{}", record.address, port),
        None => record.address.clone(),
    };
    let mark = if record.outcome.is_success() {
        style("✓").green().bold()
    } else {
        style("✗").red().bold()
    };
    writeln!(
        out,
        "{} {}  {}",
        mark,
        style(target).white().bold(),
        outcome_style(&record.outcome).apply_to(record.status())
    )?;

    Ok(())
}

/// Print a bulk run as a table with a summary.
pub fn print_report(report: &BatchReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out)?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(
        out,
        "                  {} Results",
        style("IP Connection Check").cyan().bold()
    )?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(out)?;

    writeln!(
        out,
        "  {} {} entries checked in {:.2}s",
        style("Statistics:").bold(),
        report.records.len(),
        report.duration_ms as f64 / 1000.0
    )?;
    writeln!(
        out,
        "              {} reachable, {} failed, {} invalid",
        style(report.reachable()).green().bold(),
        style(report.failed()).red(),
        style(report.invalid()).yellow()
    )?;
    writeln!(out)?;

    writeln!(out, "  {}", style(THIN_RULE).dim())?;
    writeln!(
        out,
        "  {:<24}  {:>6}  {:<8}  {}",
        style("IP ADDRESS").bold(),
        style("PORT").bold(),
        style("TYPE").bold(),
        style("STATUS").bold()
    )?;
    writeln!(out, "  {}", style(THIN_RULE).dim())?;

    for record in &report.records {
        writeln!(
            out,
            "  {:<24}  {:>6}  {:<8}  {}",
            truncate_string(&record.address, 24),
            truncate_string(record.port_cell(), 6),
            class_style(record.class).apply_to(record.class.to_string()),
            outcome_style(&record.outcome).apply_to(record.status())
        )?;
    }

    writeln!(out, "  {}", style(THIN_RULE).dim())?;
    writeln!(out)?;

    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    eprintln!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    eprintln!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Truncate a string to a maximum length, adding ellipsis if truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
