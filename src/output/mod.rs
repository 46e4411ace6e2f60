//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of check results.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::{print_csv, to_csv, write_csv, CSV_HEADER};
pub use json_format::print_json;
pub use plain::{
    print_error, print_info, print_record, print_report, print_success, print_warning,
};

use crate::batch::{BatchReport, ResultRecord};
use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Print the result of a single check in the requested format.
pub fn format_record(record: &ResultRecord, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Plain => plain::print_record(record)?,
        OutputFormat::Json => json_format::print_json(record)?,
        OutputFormat::Csv => csv_format::print_csv(std::slice::from_ref(record))?,
    }
    Ok(())
}

/// Print a bulk report in the requested format.
pub fn format_report(report: &BatchReport, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Plain => plain::print_report(report)?,
        OutputFormat::Json => json_format::print_json(report)?,
        OutputFormat::Csv => csv_format::print_csv(&report.records)?,
    }
    Ok(())
}
