//! Bulk subcommand implementation.
//!
//! Handles `ipcheck bulk [FILE]`, reading entries from a file or stdin.

use crate::batch::{run_batch, BatchReport};
use crate::cli::OutputFormat;
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output;
use crate::probe::Prober;
use crate::types::Timeout;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Check a list of addresses, one `IP` or `IP:PORT` entry per line.
#[derive(Parser, Debug)]
pub struct BulkCommand {
    /// File with one entry per line; reads stdin when omitted or "-"
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Timeout per connection in seconds (1-10)
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<Timeout>,

    /// Maximum number of probes in flight (1 checks entries one at a time)
    #[arg(short = 'c', long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub concurrency: Option<usize>,

    /// Output format for results
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Also write the results as CSV, to PATH or the configured file name
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,
}

impl BulkCommand {
    /// Execute the bulk command.
    pub async fn execute(&self, settings: &AppSettings, verbose: bool, quiet: bool) -> CliResult<()> {
        let timeout = match self.timeout {
            Some(timeout) => timeout,
            None => settings.timeout()?,
        };
        let concurrency = self.concurrency.unwrap_or(settings.concurrency);
        let format = self.output.unwrap_or(settings.default_output_format);

        let raw = read_input(self.input.as_deref()).await?;
        let prober = Prober::new(timeout);

        let progress = (verbose && !quiet && format == OutputFormat::Plain)
            .then(|| new_progress_bar(raw.lines().filter(|l| !l.trim().is_empty()).count()));

        let report = run_batch(&prober, &raw, concurrency, progress.as_ref()).await?;

        if let Some(pb) = progress {
            pb.finish_with_message("Check complete");
        }

        output::format_report(&report, format)?;

        if !quiet && format == OutputFormat::Plain && report.invalid() > 0 {
            output::print_warning(&format!(
                "{} entries were not valid IP addresses and were skipped",
                report.invalid()
            ));
        }

        if let Some(path) = &self.export {
            let path = path
                .clone()
                .unwrap_or_else(|| PathBuf::from(&settings.export_file_name));
            export_csv(&report, &path)?;

            if !quiet {
                output::print_success(&format!(
                    "Exported {} results to {}",
                    report.records.len(),
                    path.display()
                ));
            }
        }

        Ok(())
    }
}

async fn read_input(input: Option<&Path>) -> CliResult<String> {
    match input {
        Some(path) if path != Path::new("-") => Ok(tokio::fs::read_to_string(path).await?),
        _ => {
            let mut raw = String::new();
            tokio::io::stdin().read_to_string(&mut raw).await?;
            Ok(raw)
        }
    }
}

fn export_csv(report: &BatchReport, path: &Path) -> CliResult<()> {
    let file = std::fs::File::create(path)?;
    output::write_csv(file, &report.records)?;
    Ok(())
}

fn new_progress_bar(len: usize) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .map(|s| s.progress_chars("=>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());

    let pb = ProgressBar::new(len as u64);
    pb.set_style(style);
    pb
}
