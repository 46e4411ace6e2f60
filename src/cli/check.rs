//! Check subcommand implementation.
//!
//! Handles `ipcheck check <address>` for a single address.

use crate::batch::check_single;
use crate::cli::OutputFormat;
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output;
use crate::probe::Prober;
use crate::types::Timeout;
use clap::Parser;

/// Check a single IP address.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// IP address to check (IPv4 or IPv6)
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Port to connect to; without one the address is only resolved
    #[arg(short, long)]
    pub port: Option<String>,

    /// Timeout in seconds (1-10)
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<Timeout>,

    /// Output format for results
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl CheckCommand {
    /// Execute the check command.
    pub async fn execute(&self, settings: &AppSettings, quiet: bool) -> CliResult<()> {
        let timeout = match self.timeout {
            Some(timeout) => timeout,
            None => settings.timeout()?,
        };
        let format = self.output.unwrap_or(settings.default_output_format);

        if !quiet && format == OutputFormat::Plain {
            output::print_info(&format!("Checking {} (timeout {})", self.address, timeout));
        }

        let prober = Prober::new(timeout);
        let record = check_single(&prober, &self.address, self.port.as_deref()).await;

        output::format_record(&record, format)
    }
}
