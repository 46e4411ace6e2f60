//! CLI subcommand definitions and handlers.
//!
//! - `ipcheck check <address> [--port P]` - Check a single address
//! - `ipcheck bulk [FILE]` - Check one `IP` or `IP:PORT` entry per line

mod bulk;
mod check;

pub use bulk::BulkCommand;
pub use check::CheckCommand;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ipcheck - IP address validation and reachability checks.
///
/// Classifies addresses as private or public, then either resolves them or,
/// when a port is given, attempts a TCP connection within a timeout.
#[derive(Parser, Debug)]
#[command(name = "ipcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check IP address validity and reachability", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH", env = "IPCHECK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a single IP address
    #[command(alias = "c")]
    Check(CheckCommand),

    /// Check a list of addresses, one per line
    #[command(alias = "b")]
    Bulk(BulkCommand),
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
