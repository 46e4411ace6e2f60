//! # ipcheck - IP Address Validation and Reachability Checks
//!
//! ipcheck validates IP address syntax, classifies addresses as private or
//! public, and probes reachability for one address or a whole list.
//!
//! ## Features
//!
//! - **Classification**: Private, Public, or Invalid, using the IANA
//!   special-purpose address blocks
//! - **Bounded probes**: TCP connect when a port is given, resolution
//!   otherwise, each limited by a 1-10 second timeout
//! - **Bulk checks**: one `IP` or `IP:PORT` entry per line, results kept in
//!   input order even when probes run concurrently
//! - **Export**: CSV with `IP Address,Port,Type,Status` columns, plus JSON
//!   and plain text output
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use ipcheck::batch::run_batch;
//! use ipcheck::output::to_csv;
//! use ipcheck::probe::Prober;
//! use ipcheck::types::Timeout;
//!
//! #[tokio::main]
//! async fn main() {
//!     let prober = Prober::new(Timeout::default());
//!     let report = run_batch(&prober, "8.8.8.8:53\n192.168.0.1", 4, None)
//!         .await
//!         .unwrap();
//!
//!     print!("{}", to_csv(&report.records).unwrap());
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Entry parsing plus validated `Port` and `Timeout` newtypes
//! - [`classify`] - Address syntax and scope classification
//! - [`probe`] - TCP connect and resolution checks
//! - [`batch`] - Per-entry records and ordered bulk runs
//! - [`output`] - CSV, JSON, and plain text formatting
//! - [`config`] - Settings file handling
//! - [`error`] - Error types

pub mod batch;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod probe;
pub mod types;

// Re-export commonly used types
pub use batch::{check_single, run_batch, BatchReport, ResultRecord};
pub use classify::{classify, AddressClass, Classified};
pub use error::{BatchError, CliError, ProbeError};
pub use probe::{ProbeOutcome, Prober};
pub use types::{AddressEntry, Port, Timeout};
