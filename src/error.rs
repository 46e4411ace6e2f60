//! Error types for ipcheck.
//!
//! Uses `thiserror` for ergonomic error definitions. Per-entry probe failures
//! are carried as data inside [`ProbeOutcome`](crate::probe::ProbeOutcome) and
//! never abort a batch; the remaining types describe conditions that stop a
//! whole run.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use crate::types::{PortError, TimeoutError};

/// Cause of a failed reachability probe.
///
/// The display text is what ends up in the `Status` column, so the
/// platform message is kept verbatim where one exists.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ProbeError {
    #[error("invalid port number")]
    InvalidPort,

    #[error("resolution failed: {0}")]
    Resolution(String),

    #[error("connection timed out after {0}s")]
    TimedOut(u64),

    #[error("{0}")]
    Refused(String),

    #[error("{0}")]
    Unreachable(String),

    #[error("{0}")]
    Connect(String),
}

impl ProbeError {
    /// Sort a socket-level error into a cause category, keeping its message.
    pub fn from_io(err: &io::Error) -> Self {
        let message = err.to_string();
        if err.kind() == io::ErrorKind::ConnectionRefused {
            return Self::Refused(message);
        }
        if message.to_lowercase().contains("unreachable") {
            Self::Unreachable(message)
        } else {
            Self::Connect(message)
        }
    }
}

/// Errors that halt a batch run before any entry is processed.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("please enter at least one IP address")]
    EmptyInput,
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings file: {0}")]
    InvalidFormat(String),

    #[error("invalid default timeout: {0}")]
    InvalidTimeout(#[from] TimeoutError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors surfaced by the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error(transparent)]
    Timeout(#[from] TimeoutError),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refused_keeps_platform_message() {
        let err = io::Error::new(io::ErrorKind::ConnectionRefused, "Connection refused (os error 111)");
        let cause = ProbeError::from_io(&err);
        assert!(matches!(cause, ProbeError::Refused(_)));
        assert_eq!(cause.to_string(), "Connection refused (os error 111)");
    }

    #[test]
    fn test_unreachable_detected_from_message() {
        let err = io::Error::new(io::ErrorKind::Other, "No route to host: Network is unreachable");
        assert!(matches!(ProbeError::from_io(&err), ProbeError::Unreachable(_)));
    }

    #[test]
    fn test_other_errors_fall_through() {
        let err = io::Error::new(io::ErrorKind::Other, "Address family not supported");
        assert_eq!(
            ProbeError::from_io(&err),
            ProbeError::Connect("Address family not supported".to_string())
        );
    }

    #[test]
    fn test_cause_wording() {
        assert_eq!(ProbeError::InvalidPort.to_string(), "invalid port number");
        assert_eq!(
            ProbeError::Resolution("no record".to_string()).to_string(),
            "resolution failed: no record"
        );
        assert_eq!(ProbeError::TimedOut(3).to_string(), "connection timed out after 3s");
    }
}
