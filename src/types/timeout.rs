//! Probe timeout bounded to a small whole number of seconds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Per-run probe timeout in whole seconds, always within 1-10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Timeout(u64);

impl Timeout {
    /// Shortest accepted timeout in seconds.
    pub const MIN_SECS: u64 = 1;
    /// Longest accepted timeout in seconds.
    pub const MAX_SECS: u64 = 10;

    /// Create a timeout, returning None when outside 1-10 seconds.
    pub const fn from_secs(secs: u64) -> Option<Self> {
        if secs >= Self::MIN_SECS && secs <= Self::MAX_SECS {
            Some(Self(secs))
        } else {
            None
        }
    }

    /// Whole seconds.
    pub const fn as_secs(self) -> u64 {
        self.0
    }

    pub const fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Self(3)
    }
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl TryFrom<u64> for Timeout {
    type Error = TimeoutError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_secs(value).ok_or(TimeoutError::OutOfRange(value))
    }
}

impl From<Timeout> for u64 {
    fn from(timeout: Timeout) -> Self {
        timeout.0
    }
}

impl FromStr for Timeout {
    type Err = TimeoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let secs: u64 = s
            .trim()
            .parse()
            .map_err(|_| TimeoutError::InvalidFormat(s.to_string()))?;
        Self::try_from(secs)
    }
}

/// Error type for timeout validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeoutError {
    #[error("timeout {0}s is out of range (1-10)")]
    OutOfRange(u64),
    #[error("invalid timeout: {0}")]
    InvalidFormat(String),
}
