//! Port type with validation and parsing.
//!
//! The `Port` newtype ensures values are always valid port numbers (1-65535).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated network port number (1-65535).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 1;
    /// Maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Create a new Port from a u16, returning None if invalid.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port >= Self::MIN {
            Some(Self(port))
        } else {
            None
        }
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Parse a port as typed by a user.
    ///
    /// Surrounding whitespace is ignored; anything that is not an integer in
    /// the valid range is rejected.
    pub fn parse_raw(raw: &str) -> Result<Self, PortError> {
        let trimmed = raw.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| PortError::InvalidFormat(trimmed.to_string()))?;

        u16::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(PortError::OutOfRange(value))
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Port {
    type Error = PortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PortError::OutOfRange(i64::from(value)))
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

impl FromStr for Port {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_raw(s)
    }
}

/// Error type for port parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("port {0} is out of valid range (1-65535)")]
    OutOfRange(i64),
    #[error("invalid port number: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_validation() {
        assert!(Port::new(0).is_none());
        assert!(Port::new(1).is_some());
        assert!(Port::new(80).is_some());
        assert!(Port::new(65535).is_some());
    }

    #[test]
    fn test_parse_raw_accepts_padding() {
        assert_eq!(Port::parse_raw(" 80 ").unwrap().as_u16(), 80);
        assert_eq!(Port::parse_raw("0443").unwrap().as_u16(), 443);
    }

    #[test]
    fn test_parse_raw_bounds() {
        assert_eq!(Port::parse_raw("0"), Err(PortError::OutOfRange(0)));
        assert_eq!(Port::parse_raw("65536"), Err(PortError::OutOfRange(65536)));
        assert_eq!(Port::parse_raw("-1"), Err(PortError::OutOfRange(-1)));
        assert_eq!(Port::parse_raw("65535").unwrap().as_u16(), 65535);
    }

    #[test]
    fn test_parse_raw_rejects_garbage() {
        assert!(matches!(Port::parse_raw("http"), Err(PortError::InvalidFormat(_))));
        assert!(matches!(Port::parse_raw(""), Err(PortError::InvalidFormat(_))));
        assert!(matches!(Port::parse_raw("80.5"), Err(PortError::InvalidFormat(_))));
    }
}
