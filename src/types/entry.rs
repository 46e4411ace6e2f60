//! Input entries in `IP` or `IP:PORT` form.
//!
//! One entry comes from one line of input. The line is split on the first
//! colon only, so bare IPv6 literals are not told apart from a port
//! separator: `::1` yields an empty address and the port text `:1`.

use serde::{Deserialize, Serialize};

/// An address with an optional raw port, both still unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEntry {
    /// Address text before the first colon.
    pub address: String,
    /// Text after the first colon, if any was present and non-empty.
    pub port: Option<String>,
}

impl AddressEntry {
    /// Parse one line of input.
    ///
    /// Returns `None` for blank lines; callers skip them without producing
    /// a record.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let entry = match line.split_once(':') {
            Some((address, port)) => Self::new(address, Some(port)),
            None => Self::new(line, None),
        };
        Some(entry)
    }

    /// Build an entry from separate address and port fields.
    pub fn single(address: &str, port: Option<&str>) -> Self {
        Self::new(address.trim(), port.map(str::trim))
    }

    fn new(address: &str, port: Option<&str>) -> Self {
        Self {
            address: address.to_string(),
            port: port.filter(|p| !p.is_empty()).map(str::to_string),
        }
    }
}

/// Parse every non-blank line of a multi-line block, in order.
pub fn parse_entries(raw: &str) -> impl Iterator<Item = AddressEntry> + '_ {
    raw.lines().filter_map(AddressEntry::parse)
}
