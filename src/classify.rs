//! Address syntax validation and private/public classification.
//!
//! Classification never fails: anything that is not an IPv4 or IPv6 literal
//! is reported as [`AddressClass::Invalid`].

use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::sync::OnceLock;

/// Reserved and non-globally-routable blocks from the IANA special-purpose
/// address registries.
const RESERVED_BLOCKS: &[&str] = &[
    // IPv4
    "0.0.0.0/8",
    "10.0.0.0/8",
    "100.64.0.0/10",
    "127.0.0.0/8",
    "169.254.0.0/16",
    "172.16.0.0/12",
    "192.0.0.0/24",
    "192.0.2.0/24",
    "192.168.0.0/16",
    "198.18.0.0/15",
    "198.51.100.0/24",
    "203.0.113.0/24",
    "240.0.0.0/4",
    "255.255.255.255/32",
    // IPv6
    "::/128",
    "::1/128",
    "::ffff:0:0/96",
    "64:ff9b:1::/48",
    "100::/64",
    "2001::/23",
    "2001:db8::/32",
    "fc00::/7",
    "fe80::/10",
];

static RESERVED: OnceLock<Vec<IpNetwork>> = OnceLock::new();

fn reserved_networks() -> &'static [IpNetwork] {
    RESERVED.get_or_init(|| {
        RESERVED_BLOCKS
            .iter()
            .filter_map(|block| block.parse().ok())
            .collect()
    })
}

/// Scope of an address string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressClass {
    /// Inside a private or reserved block.
    Private,
    /// Globally routable.
    Public,
    /// Not an IP literal.
    Invalid,
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private => write!(f, "Private"),
            Self::Public => write!(f, "Public"),
            Self::Invalid => write!(f, "Invalid"),
        }
    }
}

/// Outcome of parsing and classifying an address string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified {
    /// A parsed address together with its scope.
    Valid { ip: IpAddr, class: AddressClass },
    /// The input was not an IP literal.
    Invalid,
}

impl Classified {
    pub fn class(&self) -> AddressClass {
        match self {
            Self::Valid { class, .. } => *class,
            Self::Invalid => AddressClass::Invalid,
        }
    }

    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            Self::Valid { ip, .. } => Some(*ip),
            Self::Invalid => None,
        }
    }
}

/// Parse `raw` as an IP literal and classify its scope.
pub fn classify(raw: &str) -> Classified {
    match raw.parse::<IpAddr>() {
        Ok(ip) => {
            let class = if is_private(ip) {
                AddressClass::Private
            } else {
                AddressClass::Public
            };
            Classified::Valid { ip, class }
        }
        Err(_) => Classified::Invalid,
    }
}

/// Check whether an address falls in any private or reserved block.
///
/// IPv4-mapped IPv6 addresses are judged by the IPv4 address they carry.
pub fn is_private(ip: IpAddr) -> bool {
    let ip = match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map_or(ip, IpAddr::V4),
        IpAddr::V4(_) => ip,
    };
    reserved_networks().iter().any(|net| net.contains(ip))
}
