//! Core type definitions using newtype patterns for type safety.
//!
//! Ports and timeouts are validated on construction so the prober never sees
//! an out-of-range value.

mod entry;
mod port;
mod timeout;

pub use entry::{parse_entries, AddressEntry};
pub use port::{Port, PortError};
pub use timeout::{Timeout, TimeoutError};
