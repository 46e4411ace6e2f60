//! Configuration management for ipcheck.
//!
//! Settings live in an XDG-compliant configuration directory and supply
//! defaults that command-line flags override.

mod settings;

pub use settings::{AppSettings, Paths};
