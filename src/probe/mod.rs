//! Reachability probing.
//!
//! With a port, an entry is checked by completing a TCP handshake; without
//! one, by resolving the address. Every failure is turned into a
//! [`ProbeOutcome::Failed`] value instead of an error, and no probe runs
//! longer than the configured [`Timeout`].

mod resolve;
mod tcp;

pub use resolve::{DnsResolver, Resolve};
pub use tcp::connect;

use crate::classify::Classified;
use crate::error::ProbeError;
use crate::types::{Port, Timeout};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::debug;

/// Reason recorded when an entry is not probed at all.
pub const INVALID_ADDRESS: &str = "invalid address";

/// Categorized result of probing one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The address was not valid, so nothing was attempted.
    Skipped(String),
    /// No port was given and the address resolved.
    Resolved(IpAddr),
    /// A port was given and the handshake completed in time.
    Connected,
    /// The check failed; the cause is kept for diagnostics.
    Failed(ProbeError),
}

impl ProbeOutcome {
    /// Check if the probe succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Resolved(_) | Self::Connected)
    }

    /// Short human-readable status for tables and CSV export.
    pub fn status(&self) -> String {
        match self {
            Self::Skipped(_) => "Invalid IP".to_string(),
            Self::Resolved(ip) => format!("Resolvable to {}", ip),
            Self::Connected => "Reachable".to_string(),
            Self::Failed(cause) => format!("Failed: {}", cause),
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status())
    }
}

/// Runs bounded-time checks for classified addresses.
///
/// Holds no per-entry state, so one prober can serve many entries at once.
#[derive(Clone)]
pub struct Prober {
    timeout: Timeout,
    resolver: Arc<dyn Resolve>,
}

impl Prober {
    /// Create a prober that resolves through DNS.
    pub fn new(timeout: Timeout) -> Self {
        Self::with_resolver(timeout, Arc::new(DnsResolver::new(timeout)))
    }

    /// Create a prober with a custom resolver.
    pub fn with_resolver(timeout: Timeout, resolver: Arc<dyn Resolve>) -> Self {
        Self { timeout, resolver }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Timeout {
        self.timeout
    }

    /// Probe one entry.
    ///
    /// Invalid addresses are skipped. A port that is not an integer in
    /// 1-65535 fails without touching the network.
    pub async fn probe(&self, target: &Classified, port: Option<&str>) -> ProbeOutcome {
        let Some(ip) = target.ip() else {
            return ProbeOutcome::Skipped(INVALID_ADDRESS.to_string());
        };

        let outcome = match port {
            None => self.resolve(ip).await,
            Some(raw) => match Port::parse_raw(raw) {
                Ok(port) => self.connect(ip, port).await,
                Err(e) => {
                    debug!(%ip, error = %e, "rejecting port");
                    ProbeOutcome::Failed(ProbeError::InvalidPort)
                }
            },
        };

        debug!(%ip, port = port.unwrap_or("-"), outcome = %outcome, "probe finished");
        outcome
    }

    async fn resolve(&self, ip: IpAddr) -> ProbeOutcome {
        let host = ip.to_string();
        match tokio::time::timeout(self.timeout.as_duration(), self.resolver.resolve(&host)).await
        {
            Ok(Ok(resolved)) => ProbeOutcome::Resolved(resolved),
            Ok(Err(cause)) => ProbeOutcome::Failed(cause),
            Err(_) => ProbeOutcome::Failed(ProbeError::Resolution(format!(
                "timed out after {}s",
                self.timeout.as_secs()
            ))),
        }
    }

    async fn connect(&self, ip: IpAddr, port: Port) -> ProbeOutcome {
        match connect(SocketAddr::new(ip, port.as_u16()), self.timeout).await {
            Ok(()) => ProbeOutcome::Connected,
            Err(cause) => ProbeOutcome::Failed(cause),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::classify::classify;
    use async_trait::async_trait;
    use std::time::{Duration, Instant};
    use tokio::net::TcpListener;

    /// Resolver that answers literals and fails everything else, offline.
    pub(crate) struct StubResolver;

    #[async_trait]
    impl Resolve for StubResolver {
        async fn resolve(&self, host: &str) -> Result<IpAddr, ProbeError> {
            host.parse()
                .map_err(|_| ProbeError::Resolution(format!("no record for {}", host)))
        }
    }

    /// Resolver that never answers.
    struct HangingResolver;

    #[async_trait]
    impl Resolve for HangingResolver {
        async fn resolve(&self, _host: &str) -> Result<IpAddr, ProbeError> {
            std::future::pending().await
        }
    }

    pub(crate) fn stub_prober(secs: u64) -> Prober {
        Prober::with_resolver(Timeout::from_secs(secs).unwrap(), Arc::new(StubResolver))
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(ProbeOutcome::Connected.status(), "Reachable");
        assert_eq!(
            ProbeOutcome::Skipped(INVALID_ADDRESS.to_string()).status(),
            "Invalid IP"
        );
        assert_eq!(
            ProbeOutcome::Resolved("8.8.8.8".parse().unwrap()).status(),
            "Resolvable to 8.8.8.8"
        );
        assert_eq!(
            ProbeOutcome::Failed(ProbeError::InvalidPort).status(),
            "Failed: invalid port number"
        );
    }

    #[test]
    fn test_success_categories() {
        assert!(ProbeOutcome::Connected.is_success());
        assert!(ProbeOutcome::Resolved("1.1.1.1".parse().unwrap()).is_success());
        assert!(!ProbeOutcome::Skipped(INVALID_ADDRESS.to_string()).is_success());
        assert!(!ProbeOutcome::Failed(ProbeError::TimedOut(1)).is_success());
    }

    #[tokio::test]
    async fn test_invalid_address_is_skipped() {
        let prober = stub_prober(1);
        let outcome = prober.probe(&classify("not-an-ip"), Some("80")).await;
        assert_eq!(outcome, ProbeOutcome::Skipped(INVALID_ADDRESS.to_string()));
    }

    #[tokio::test]
    async fn test_literal_without_port_resolves() {
        let prober = stub_prober(1);
        let outcome = prober.probe(&classify("1.1.1.1"), None).await;
        assert_eq!(outcome, ProbeOutcome::Resolved("1.1.1.1".parse().unwrap()));
    }

    #[tokio::test]
    async fn test_bad_ports_fail_without_network() {
        let prober = stub_prober(1);
        let target = classify("1.1.1.1");
        for port in ["0", "65536", "http", "-5", ":1"] {
            let outcome = prober.probe(&target, Some(port)).await;
            assert_eq!(outcome, ProbeOutcome::Failed(ProbeError::InvalidPort), "{port}");
        }
    }

    #[tokio::test]
    async fn test_open_port_connects() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port().to_string();

        let outcome = stub_prober(2).probe(&classify("127.0.0.1"), Some(&port)).await;
        assert_eq!(outcome, ProbeOutcome::Connected);
    }

    #[tokio::test]
    async fn test_closed_port_keeps_cause() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port().to_string();
        drop(listener);

        let outcome = stub_prober(2).probe(&classify("127.0.0.1"), Some(&port)).await;
        assert!(
            matches!(outcome, ProbeOutcome::Failed(ProbeError::Refused(_))),
            "{outcome:?}"
        );
    }

    #[tokio::test]
    async fn test_resolution_is_bounded() {
        let prober = Prober::with_resolver(Timeout::from_secs(1).unwrap(), Arc::new(HangingResolver));
        let start = Instant::now();

        let outcome = prober.probe(&classify("8.8.8.8"), None).await;

        assert!(matches!(outcome, ProbeOutcome::Failed(ProbeError::Resolution(_))));
        assert!(start.elapsed() < Duration::from_millis(1500));
    }
}
