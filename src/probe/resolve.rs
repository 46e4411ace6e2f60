//! Name resolution behind a trait so the prober can be tested offline.

use crate::error::ProbeError;
use crate::types::Timeout;
use async_trait::async_trait;
use std::net::IpAddr;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// Forward resolution of a host name or address literal.
#[async_trait]
pub trait Resolve: Send + Sync {
    /// Resolve `host` to its first address.
    async fn resolve(&self, host: &str) -> Result<IpAddr, ProbeError>;
}

/// DNS resolver backed by `trust-dns-resolver`.
///
/// Address literals are answered locally without any query.
pub struct DnsResolver {
    inner: TokioAsyncResolver,
}

impl DnsResolver {
    /// Create a resolver whose per-query timeout matches the probe timeout.
    pub fn new(timeout: Timeout) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout.as_duration();
        opts.attempts = 1;

        Self {
            inner: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        }
    }
}

#[async_trait]
impl Resolve for DnsResolver {
    async fn resolve(&self, host: &str) -> Result<IpAddr, ProbeError> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(ip);
        }

        let response = self
            .inner
            .lookup_ip(host)
            .await
            .map_err(|e| ProbeError::Resolution(e.to_string()))?;

        response
            .iter()
            .next()
            .ok_or_else(|| ProbeError::Resolution(format!("no addresses found for '{}'", host)))
    }
}
