//! TCP connect check.
//!
//! Completes the handshake using the operating system's socket API and
//! releases the connection straight away. No data is exchanged.

use crate::error::ProbeError;
use crate::types::Timeout;
use std::net::SocketAddr;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Attempt a TCP connection to `addr`, giving up after `limit`.
pub async fn connect(addr: SocketAddr, limit: Timeout) -> Result<(), ProbeError> {
    match timeout(limit.as_duration(), TcpStream::connect(addr)).await {
        Ok(Ok(stream)) => {
            drop(stream);
            Ok(())
        }
        Ok(Err(e)) => Err(ProbeError::from_io(&e)),
        Err(_) => Err(ProbeError::TimedOut(limit.as_secs())),
    }
}
