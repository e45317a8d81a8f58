//! Reachability probing for a single candidate address

use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Whether one address answered at the time it was probed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable,
    Unreachable,
}

/// Answers whether a candidate address is currently reachable.
///
/// Probes never error: timeouts, name-resolution failures, and refused
/// connections all fold into [`ProbeOutcome::Unreachable`].
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn probe(&self, address: &str) -> ProbeOutcome;
}

/// Probe that attempts a TCP connection, bounded by a timeout.
///
/// The roboRIO serves its web configuration on port 80, so an open
/// connection there is a good proxy for "we can deploy to this thing".
#[derive(Debug, Clone)]
pub struct TcpProbe {
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }
}

impl Default for TcpProbe {
    fn default() -> Self {
        Self::new(80, Duration::from_secs(5))
    }
}

#[async_trait]
impl ReachabilityProbe for TcpProbe {
    async fn probe(&self, address: &str) -> ProbeOutcome {
        let target = format!("{}:{}", address, self.port);

        match timeout(self.timeout, TcpStream::connect(&target)).await {
            Ok(Ok(_)) => {
                debug!("{target} answered");
                ProbeOutcome::Reachable
            }
            Ok(Err(e)) => {
                debug!("{target} unreachable: {e}");
                ProbeOutcome::Unreachable
            }
            Err(_) => {
                debug!("{target} timed out");
                ProbeOutcome::Unreachable
            }
        }
    }
}
