//! First-success race over the candidate address set
//!
//! All candidates are probed concurrently; the race resolves the instant
//! any probe reports reachable and fails only once every probe has come
//! back unreachable.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::net::probe::{ProbeOutcome, ReachabilityProbe};
use crate::net::ConnectivityError;

/// Race reachability probes across `addresses`, resolving on first success.
///
/// `on_attempt` fires once per address, in the order the candidates were
/// generated, at the moment its probe is launched. Completion order is not
/// guaranteed; the first `Reachable` outcome wins and the remaining probes
/// are abandoned with the task set. An empty candidate list fails
/// immediately with [`ConnectivityError::NoneReachable`].
pub async fn race<F>(
    probe: Arc<dyn ReachabilityProbe>,
    addresses: &[String],
    mut on_attempt: F,
) -> Result<(), ConnectivityError>
where
    F: FnMut(&str),
{
    let mut probes = JoinSet::new();

    for address in addresses {
        on_attempt(address);

        let probe = Arc::clone(&probe);
        let address = address.clone();
        probes.spawn(async move {
            let outcome = probe.probe(&address).await;
            (address, outcome)
        });
    }

    while let Some(joined) = probes.join_next().await {
        match joined {
            Ok((address, ProbeOutcome::Reachable)) => {
                debug!("robot answered at {address}");
                // Dropping the set abandons the probes still in flight;
                // their outcomes can no longer affect the resolution.
                return Ok(());
            }
            Ok((address, ProbeOutcome::Unreachable)) => {
                debug!("no answer from {address}");
            }
            Err(e) => {
                warn!("probe task failed to complete: {e}");
            }
        }
    }

    Err(ConnectivityError::NoneReachable)
}
