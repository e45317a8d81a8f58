//! Robot network plumbing: candidate addresses, reachability probes, and
//! the first-success connection race.

pub mod addresses;
pub mod identity;
pub mod probe;
pub mod race;

pub use crate::net::addresses::{candidate_addresses, TeamNumber};
pub use crate::net::identity::{NetworkIdentitySource, WifiIdentity};
pub use crate::net::probe::{ProbeOutcome, ReachabilityProbe, TcpProbe};
pub use crate::net::race::race;

use thiserror::Error;

/// Errors from the connectivity check
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectivityError {
    /// The current network identity does not name a robot network
    #[error("{0:?} is not a valid robot network (skip this check with --no-net-check)")]
    InvalidNetworkIdentity(String),

    /// Every candidate address was probed and none answered
    #[error("could not establish communication with the roboRIO (skip this check with --no-net-check)")]
    NoneReachable,
}

impl From<ConnectivityError> for crate::core::stage::StageError {
    fn from(err: ConnectivityError) -> Self {
        Self::new(err.to_string())
    }
}
