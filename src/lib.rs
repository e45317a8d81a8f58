//! riodeploy - deploy helper for FRC robots
//!
//! Verifies the roboRIO is reachable on the current network (racing
//! probes across the candidate addresses, first success wins), then runs
//! the GradleRIO deploy while translating its raw output into
//! human-readable milestones.

pub mod cli;
pub mod core;
pub mod deploy;
pub mod execution;
pub mod net;
pub mod stages;

// Re-export commonly used types
pub use crate::core::config::DeployConfig;
pub use crate::core::stage::{Progress, Stage, StageError};
pub use crate::core::state::{PipelineStatus, StageRecord, StageState};
pub use crate::deploy::{DeployError, GradleRunner};
pub use crate::execution::runner::{ExecutionEvent, PipelineOutcome, PipelineRunner};
pub use crate::net::addresses::{candidate_addresses, TeamNumber};
pub use crate::net::identity::{NetworkIdentitySource, WifiIdentity};
pub use crate::net::probe::{ProbeOutcome, ReachabilityProbe, TcpProbe};
pub use crate::net::ConnectivityError;
pub use crate::stages::{ConnectivityStage, DeployStage};
