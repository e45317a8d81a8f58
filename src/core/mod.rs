//! Core domain models for the deploy pipeline
//!
//! This module defines the fundamental structures that represent stages,
//! their states, and the run configuration.

pub mod config;
pub mod stage;
pub mod state;

pub use crate::core::config::DeployConfig;
pub use crate::core::stage::{Progress, Stage, StageError};
pub use crate::core::state::{PipelineStatus, StageRecord, StageState};
