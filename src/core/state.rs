//! Stage and pipeline state models

use std::time::{Duration, Instant};

/// Overall pipeline status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStatus {
    /// Run has not started
    Pending,
    /// Run is in progress
    Running,
    /// Every stage succeeded or was skipped
    Succeeded,
    /// A stage failed; later stages never ran
    Failed,
}

/// State of a single stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageState {
    /// Stage has not started (or was cut off by an earlier failure)
    Pending,
    /// Stage's `should_run` decision was false
    Skipped,
    /// Stage is currently executing
    Running { started_at: Instant },
    /// Stage finished successfully
    Succeeded { duration: Duration },
    /// Stage finished with a failure
    Failed { error: String },
}

impl StageState {
    /// Check if the stage reached a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StageState::Skipped | StageState::Succeeded { .. } | StageState::Failed { .. }
        )
    }
}

/// A stage's name paired with where it ended up after a run
#[derive(Debug, Clone)]
pub struct StageRecord {
    pub name: String,
    pub state: StageState,
}
