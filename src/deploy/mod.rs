//! GradleRIO deploy: subprocess invocation and milestone translation

pub mod gradle;
pub mod milestones;

pub use crate::deploy::gradle::GradleRunner;
pub use crate::deploy::milestones::translate;

use thiserror::Error;

/// Errors from the deploy step
#[derive(Debug, Error)]
pub enum DeployError {
    /// The gradle process could not be launched or waited on
    #[error("could not run gradle: {0} (is gradle installed and on your PATH?)")]
    Gradle(#[from] std::io::Error),

    /// Gradle exited non-zero. Raw gradle errors are not user-legible, so
    /// the operator is pointed at the tool's own diagnostics instead.
    #[error("An error occurred while deploying code. Run GradleRIO directly for more details.")]
    Failed,
}

impl From<DeployError> for crate::core::stage::StageError {
    fn from(err: DeployError) -> Self {
        Self::new(err.to_string())
    }
}
