//! The stage seam: named units of work that report live progress
//!
//! A [`Stage`] decides up front whether it runs at all, then executes to a
//! single terminal result while emitting ordered human-readable progress
//! messages through a [`Progress`] handle. The pipeline runner forwards
//! those messages to its observers in emission order.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// The failure a stage reports across the stage boundary.
///
/// Stages convert their internal errors (probe timeouts, subprocess
/// failures, ...) into one of these; nothing rawer crosses into the
/// pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct StageError {
    message: String,
}

impl StageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Handler invoked for each progress message, in emission order
pub type ProgressHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Handle a stage emits progress messages through
#[derive(Clone)]
pub struct Progress {
    handler: ProgressHandler,
}

impl Progress {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// A handle that discards everything (useful in tests)
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    /// Emit one progress message
    pub fn emit(&self, message: &str) {
        (self.handler)(message);
    }
}

/// A named unit of work in the deploy pipeline
#[async_trait]
pub trait Stage: Send + Sync {
    /// Human-readable stage name, shown to the operator
    fn name(&self) -> &str;

    /// Decided before execution; `false` records the stage as Skipped
    fn should_run(&self) -> bool {
        true
    }

    /// Run the stage to completion, emitting progress along the way
    async fn execute(&self, progress: &Progress) -> Result<(), StageError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_progress_preserves_emission_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let progress = Progress::new(move |message| {
            sink.lock().unwrap().push(message.to_string());
        });

        progress.emit("first");
        progress.emit("second");
        progress.emit("third");

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_noop_progress_does_nothing() {
        let progress = Progress::noop();
        progress.emit("ignored");
    }

    #[test]
    fn test_stage_error_displays_message() {
        let error = StageError::new("it broke");
        assert_eq!(error.to_string(), "it broke");
    }
}
