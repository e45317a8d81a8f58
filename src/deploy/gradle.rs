//! GradleRIO subprocess runner
//!
//! Spawns `gradle deploy` in the chosen working directory, narrates its
//! streaming output as milestones, and maps the exit status to the deploy
//! stage's result.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::core::stage::Progress;
use crate::deploy::{milestones, DeployError};

/// Runs the GradleRIO deploy and reports milestones as they stream by
#[derive(Debug, Clone)]
pub struct GradleRunner {
    /// Path to the gradle executable (defaults to "gradle" on PATH)
    gradle_path: String,

    /// Directory the deploy is invoked in
    working_dir: PathBuf,
}

impl GradleRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            gradle_path: "gradle".to_string(),
            working_dir: working_dir.into(),
        }
    }

    /// Override the gradle executable (wrapper scripts, tests)
    pub fn with_gradle_path(mut self, path: impl Into<String>) -> Self {
        self.gradle_path = path.into();
        self
    }

    /// Run `gradle deploy`, emitting one progress message per milestone
    /// marker observed in its stdout, then await the exit status.
    ///
    /// stdout is consumed exactly once, in order, by this single reader.
    /// Gradle's own diagnostics go to the debug log; the returned error
    /// carries a fixed operator-facing message instead.
    pub async fn deploy(&self, progress: &Progress) -> Result<(), DeployError> {
        debug!(
            "spawning {} deploy in {}",
            self.gradle_path,
            self.working_dir.display()
        );

        let mut child = Command::new(&self.gradle_path)
            .arg("deploy")
            .current_dir(&self.working_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        if let Some(stdout) = child.stdout.take() {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                debug!(target: "gradle", "{line}");
                for message in milestones::translate(&line) {
                    progress.emit(message);
                }
            }
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            warn!("gradle deploy exited with {status}");
            Err(DeployError::Failed)
        }
    }
}
