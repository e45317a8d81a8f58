//! Run configuration

use std::path::PathBuf;

/// Explicit configuration for one deploy run, built from the CLI options.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Whether the connectivity stage runs before deploying.
    pub net_check_enabled: bool,

    /// Working directory the deploy tool is invoked in.
    pub working_dir: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            net_check_enabled: true,
            working_dir: PathBuf::from("."),
        }
    }
}
