//! Command-line interface

pub mod output;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::core::config::DeployConfig;

/// Deploy helper for FRC robots
#[derive(Debug, Parser, Clone)]
#[command(name = "riodeploy")]
#[command(version = "0.1.0")]
#[command(
    about = "Checks roboRIO connectivity, then deploys robot code through GradleRIO",
    long_about = None
)]
pub struct Cli {
    /// Working directory for the deploy step
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Disable network checking (this will still be performed by GradleRIO)
    #[arg(short = 'n', long = "no-net-check")]
    pub no_net_check: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }

    /// Turn the parsed options into an explicit run configuration
    pub fn to_config(&self) -> DeployConfig {
        DeployConfig {
            net_check_enabled: !self.no_net_check,
            working_dir: self.dir.clone(),
        }
    }
}
