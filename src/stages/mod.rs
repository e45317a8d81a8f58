//! The two stages that make up a deploy run

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::core::stage::{Progress, Stage, StageError};
use crate::deploy::GradleRunner;
use crate::net::addresses::{candidate_addresses, TeamNumber};
use crate::net::identity::NetworkIdentitySource;
use crate::net::probe::ReachabilityProbe;
use crate::net::race::race;

/// Verifies the robot is reachable on the current network before deploying.
///
/// Derives the team number from the wifi identity, generates the candidate
/// address set, and races probes across it.
pub struct ConnectivityStage {
    identity: Arc<dyn NetworkIdentitySource>,
    probe: Arc<dyn ReachabilityProbe>,
    enabled: bool,
}

impl ConnectivityStage {
    pub fn new(
        identity: Arc<dyn NetworkIdentitySource>,
        probe: Arc<dyn ReachabilityProbe>,
        enabled: bool,
    ) -> Self {
        Self {
            identity,
            probe,
            enabled,
        }
    }
}

#[async_trait]
impl Stage for ConnectivityStage {
    fn name(&self) -> &str {
        "Ensuring robot connection"
    }

    fn should_run(&self) -> bool {
        self.enabled
    }

    async fn execute(&self, progress: &Progress) -> Result<(), StageError> {
        progress.emit("Checking network");

        // An unobtainable identity falls through to the invalid-identity
        // error for the empty string, same as any other non-robot network.
        let identity = self.identity.current_identity().await.unwrap_or_default();
        let team = TeamNumber::from_network_identity(&identity)?;
        info!("network {identity:?} names team {team}");

        progress.emit("Checking connection");
        let addresses = candidate_addresses(team);
        race(Arc::clone(&self.probe), &addresses, |address| {
            progress.emit(&format!("Testing connection to {address}..."));
        })
        .await?;

        Ok(())
    }
}

/// Hands the actual deploy off to GradleRIO, narrating its progress
pub struct DeployStage {
    runner: GradleRunner,
}

impl DeployStage {
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self {
            runner: GradleRunner::new(working_dir.as_ref()),
        }
    }
}

#[async_trait]
impl Stage for DeployStage {
    fn name(&self) -> &str {
        "Deploying robot code"
    }

    async fn execute(&self, progress: &Progress) -> Result<(), StageError> {
        progress.emit("Booting up GradleRIO...");
        self.runner.deploy(progress).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::probe::ProbeOutcome;
    use std::sync::Mutex;

    struct FixedIdentity(Option<String>);

    #[async_trait]
    impl NetworkIdentitySource for FixedIdentity {
        async fn current_identity(&self) -> Option<String> {
            self.0.clone()
        }
    }

    struct AlwaysReachable;

    #[async_trait]
    impl ReachabilityProbe for AlwaysReachable {
        async fn probe(&self, _address: &str) -> ProbeOutcome {
            ProbeOutcome::Reachable
        }
    }

    struct NeverReachable;

    #[async_trait]
    impl ReachabilityProbe for NeverReachable {
        async fn probe(&self, _address: &str) -> ProbeOutcome {
            ProbeOutcome::Unreachable
        }
    }

    fn collecting_progress() -> (Progress, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let progress = Progress::new(move |message| {
            sink.lock().unwrap().push(message.to_string());
        });
        (progress, seen)
    }

    #[tokio::test]
    async fn test_connectivity_succeeds_on_robot_network() {
        let stage = ConnectivityStage::new(
            Arc::new(FixedIdentity(Some("4488_FRC".to_string()))),
            Arc::new(AlwaysReachable),
            true,
        );
        let (progress, seen) = collecting_progress();

        assert!(stage.execute(&progress).await.is_ok());

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], "Checking network");
        assert_eq!(seen[1], "Checking connection");
        // One attempt message per candidate, in generation order
        assert_eq!(seen[2], "Testing connection to roborio-4488-FRC.local...");
        assert_eq!(seen[3], "Testing connection to 10.44.88.2...");
        assert_eq!(seen.len(), 8);
    }

    #[tokio::test]
    async fn test_connectivity_rejects_non_robot_network() {
        let stage = ConnectivityStage::new(
            Arc::new(FixedIdentity(Some("FRC4488".to_string()))),
            Arc::new(AlwaysReachable),
            true,
        );

        let err = stage.execute(&Progress::noop()).await.unwrap_err();
        assert!(err.to_string().contains("FRC4488"));
        assert!(err.to_string().contains("--no-net-check"));
    }

    #[tokio::test]
    async fn test_connectivity_reports_missing_identity_as_invalid() {
        let stage = ConnectivityStage::new(
            Arc::new(FixedIdentity(None)),
            Arc::new(AlwaysReachable),
            true,
        );

        let err = stage.execute(&Progress::noop()).await.unwrap_err();
        assert!(err.to_string().contains("is not a valid robot network"));
    }

    #[tokio::test]
    async fn test_connectivity_fails_when_nothing_answers() {
        let stage = ConnectivityStage::new(
            Arc::new(FixedIdentity(Some("4488_FRC".to_string()))),
            Arc::new(NeverReachable),
            true,
        );

        let err = stage.execute(&Progress::noop()).await.unwrap_err();
        assert!(err.to_string().contains("could not establish communication"));
    }

    #[test]
    fn test_connectivity_should_run_follows_config() {
        let enabled = ConnectivityStage::new(
            Arc::new(FixedIdentity(None)),
            Arc::new(NeverReachable),
            true,
        );
        let disabled = ConnectivityStage::new(
            Arc::new(FixedIdentity(None)),
            Arc::new(NeverReachable),
            false,
        );
        assert!(enabled.should_run());
        assert!(!disabled.should_run());
    }

    #[test]
    fn test_deploy_stage_always_runs() {
        let stage = DeployStage::new(".");
        assert!(stage.should_run());
        assert_eq!(stage.name(), "Deploying robot code");
    }
}
