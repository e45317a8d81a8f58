//! Current-network identity collaborator
//!
//! The robot network's name carries the team number, so the connectivity
//! stage needs to know which wifi network the operator's machine is on.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

/// Supplies the identity string of the network this machine is currently on
#[async_trait]
pub trait NetworkIdentitySource: Send + Sync {
    /// `None` when the identity cannot be determined (wired connection,
    /// no wifi hardware, platform tool missing, ...).
    async fn current_identity(&self) -> Option<String>;
}

/// Reads the SSID of the joined wifi network via the platform tool
#[derive(Debug, Clone, Default)]
pub struct WifiIdentity;

#[async_trait]
impl NetworkIdentitySource for WifiIdentity {
    async fn current_identity(&self) -> Option<String> {
        match ssid_from_platform_tool().await {
            Some(ssid) if !ssid.is_empty() => {
                debug!("current wifi network: {ssid}");
                Some(ssid)
            }
            _ => {
                warn!("could not determine the current wifi network");
                None
            }
        }
    }
}

#[cfg(target_os = "linux")]
async fn ssid_from_platform_tool() -> Option<String> {
    let output = Command::new("iwgetid").arg("-r").output().await.ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(target_os = "macos")]
async fn ssid_from_platform_tool() -> Option<String> {
    let output = Command::new("networksetup")
        .args(["-getairportnetwork", "en0"])
        .output()
        .await
        .ok()?;
    if !output.status.success() {
        return None;
    }
    // "Current Wi-Fi Network: <ssid>"
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .split_once(": ")
        .map(|(_, ssid)| ssid.trim().to_string())
}

#[cfg(target_os = "windows")]
async fn ssid_from_platform_tool() -> Option<String> {
    let output = Command::new("netsh")
        .args(["wlan", "show", "interfaces"])
        .output()
        .await
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find(|line| line.trim_start().starts_with("SSID"))
        .and_then(|line| line.split_once(':'))
        .map(|(_, ssid)| ssid.trim().to_string())
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
async fn ssid_from_platform_tool() -> Option<String> {
    None
}
