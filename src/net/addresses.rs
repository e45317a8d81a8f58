//! Team numbers and the candidate addresses derived from them
//!
//! The address list is a compatibility surface: operators rely on specific
//! entries (mDNS name, the `10.TE.AM.2` static fallback, the USB gateway),
//! so the set and its derivation arithmetic must not change.

use std::fmt;

use crate::net::ConnectivityError;

/// An FRC team number, parsed from the current network identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamNumber(u32);

impl TeamNumber {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Extract the team number from a network identity string.
    ///
    /// Robot networks are named `<team>_<suffix>`; everything before the
    /// first `_` must be purely decimal digits. Anything else (including an
    /// empty identity) is rejected, naming the offending string.
    pub fn from_network_identity(identity: &str) -> Result<Self, ConnectivityError> {
        let digits = identity.split('_').next().unwrap_or_default();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConnectivityError::InvalidNetworkIdentity(
                identity.to_string(),
            ));
        }

        let number = digits
            .parse::<u32>()
            .map_err(|_| ConnectivityError::InvalidNetworkIdentity(identity.to_string()))?;

        Ok(Self(number))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The ordered candidate addresses a roboRIO may answer on.
///
/// Always exactly six entries: the mDNS name, the `10.TE.AM.2` static
/// address (team number split by integer division and modulo 100), the USB
/// gateway, and three name-resolution variants. Order only matters for
/// progress reporting; all candidates are probed concurrently.
pub fn candidate_addresses(team: TeamNumber) -> Vec<String> {
    let t = team.get();
    vec![
        format!("roborio-{t}-FRC.local"),
        format!("10.{}.{}.2", t / 100, t % 100),
        "172.22.11.2".to_string(),
        format!("roborio-{t}-FRC"),
        format!("roborio-{t}-FRC.lan"),
        format!("roborio-{t}-FRC.frc-field.local"),
    ]
}
