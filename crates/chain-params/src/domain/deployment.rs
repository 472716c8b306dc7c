//! # Version-Bits Deployments
//!
//! A fixed set of feature slots, each signalled on one header version bit
//! and active for signalling between a start time and a timeout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{ChainParamsError, ChainParamsResult};

/// Highest usable version bit.
pub const MAX_DEPLOYMENT_BIT: u8 = 31;

/// Deployment slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeploymentPos {
    /// Reserved slot for exercising the activation state machine.
    TestDummy = 0,
    /// Relative lock-time (BIP 68/112/113).
    Csv = 1,
    /// Segregated witness.
    Segwit = 2,
}

impl DeploymentPos {
    /// Number of slots.
    pub const COUNT: usize = 3;

    /// All slots, in index order.
    pub fn all() -> [DeploymentPos; Self::COUNT] {
        [Self::TestDummy, Self::Csv, Self::Segwit]
    }

    /// Name used by `-vbparams` and in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TestDummy => "testdummy",
            Self::Csv => "csv",
            Self::Segwit => "segwit",
        }
    }

    /// Index into `ConsensusParams::deployments`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DeploymentPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeploymentPos {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|pos| pos.name() == s)
            .ok_or_else(|| ChainParamsError::UnknownDeployment(s.to_string()))
    }
}

/// Signalling window of one deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentParams {
    /// Version bit.
    pub bit: u8,
    /// Median time past at which signalling starts.
    pub start_time: i64,
    /// Median time past after which the deployment fails if not locked in.
    pub timeout: i64,
}

impl DeploymentParams {
    /// Start-time sentinel: active from genesis.
    pub const ALWAYS_ACTIVE: i64 = -1;
    /// Timeout sentinel: never times out.
    pub const NO_TIMEOUT: i64 = i64::MAX;

    pub const fn new(bit: u8, start_time: i64, timeout: i64) -> Self {
        Self {
            bit,
            start_time,
            timeout,
        }
    }

    /// `start <= timeout` unless either side is a sentinel.
    pub fn is_window_valid(&self) -> bool {
        self.start_time == Self::ALWAYS_ACTIVE
            || self.timeout == Self::NO_TIMEOUT
            || self.start_time <= self.timeout
    }
}

/// Check bit range, bit uniqueness and window ordering across all slots.
pub fn validate_deployments(
    deployments: &[DeploymentParams; DeploymentPos::COUNT],
) -> ChainParamsResult<()> {
    let mut used_bits: u32 = 0;
    for pos in DeploymentPos::all() {
        let deployment = &deployments[pos.index()];
        if deployment.bit > MAX_DEPLOYMENT_BIT || used_bits & (1 << deployment.bit) != 0 {
            return Err(ChainParamsError::InvalidDeploymentBit {
                deployment: pos.name().to_string(),
                bit: deployment.bit,
            });
        }
        used_bits |= 1 << deployment.bit;

        if !deployment.is_window_valid() {
            return Err(ChainParamsError::InvalidDeploymentWindow {
                deployment: pos.name().to_string(),
                start: deployment.start_time,
                timeout: deployment.timeout,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots() -> [DeploymentParams; DeploymentPos::COUNT] {
        [
            DeploymentParams::new(28, 0, 999_999_999_999),
            DeploymentParams::new(0, 0, 999_999_999_999),
            DeploymentParams::new(1, 0, 999_999_999_999),
        ]
    }

    #[test]
    fn test_deployment_names_roundtrip() {
        for pos in DeploymentPos::all() {
            assert_eq!(pos.name().parse::<DeploymentPos>().unwrap(), pos);
        }
    }

    #[test]
    fn test_unknown_deployment_name() {
        assert!(matches!(
            "taproot".parse::<DeploymentPos>(),
            Err(ChainParamsError::UnknownDeployment(name)) if name == "taproot"
        ));
    }

    #[test]
    fn test_valid_slots() {
        assert!(validate_deployments(&slots()).is_ok());
    }

    #[test]
    fn test_duplicate_bit_rejected() {
        let mut d = slots();
        d[DeploymentPos::Segwit.index()].bit = 0;
        assert!(matches!(
            validate_deployments(&d),
            Err(ChainParamsError::InvalidDeploymentBit { bit: 0, .. })
        ));
    }

    #[test]
    fn test_bit_out_of_range_rejected() {
        let mut d = slots();
        d[DeploymentPos::TestDummy.index()].bit = 32;
        assert!(validate_deployments(&d).is_err());
    }

    #[test]
    fn test_inverted_window_rejected() {
        let mut d = slots();
        d[DeploymentPos::Csv.index()] = DeploymentParams::new(0, 200, 100);
        assert!(matches!(
            validate_deployments(&d),
            Err(ChainParamsError::InvalidDeploymentWindow { start: 200, timeout: 100, .. })
        ));
    }

    #[test]
    fn test_sentinels_bypass_ordering() {
        assert!(DeploymentParams::new(0, DeploymentParams::ALWAYS_ACTIVE, 0).is_window_valid());
        assert!(DeploymentParams::new(0, 500, DeploymentParams::NO_TIMEOUT).is_window_valid());
    }
}
