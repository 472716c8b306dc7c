//! # Consensus Parameters
//!
//! Constants every consensus check reads. Built once per profile and never
//! mutated afterwards, except for deployment windows through the registry's
//! test-support handle.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::{AssetId, Hash256, Script};

use super::deployment::{DeploymentParams, DeploymentPos};

/// Consensus thresholds and identities for one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusParams {
    /// Hash of the genesis block; zero until genesis is assembled.
    pub hash_genesis_block: Hash256,
    /// Blocks between subsidy halvings.
    pub subsidy_halving_interval: i32,
    /// Height enforcing height-in-coinbase.
    pub bip34_height: i32,
    /// Block hash at `bip34_height`.
    pub bip34_hash: Hash256,
    /// Height enforcing CHECKLOCKTIMEVERIFY.
    pub bip65_height: i32,
    /// Height enforcing strict DER signatures.
    pub bip66_height: i32,
    /// Easiest allowed target on this chain.
    pub pow_limit: U256,
    /// Easiest allowed target on the parent chain (peg-in proofs).
    pub parent_chain_pow_limit: U256,
    /// Retarget timespan in seconds.
    pub pow_target_timespan: i64,
    /// Target block spacing in seconds.
    pub pow_target_spacing: i64,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    /// Signalling blocks needed within a window to lock in a deployment.
    pub rule_change_activation_threshold: u32,
    /// Blocks per signalling window.
    pub miner_confirmation_window: u32,
    /// Version-bits deployments, indexed by `DeploymentPos`.
    pub deployments: [DeploymentParams; DeploymentPos::COUNT],
    /// The best chain must have at least this much work.
    pub minimum_chain_work: U256,
    /// Signatures in ancestors of this block are assumed valid.
    pub default_assume_valid: Hash256,
    /// Federation script controlling peg-outs.
    pub fedpeg_script: Script,
    /// Asset representing value pegged in from the parent chain.
    pub pegged_asset: AssetId,
}

impl ConsensusParams {
    /// Parameters of one deployment slot.
    pub fn deployment(&self, pos: DeploymentPos) -> &DeploymentParams {
        &self.deployments[pos.index()]
    }

    /// Blocks between difficulty retargets.
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        if self.pow_target_spacing == 0 {
            return 0;
        }
        self.pow_target_timespan / self.pow_target_spacing
    }
}

/// Deployment windows shared by the test-oriented profiles: every slot
/// signals from time 0 with a far-future timeout.
pub fn test_deployments() -> [DeploymentParams; DeploymentPos::COUNT] {
    const TEST_TIMEOUT: i64 = 999_999_999_999;
    let mut deployments = [DeploymentParams::new(0, 0, TEST_TIMEOUT); DeploymentPos::COUNT];
    deployments[DeploymentPos::TestDummy.index()] = DeploymentParams::new(28, 0, TEST_TIMEOUT);
    deployments[DeploymentPos::Csv.index()] = DeploymentParams::new(0, 0, TEST_TIMEOUT);
    deployments[DeploymentPos::Segwit.index()] = DeploymentParams::new(1, 0, TEST_TIMEOUT);
    deployments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::deployment::validate_deployments;

    #[test]
    fn test_test_deployments_bits() {
        let d = test_deployments();
        assert_eq!(d[DeploymentPos::TestDummy.index()].bit, 28);
        assert_eq!(d[DeploymentPos::Csv.index()].bit, 0);
        assert_eq!(d[DeploymentPos::Segwit.index()].bit, 1);
        assert!(validate_deployments(&d).is_ok());
    }

    #[test]
    fn test_difficulty_adjustment_interval() {
        let params = ConsensusParams {
            hash_genesis_block: Hash256::ZERO,
            subsidy_halving_interval: 150,
            bip34_height: 0,
            bip34_hash: Hash256::ZERO,
            bip65_height: 0,
            bip66_height: 0,
            pow_limit: U256::MAX,
            parent_chain_pow_limit: U256::MAX,
            pow_target_timespan: 14 * 24 * 60 * 60,
            pow_target_spacing: 10 * 60,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: true,
            rule_change_activation_threshold: 108,
            miner_confirmation_window: 144,
            deployments: test_deployments(),
            minimum_chain_work: U256::zero(),
            default_assume_valid: Hash256::ZERO,
            fedpeg_script: Script::op_true(),
            pegged_asset: AssetId::default(),
        };
        assert_eq!(params.difficulty_adjustment_interval(), 2016);
    }
}
