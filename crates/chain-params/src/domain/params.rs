//! # Chain Parameters
//!
//! The top-level per-network record. Fields are private: outside this crate
//! the record is read-only, and the single allowed mutation (deployment
//! windows) goes through `registry::DeploymentOverrides`.

use std::collections::BTreeMap;

use serde::Serialize;
use shared_types::{AssetId, Block, Hash256, Script};

use super::consensus::ConsensusParams;
use super::deployment::{validate_deployments, DeploymentPos};
use super::errors::{ChainParamsError, ChainParamsResult};

/// Network name of the production profile.
pub const MAIN: &str = "main";
/// Network name of the regression-test profile.
pub const REGTEST: &str = "regtest";
/// Default network name of the custom profile.
pub const CUSTOM: &str = "custom";

/// Address-encoding prefix kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Base58Type {
    PubkeyAddress = 0,
    ScriptAddress = 1,
    BlindedAddress = 2,
    SecretKey = 3,
    ExtPublicKey = 4,
    ExtSecretKey = 5,
    ParentPubkeyAddress = 6,
    ParentScriptAddress = 7,
}

impl Base58Type {
    /// Number of prefix kinds.
    pub const COUNT: usize = 8;
}

/// Prefix table keyed by `Base58Type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    prefixes: [Vec<u8>; Base58Type::COUNT],
}

impl Base58Prefixes {
    /// Private testing namespace (regtest and custom networks).
    pub fn test_namespace() -> Self {
        Self {
            prefixes: [
                vec![235],
                vec![75],
                vec![4],
                vec![239],
                vec![0x04, 0x35, 0x87, 0xCF],
                vec![0x04, 0x35, 0x83, 0x94],
                vec![111],
                vec![196],
            ],
        }
    }

    /// Production namespace.
    pub fn production() -> Self {
        Self {
            prefixes: [
                vec![0],
                vec![5],
                vec![11],
                vec![128],
                vec![0x04, 0x88, 0xB2, 0x1E],
                vec![0x04, 0x88, 0xAD, 0xE4],
                vec![0],
                vec![5],
            ],
        }
    }

    /// Prefix bytes for `kind`.
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        &self.prefixes[kind as usize]
    }
}

/// Known-good block hashes by height.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CheckpointData {
    pub checkpoints: BTreeMap<u64, Hash256>,
}

impl CheckpointData {
    /// A table holding only the genesis checkpoint.
    pub fn genesis_only(genesis_hash: Hash256) -> Self {
        let mut checkpoints = BTreeMap::new();
        checkpoints.insert(0, genesis_hash);
        Self { checkpoints }
    }

    pub fn get(&self, height: u64) -> Option<&Hash256> {
        self.checkpoints.get(&height)
    }
}

/// Transaction statistics at a reference point, for sync progress estimates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ChainTxData {
    /// Unix time of the reference block.
    pub time: i64,
    /// Transactions up to and including the reference block.
    pub tx_count: i64,
    /// Estimated transactions per second after the reference block.
    pub tx_rate: f64,
}

/// Node-behaviour switches that differ between networks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkFlags {
    pub mining_requires_peers: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    /// Treat outputs anyone can spend as belonging to the local wallet.
    pub anyonecanspend_aremine: bool,
}

/// The complete, immutable description of one network.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChainParameters {
    pub(crate) network_id: String,
    pub(crate) consensus: ConsensusParams,
    pub(crate) message_start: [u8; 4],
    pub(crate) default_port: u16,
    pub(crate) prune_after_height: u64,
    pub(crate) parent_genesis_block_hash: Hash256,
    pub(crate) genesis: Block,
    pub(crate) base58_prefixes: Base58Prefixes,
    pub(crate) checkpoint_data: CheckpointData,
    pub(crate) chain_tx_data: ChainTxData,
    pub(crate) fixed_seeds: Vec<String>,
    pub(crate) dns_seeds: Vec<String>,
    pub(crate) coinbase_destination: Script,
    pub(crate) flags: NetworkFlags,
}

impl ChainParameters {
    /// Network names with dedicated support beyond the fixed profiles.
    pub fn supported_chains() -> &'static [&'static str] {
        &[CUSTOM]
    }

    pub fn network_id(&self) -> &str {
        &self.network_id
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    /// Wire-framing magic.
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn prune_after_height(&self) -> u64 {
        self.prune_after_height
    }

    pub fn parent_genesis_block_hash(&self) -> &Hash256 {
        &self.parent_genesis_block_hash
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn pegged_asset(&self) -> &AssetId {
        &self.consensus.pegged_asset
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    pub fn checkpoints(&self) -> &CheckpointData {
        &self.checkpoint_data
    }

    pub fn chain_tx_data(&self) -> &ChainTxData {
        &self.chain_tx_data
    }

    pub fn fixed_seeds(&self) -> &[String] {
        &self.fixed_seeds
    }

    pub fn dns_seeds(&self) -> &[String] {
        &self.dns_seeds
    }

    /// Required coinbase destination; empty means any destination.
    pub fn coinbase_destination(&self) -> &Script {
        &self.coinbase_destination
    }

    pub fn flags(&self) -> &NetworkFlags {
        &self.flags
    }

    pub fn mining_requires_peers(&self) -> bool {
        self.flags.mining_requires_peers
    }

    pub fn default_consistency_checks(&self) -> bool {
        self.flags.default_consistency_checks
    }

    pub fn require_standard(&self) -> bool {
        self.flags.require_standard
    }

    pub fn mine_blocks_on_demand(&self) -> bool {
        self.flags.mine_blocks_on_demand
    }

    pub fn anyonecanspend_aremine(&self) -> bool {
        self.flags.anyonecanspend_aremine
    }

    /// Replace one deployment's window, rejecting invalid results.
    pub(crate) fn update_deployment_window(
        &mut self,
        pos: DeploymentPos,
        start_time: i64,
        timeout: i64,
    ) -> ChainParamsResult<()> {
        let mut deployments = self.consensus.deployments;
        deployments[pos.index()].start_time = start_time;
        deployments[pos.index()].timeout = timeout;
        validate_deployments(&deployments)?;
        self.consensus.deployments = deployments;
        Ok(())
    }

    /// Post-construction invariants shared by every profile.
    pub(crate) fn check_invariants(&self) -> ChainParamsResult<()> {
        validate_deployments(&self.consensus.deployments)?;
        let genesis_hash = self.genesis.hash();
        if self.consensus.hash_genesis_block != genesis_hash
            || self.checkpoint_data.get(0) != Some(&genesis_hash)
        {
            return Err(ChainParamsError::GenesisMismatch {
                network: self.network_id.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_namespace_prefixes() {
        let p = Base58Prefixes::test_namespace();
        assert_eq!(p.get(Base58Type::PubkeyAddress), &[235]);
        assert_eq!(p.get(Base58Type::ScriptAddress), &[75]);
        assert_eq!(p.get(Base58Type::BlindedAddress), &[4]);
        assert_eq!(p.get(Base58Type::SecretKey), &[239]);
        assert_eq!(p.get(Base58Type::ExtPublicKey), &[0x04, 0x35, 0x87, 0xCF]);
        assert_eq!(p.get(Base58Type::ExtSecretKey), &[0x04, 0x35, 0x83, 0x94]);
        assert_eq!(p.get(Base58Type::ParentPubkeyAddress), &[111]);
        assert_eq!(p.get(Base58Type::ParentScriptAddress), &[196]);
    }

    #[test]
    fn test_production_prefixes() {
        let p = Base58Prefixes::production();
        assert_eq!(p.get(Base58Type::PubkeyAddress), &[0]);
        assert_eq!(p.get(Base58Type::ScriptAddress), &[5]);
        assert_eq!(p.get(Base58Type::BlindedAddress), &[11]);
        assert_eq!(p.get(Base58Type::SecretKey), &[128]);
        assert_eq!(p.get(Base58Type::ExtPublicKey), &[0x04, 0x88, 0xB2, 0x1E]);
        assert_eq!(p.get(Base58Type::ParentScriptAddress), &[5]);
    }

    #[test]
    fn test_genesis_only_checkpoints() {
        let hash = Hash256([0x42; 32]);
        let data = CheckpointData::genesis_only(hash);
        assert_eq!(data.get(0), Some(&hash));
        assert_eq!(data.checkpoints.len(), 1);
    }

    #[test]
    fn test_supported_chains() {
        assert_eq!(ChainParameters::supported_chains(), &["custom"]);
    }
}
