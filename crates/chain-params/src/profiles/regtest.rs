//! # Regression-Test Profile
//!
//! Fixed constants. Only the two scripts are configurable.

use primitive_types::U256;
use shared_types::{Hash256, Script};
use tracing::info;

use super::{
    seal_genesis, test_pow_limit, GenesisSeed, DEFAULT_PARENT_GENESIS_HASH, DEFAULT_PORT,
    DEFAULT_PRUNE_AFTER_HEIGHT, TEST_MESSAGE_START,
};
use crate::algorithms::{resolve_script_arg, DEFAULT_REWARD_SHARDS};
use crate::domain::{
    test_deployments, Base58Prefixes, ChainParameters, ChainParamsResult, ChainTxData,
    CheckpointData, ConsensusParams, NetworkFlags, REGTEST,
};
use crate::ports::ArgSource;

/// Build the `regtest` parameters, reading `signblockscript` and
/// `fedpegscript` from `args`.
pub fn build_regtest_parameters(args: &dyn ArgSource) -> ChainParamsResult<ChainParameters> {
    let default_script = Script::op_true();
    let challenge_script = resolve_script_arg(args, "signblockscript", REGTEST, &default_script)?;
    let fedpeg_script = resolve_script_arg(args, "fedpegscript", REGTEST, &default_script)?;

    let mut consensus = ConsensusParams {
        hash_genesis_block: Hash256::ZERO,
        subsidy_halving_interval: 150,
        // Far in the future so version-1 blocks stay valid in tests
        bip34_height: 100_000_000,
        bip34_hash: Hash256::ZERO,
        bip65_height: 1351,
        bip66_height: 1251,
        pow_limit: test_pow_limit(),
        parent_chain_pow_limit: test_pow_limit(),
        pow_target_timespan: 14 * 24 * 60 * 60,
        pow_target_spacing: 10 * 60,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: true,
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        deployments: test_deployments(),
        minimum_chain_work: U256::zero(),
        default_assume_valid: Hash256::ZERO,
        fedpeg_script,
        pegged_asset: Default::default(),
    };

    let parent_genesis_block_hash = DEFAULT_PARENT_GENESIS_HASH;
    let genesis = seal_genesis(
        &mut consensus,
        &GenesisSeed {
            network_id: REGTEST,
            challenge_script: &challenge_script,
            parent_genesis_hash: parent_genesis_block_hash,
            reward_shards: DEFAULT_REWARD_SHARDS,
        },
    )?;

    let params = ChainParameters {
        network_id: REGTEST.to_string(),
        checkpoint_data: CheckpointData::genesis_only(consensus.hash_genesis_block),
        consensus,
        message_start: TEST_MESSAGE_START,
        default_port: DEFAULT_PORT,
        prune_after_height: DEFAULT_PRUNE_AFTER_HEIGHT,
        parent_genesis_block_hash,
        genesis,
        base58_prefixes: Base58Prefixes::test_namespace(),
        chain_tx_data: ChainTxData::default(),
        fixed_seeds: Vec::new(),
        dns_seeds: Vec::new(),
        coinbase_destination: Script::new(),
        flags: NetworkFlags {
            mining_requires_peers: false,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            anyonecanspend_aremine: true,
        },
    };
    params.check_invariants()?;

    info!(
        network = REGTEST,
        genesis = %params.consensus.hash_genesis_block,
        "Built regtest parameters"
    );
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ChainArgs;
    use crate::domain::{Base58Type, ChainParamsError};
    use shared_types::MAX_MONEY;

    #[test]
    fn test_regtest_defaults() {
        let params = build_regtest_parameters(&ChainArgs::new()).unwrap();
        assert_eq!(params.network_id(), "regtest");
        assert_eq!(params.message_start(), [0xfa, 0xbf, 0xb5, 0xda]);
        assert_eq!(params.default_port(), 7042);
        assert_eq!(params.prune_after_height(), 1000);
        assert_eq!(params.consensus().fedpeg_script, Script::op_true());
        assert_eq!(params.consensus().rule_change_activation_threshold, 108);
        assert_eq!(params.consensus().miner_confirmation_window, 144);
        assert_eq!(params.base58_prefix(Base58Type::PubkeyAddress), &[235]);
        assert!(params.mine_blocks_on_demand());
        assert!(!params.require_standard());
        assert!(params.coinbase_destination().is_empty());
        assert!(params.fixed_seeds().is_empty() && params.dns_seeds().is_empty());
    }

    #[test]
    fn test_regtest_genesis() {
        let params = build_regtest_parameters(&ChainArgs::new()).unwrap();
        let genesis = params.genesis_block();
        assert_eq!(genesis.header.time, 1_296_688_602);
        assert_eq!(genesis.header.version, 1);
        let outputs = &genesis.transactions[0].outputs;
        assert_eq!(outputs.len(), 100);
        assert!(outputs.iter().all(|out| out.value == MAX_MONEY / 100));
        assert!(outputs.iter().all(|out| &out.asset == params.pegged_asset()));
        assert_eq!(params.consensus().hash_genesis_block, genesis.hash());
        assert_eq!(params.checkpoints().get(0), Some(&genesis.hash()));
    }

    #[test]
    fn test_regtest_ignores_consensus_keys() {
        let tweaked = ChainArgs::new()
            .with("con_nsubsidyhalvinginterval", "7")
            .with("ndefaultport", "1");
        let a = build_regtest_parameters(&ChainArgs::new()).unwrap();
        let b = build_regtest_parameters(&tweaked).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_regtest_bad_script() {
        let args = ChainArgs::new().with("signblockscript", "5g");
        assert!(matches!(
            build_regtest_parameters(&args),
            Err(ChainParamsError::InvalidScriptHex { key, network, .. })
                if key == "signblockscript" && network == "regtest"
        ));
    }
}
