//! # Custom Profile
//!
//! Every consensus constant is read from configuration with a default.
//! Arguments are applied before the commitment is computed, so any change
//! produces a different genesis hash.

use primitive_types::U256;
use shared_types::{Hash256, Script};
use tracing::info;

use super::{
    seal_genesis, test_pow_limit, GenesisSeed, DEFAULT_PARENT_GENESIS_HASH, DEFAULT_PORT,
    DEFAULT_PRUNE_AFTER_HEIGHT, TEST_MESSAGE_START,
};
use crate::algorithms::{resolve_script_arg, DEFAULT_REWARD_SHARDS};
use crate::domain::{
    test_deployments, Base58Prefixes, ChainParameters, ChainParamsError, ChainParamsResult,
    ChainTxData, CheckpointData, ConsensusParams, NetworkFlags,
};
use crate::ports::ArgSource;

/// Build parameters for the network named `network_id`.
pub fn build_custom_parameters(
    network_id: &str,
    args: &dyn ArgSource,
) -> ChainParamsResult<ChainParameters> {
    if network_id.is_empty() {
        return Err(ChainParamsError::EmptyNetworkName);
    }

    let mut consensus = ConsensusParams {
        hash_genesis_block: Hash256::ZERO,
        subsidy_halving_interval: args.get_i32("con_nsubsidyhalvinginterval", 150)?,
        bip34_height: args.get_i32("con_bip34height", 100_000_000)?,
        bip34_hash: args.get_hash("con_bip34hash", Hash256::ZERO)?,
        bip65_height: args.get_i32("con_bip65height", 1351)?,
        bip66_height: args.get_i32("con_bip66height", 1251)?,
        pow_limit: args.get_u256("con_powlimit", test_pow_limit())?,
        parent_chain_pow_limit: args.get_u256("con_parentpowlimit", test_pow_limit())?,
        pow_target_timespan: args.get_i64("con_npowtargettimespan", 14 * 24 * 60 * 60)?,
        pow_target_spacing: args.get_i64("con_npowtargetspacing", 10 * 60)?,
        pow_allow_min_difficulty_blocks: args.get_bool("con_fpowallowmindifficultyblocks", true)?,
        pow_no_retargeting: args.get_bool("con_fpownoretargeting", true)?,
        rule_change_activation_threshold: args.get_u32("con_nrulechangeactivationthreshold", 108)?,
        miner_confirmation_window: args.get_u32("con_nminerconfirmationwindow", 144)?,
        deployments: test_deployments(),
        minimum_chain_work: args.get_u256("con_nminimumchainwork", U256::zero())?,
        default_assume_valid: args.get_hash("con_defaultassumevalid", Hash256::ZERO)?,
        fedpeg_script: Script::new(),
        pegged_asset: Default::default(),
    };
    let default_port = args.get_u16("ndefaultport", DEFAULT_PORT)?;
    let prune_after_height = args.get_u64("npruneafterheight", DEFAULT_PRUNE_AFTER_HEIGHT)?;
    let flags = NetworkFlags {
        mining_requires_peers: args.get_bool("fminingrequirespeers", false)?,
        default_consistency_checks: args.get_bool("fdefaultconsistencychecks", true)?,
        require_standard: args.get_bool("frequirestandard", false)?,
        mine_blocks_on_demand: args.get_bool("fmineblocksondemand", true)?,
        anyonecanspend_aremine: args.get_bool("anyonecanspendaremine", true)?,
    };
    let reward_shards = args.get_u32("con_rewardshards", DEFAULT_REWARD_SHARDS)?;
    let parent_genesis_block_hash =
        args.get_hash("parentgenesisblockhash", DEFAULT_PARENT_GENESIS_HASH)?;

    let default_script = Script::op_true();
    let challenge_script =
        resolve_script_arg(args, "signblockscript", network_id, &default_script)?;
    consensus.fedpeg_script = resolve_script_arg(args, "fedpegscript", network_id, &default_script)?;

    let genesis = seal_genesis(
        &mut consensus,
        &GenesisSeed {
            network_id,
            challenge_script: &challenge_script,
            parent_genesis_hash: parent_genesis_block_hash,
            reward_shards,
        },
    )?;

    let params = ChainParameters {
        network_id: network_id.to_string(),
        checkpoint_data: CheckpointData::genesis_only(consensus.hash_genesis_block),
        consensus,
        message_start: TEST_MESSAGE_START,
        default_port,
        prune_after_height,
        parent_genesis_block_hash,
        genesis,
        base58_prefixes: Base58Prefixes::test_namespace(),
        chain_tx_data: ChainTxData::default(),
        fixed_seeds: Vec::new(),
        dns_seeds: Vec::new(),
        coinbase_destination: Script::new(),
        flags,
    };
    params.check_invariants()?;

    info!(
        network = network_id,
        genesis = %params.consensus.hash_genesis_block,
        port = default_port,
        "Built custom parameters"
    );
    Ok(params)
}
