//! # Parameter Profiles
//!
//! Plain constructor functions, one per network family. Production reuses
//! the custom constructor and then applies a fixed override record.
//!
//! Every profile runs the same pipeline once its consensus constants and
//! scripts are settled: commitment, pegged asset, genesis block, genesis
//! hash propagation.

mod custom;
mod production;
mod regtest;

pub use custom::build_custom_parameters;
pub use production::build_production_parameters;
pub use regtest::build_regtest_parameters;

use primitive_types::U256;
use shared_types::{Block, Hash256, Script, MAX_MONEY};
use tracing::debug;

use crate::algorithms::{
    commit_to_arguments, create_genesis_block, derive_pegged_asset, GenesisInputs, GENESIS_TIME,
    GENESIS_VERSION,
};
use crate::domain::{ChainParamsResult, ConsensusParams};

/// Wire magic shared by the regtest and custom families.
pub(crate) const TEST_MESSAGE_START: [u8; 4] = [0xfa, 0xbf, 0xb5, 0xda];

pub(crate) const DEFAULT_PORT: u16 = 7042;

pub(crate) const DEFAULT_PRUNE_AFTER_HEIGHT: u64 = 1000;

/// Genesis hash of the parent chain referenced by peg-ins.
///
/// Internal byte order; displays as `0f9188f1…466e2206`.
pub const DEFAULT_PARENT_GENESIS_HASH: Hash256 = Hash256::from_bytes([
    0x06, 0x22, 0x6e, 0x46, 0x11, 0x1a, 0x0b, 0x59, 0xca, 0xaf, 0x12, 0x60, 0x43, 0xeb, 0x5b, 0xbf,
    0x28, 0xc3, 0x4f, 0x3a, 0x5e, 0x33, 0x2a, 0x1f, 0xc7, 0xb2, 0xb7, 0x3c, 0xf1, 0x88, 0x91, 0x0f,
]);

/// `7fff…ff`, the easiest target used on test networks.
pub(crate) fn test_pow_limit() -> U256 {
    U256::MAX >> 1
}

/// Genesis-defining inputs a profile has resolved.
pub(crate) struct GenesisSeed<'a> {
    pub network_id: &'a str,
    pub challenge_script: &'a Script,
    pub parent_genesis_hash: Hash256,
    pub reward_shards: u32,
}

/// Commit, derive the pegged asset, build genesis and record its hash.
///
/// `consensus.fedpeg_script` must already be resolved. On return
/// `pegged_asset` and `hash_genesis_block` are filled in.
pub(crate) fn seal_genesis(
    consensus: &mut ConsensusParams,
    seed: &GenesisSeed<'_>,
) -> ChainParamsResult<Block> {
    let commitment = commit_to_arguments(
        seed.network_id,
        &consensus.fedpeg_script,
        seed.challenge_script,
    );
    consensus.pegged_asset = derive_pegged_asset(&commitment, &seed.parent_genesis_hash);

    let output_script = Script::op_true();
    let genesis = create_genesis_block(
        consensus,
        &GenesisInputs {
            network_id: seed.network_id,
            output_script: &output_script,
            time: GENESIS_TIME,
            challenge_script: seed.challenge_script,
            version: GENESIS_VERSION,
            total_reward: MAX_MONEY,
            reward_shards: seed.reward_shards,
            asset: consensus.pegged_asset,
        },
    )?;
    consensus.hash_genesis_block = genesis.hash();

    debug!(
        network = seed.network_id,
        genesis = %consensus.hash_genesis_block,
        asset = %consensus.pegged_asset,
        "Sealed genesis"
    );
    Ok(genesis)
}
