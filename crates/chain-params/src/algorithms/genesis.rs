//! # Genesis Assembly
//!
//! Builds the chain root: one transaction whose single input carries the
//! configuration commitment and whose outputs split the genesis reward into
//! equal shards of the pegged asset.
//!
//! The block's proof holds the signing challenge with an empty solution.
//! The block hash does not cover the solution, so the hash is fixed here.

use shared_types::{
    Amount, AssetId, Block, BlockHeader, Hash256, Proof, Script, Transaction, TxIn, TxOut,
};
use tracing::debug;

use super::commitment::commit_to_arguments;
use crate::domain::{ChainParamsError, ChainParamsResult, ConsensusParams};

/// Genesis timestamp shared by every profile.
pub const GENESIS_TIME: u32 = 1_296_688_602;

/// Genesis block format version.
pub const GENESIS_VERSION: i32 = 1;

/// Default number of genesis reward outputs.
pub const DEFAULT_REWARD_SHARDS: u32 = 100;

/// Upper bound on genesis reward outputs. Shard counts come from
/// configuration and size an allocation, so larger values are refused.
pub const MAX_REWARD_SHARDS: u32 = 10_000;

/// Everything besides consensus params that determines a genesis block.
#[derive(Clone, Debug)]
pub struct GenesisInputs<'a> {
    pub network_id: &'a str,
    /// Script locking every reward shard.
    pub output_script: &'a Script,
    pub time: u32,
    /// Signing challenge committed to and stored in the block proof.
    pub challenge_script: &'a Script,
    pub version: i32,
    pub total_reward: Amount,
    pub reward_shards: u32,
    pub asset: AssetId,
}

/// Assemble the genesis block.
///
/// Fails if `total_reward` cannot be split into `reward_shards` equal
/// outputs, or if `reward_shards` exceeds [`MAX_REWARD_SHARDS`]. Both are
/// broken configurations, never runtime conditions.
pub fn create_genesis_block(
    consensus: &ConsensusParams,
    inputs: &GenesisInputs<'_>,
) -> ChainParamsResult<Block> {
    if inputs.reward_shards == 0
        || inputs.reward_shards > MAX_REWARD_SHARDS
        || inputs.total_reward % Amount::from(inputs.reward_shards) != 0
    {
        return Err(ChainParamsError::InvalidRewardShards {
            total_reward: inputs.total_reward,
            shards: inputs.reward_shards,
        });
    }
    let shard_value = inputs.total_reward / Amount::from(inputs.reward_shards);

    let commitment = commit_to_arguments(
        inputs.network_id,
        &consensus.fedpeg_script,
        inputs.challenge_script,
    );

    // Not spendable: the push only binds the block hash to the configuration
    let coinbase_input = TxIn {
        script_sig: Script::from_push(commitment.as_bytes()),
        ..TxIn::default()
    };

    let shard = TxOut {
        asset: inputs.asset,
        value: shard_value,
        script_pubkey: inputs.output_script.clone(),
    };

    let tx = Transaction {
        version: 1,
        inputs: vec![coinbase_input],
        outputs: vec![shard; inputs.reward_shards as usize],
        lock_time: 0,
    };

    let mut genesis = Block {
        header: BlockHeader {
            version: inputs.version,
            prev_block_hash: Hash256::ZERO,
            merkle_root: Hash256::ZERO,
            time: inputs.time,
            height: 0,
            proof: Proof::new(inputs.challenge_script.clone(), Script::new()),
        },
        transactions: vec![tx],
    };
    genesis.header.merkle_root = genesis.compute_merkle_root();

    debug!(
        network = inputs.network_id,
        %commitment,
        merkle_root = %genesis.header.merkle_root,
        shards = inputs.reward_shards,
        "Assembled genesis block"
    );
    Ok(genesis)
}
