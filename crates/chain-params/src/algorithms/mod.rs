//! # Algorithms Module
//!
//! The commitment-and-derivation pipeline:
//!
//! ```text
//! (network id, fedpeg script, challenge) ──commit──→ commitment
//! (commitment:0, parent genesis)         ──derive──→ pegged asset
//! (commitment, asset, challenge, ...)    ──assemble→ genesis block
//! ```

pub mod asset;
pub mod commitment;
pub mod genesis;
pub mod script_resolver;

pub use asset::derive_pegged_asset;
pub use commitment::commit_to_arguments;
pub use genesis::{
    create_genesis_block, GenesisInputs, DEFAULT_REWARD_SHARDS, GENESIS_TIME, GENESIS_VERSION,
    MAX_REWARD_SHARDS,
};
pub use script_resolver::{resolve_script, resolve_script_arg};
