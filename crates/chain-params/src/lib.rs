//! # chain-params
//!
//! Network identity and consensus constants for a federated sidechain.
//!
//! ## Architecture
//!
//! Each network's parameters are derived once at startup. The genesis
//! block commits to the network configuration, and the pegged asset is
//! derived from that commitment and the parent chain's genesis hash:
//!
//! ```text
//! select(network) ──→ profile ──→ resolve scripts ──→ commit
//!                                                       │
//!                        genesis ←── assemble ←── derive asset
//!                           │
//!                           └──→ ChainParameters (frozen)
//! ```
//!
//! Any change to the network id, the federation script or the signing
//! challenge changes the commitment, and with it every derived hash.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chain_params::{select_params, params, ChainArgs};
//!
//! let args = ChainArgs::from_cli(["-fedpegscript=5221...52ae"])?;
//! select_params("liquidtest", &args)?;
//!
//! let genesis = params().genesis_block().hash();
//! ```
//!
//! ## Profiles
//!
//! - `regtest`: fixed constants, configurable scripts
//! - any other name: custom network, every constant configurable
//! - `main`: the custom construction plus production overrides

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod profiles;
pub mod registry;

// Re-export main types
pub use adapters::ChainArgs;
pub use algorithms::{
    commit_to_arguments, create_genesis_block, derive_pegged_asset, resolve_script,
    resolve_script_arg, GenesisInputs, DEFAULT_REWARD_SHARDS, GENESIS_TIME, GENESIS_VERSION,
    MAX_REWARD_SHARDS,
};
pub use domain::{
    Base58Prefixes, Base58Type, ChainParameters, ChainParamsError, ChainParamsResult,
    ChainTxData, CheckpointData, ConsensusParams, DeploymentParams, DeploymentPos, NetworkFlags,
    CUSTOM, MAIN, REGTEST,
};
pub use ports::ArgSource;
pub use profiles::{
    build_custom_parameters, build_production_parameters, build_regtest_parameters,
    DEFAULT_PARENT_GENESIS_HASH,
};
pub use registry::{
    create_chain_params, params, select_params, try_params, ChainParamsRegistry,
    DeploymentOverrides,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
