//! # Shared Types Crate
//!
//! Chain value types consumed by the parameter core.
//!
//! ## Clusters
//!
//! - **Primitives**: `Hash256`, `Script`, `Amount`, `AssetId`
//! - **Chain**: `OutPoint`, `TxIn`, `TxOut`, `Transaction`, `Proof`,
//!   `BlockHeader`, `Block`
//! - **Derivations**: consensus encoding, block Merkle root, asset issuance
//!
//! ## Byte Order
//!
//! `Hash256` stores bytes in serialization order and displays them reversed,
//! so a hash printed by this crate matches the hex a node operator sees.

pub mod amount;
pub mod encoding;
pub mod entities;
pub mod errors;
pub mod hash;
pub mod issuance;
pub mod merkle;
pub mod script;

pub use amount::{money_range, Amount, COIN, MAX_MONEY};
pub use encoding::{Encodable, Encoder};
pub use entities::*;
pub use errors::*;
pub use hash::Hash256;
pub use issuance::{calculate_asset, fast_merkle_root, generate_asset_entropy, AssetId};
pub use merkle::block_merkle_root;
pub use script::{opcodes, Script, ScriptBuilder};
