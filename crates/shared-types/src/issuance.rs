//! # Asset Issuance
//!
//! Entropy and asset-id derivation for issued assets.
//!
//! ```text
//! entropy  = fast_merkle_root([sha256d(outpoint), contract_hash])
//! asset_id = fast_merkle_root([entropy, 0])
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use shared_crypto::{sha256_midstate_pair, sha256d};

use crate::encoding::Encodable;
use crate::entities::OutPoint;
use crate::hash::Hash256;

/// Identifier of an asset carried by transaction outputs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub Hash256);

impl AssetId {
    /// Raw bytes (serialization order).
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }

    pub fn is_null(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({})", self.0)
    }
}

/// Merkle root using single-compression (midstate) node hashing.
///
/// A lone node at the end of a level is promoted unchanged. An empty
/// leaf set yields the zero hash.
pub fn fast_merkle_root(leaves: &[Hash256]) -> Hash256 {
    if leaves.is_empty() {
        return Hash256::ZERO;
    }

    let mut level: Vec<Hash256> = leaves.to_vec();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => Hash256(sha256_midstate_pair(&left.0, &right.0)),
                _ => pair[0],
            })
            .collect();
    }
    level[0]
}

/// Derive issuance entropy from the spent outpoint and a contract hash.
pub fn generate_asset_entropy(prevout: &OutPoint, contract_hash: &Hash256) -> Hash256 {
    let prevout_hash = Hash256(sha256d(&prevout.consensus_encode()));
    fast_merkle_root(&[prevout_hash, *contract_hash])
}

/// Derive the asset id from issuance entropy.
pub fn calculate_asset(entropy: &Hash256) -> AssetId {
    AssetId(fast_merkle_root(&[*entropy, Hash256::ZERO]))
}
