//! # Block Merkle Root
//!
//! Classic double-SHA-256 Merkle tree over txids. An odd node at the end of
//! a level is paired with itself.

use shared_crypto::sha256d;

use crate::hash::Hash256;

/// Merkle root of a block's txids. Empty input yields the zero hash.
pub fn block_merkle_root(txids: &[Hash256]) -> Hash256 {
    if txids.is_empty() {
        return Hash256::ZERO;
    }

    let mut level: Vec<Hash256> = txids.to_vec();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = &pair[0];
                let right = pair.get(1).unwrap_or(left);
                hash_pair(left, right)
            })
            .collect();
    }
    level[0]
}

fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left.as_bytes());
    buf[32..].copy_from_slice(right.as_bytes());
    Hash256(sha256d(&buf))
}
