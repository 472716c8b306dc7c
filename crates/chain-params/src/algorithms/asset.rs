//! # Pegged Asset Derivation
//!
//! The pegged asset is "issued" by a synthetic outpoint `(commitment, 0)`
//! with the parent chain's genesis hash as the contract hash.

use shared_types::{calculate_asset, generate_asset_entropy, AssetId, Hash256, OutPoint};
use tracing::debug;

/// Derive the pegged asset id from the configuration commitment.
pub fn derive_pegged_asset(commitment: &Hash256, parent_genesis_hash: &Hash256) -> AssetId {
    let prevout = OutPoint::new(*commitment, 0);
    let entropy = generate_asset_entropy(&prevout, parent_genesis_hash);
    let asset = calculate_asset(&entropy);
    debug!(%commitment, %entropy, %asset, "Derived pegged asset");
    asset
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARENT_GENESIS: &str = "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206";

    #[test]
    fn test_matches_manual_pipeline() {
        let commitment = Hash256([0x33; 32]);
        let parent = Hash256::from_hex(PARENT_GENESIS).unwrap();
        let entropy = generate_asset_entropy(&OutPoint::new(commitment, 0), &parent);
        assert_eq!(derive_pegged_asset(&commitment, &parent), calculate_asset(&entropy));
    }

    #[test]
    fn test_sensitive_to_commitment_and_parent() {
        let parent = Hash256::from_hex(PARENT_GENESIS).unwrap();
        let base = derive_pegged_asset(&Hash256([1; 32]), &parent);
        assert_ne!(base, derive_pegged_asset(&Hash256([2; 32]), &parent));
        assert_ne!(base, derive_pegged_asset(&Hash256([1; 32]), &Hash256::ZERO));
    }
}
