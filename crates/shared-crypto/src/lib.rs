//! # Shared Crypto - Hashing Primitives
//!
//! ## Components
//!
//! | Function | Algorithm | Use Case |
//! |----------|-----------|----------|
//! | `sha256` | SHA-256 | Configuration commitments |
//! | `sha256d` | SHA-256 twice | Transaction ids, block hashes, Merkle nodes |
//! | `sha256_midstate_pair` | SHA-256 compression, no padding | Fast Merkle root (asset issuance) |
//!
//! All functions are pure and allocation-free on the output side.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hashing;

// Re-exports
pub use hashing::{sha256, sha256_midstate_pair, sha256d, Hash, Sha256Writer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
