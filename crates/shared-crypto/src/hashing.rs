//! # SHA-256 Hashing
//!
//! One-shot, double and midstate SHA-256 helpers.
//!
//! ## Midstate
//!
//! The fast Merkle root used by asset issuance does not hash a padded
//! message. It runs the SHA-256 compression function once over the 64-byte
//! concatenation of two nodes, starting from the standard IV, and reads the
//! resulting state words big-endian.

use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// SHA-256 initial state (FIPS 180-4, section 5.3.3).
const SHA256_IV: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Streaming SHA-256 writer.
///
/// Thin wrapper so callers can commit to several byte strings without
/// building an intermediate buffer.
#[derive(Clone, Default)]
pub struct Sha256Writer {
    inner: Sha256,
}

impl Sha256Writer {
    /// Create new writer.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Append data.
    pub fn write(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return the single SHA-256 digest.
    pub fn finalize(self) -> Hash {
        self.inner.finalize().into()
    }
}

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hash data with SHA-256 applied twice.
pub fn sha256d(data: &[u8]) -> Hash {
    Sha256::digest(Sha256::digest(data)).into()
}

/// Compress `left || right` with the SHA-256 IV and return the raw state.
pub fn sha256_midstate_pair(left: &Hash, right: &Hash) -> Hash {
    let mut block = [0u8; 64];
    block[..32].copy_from_slice(left);
    block[32..].copy_from_slice(right);

    let mut state = SHA256_IV;
    sha2::compress256(&mut state, &[GenericArray::clone_from_slice(&block)]);

    let mut out = [0u8; 32];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty_vector() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_abc_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256d_is_hash_of_hash() {
        let once = sha256(b"hello");
        assert_eq!(sha256d(b"hello"), sha256(&once));
    }

    #[test]
    fn test_writer_matches_oneshot() {
        let mut writer = Sha256Writer::new();
        writer.write(b"hello ").write(b"world");
        assert_eq!(writer.finalize(), sha256(b"hello world"));
    }

    #[test]
    fn test_midstate_deterministic() {
        let a = [0x11u8; 32];
        let b = [0x22u8; 32];
        assert_eq!(sha256_midstate_pair(&a, &b), sha256_midstate_pair(&a, &b));
    }

    #[test]
    fn test_midstate_order_matters() {
        let a = [0x11u8; 32];
        let b = [0x22u8; 32];
        assert_ne!(sha256_midstate_pair(&a, &b), sha256_midstate_pair(&b, &a));
    }

    #[test]
    fn test_midstate_differs_from_padded_hash() {
        let a = [0u8; 32];
        let mut joined = [0u8; 64];
        joined[..32].copy_from_slice(&a);
        joined[32..].copy_from_slice(&a);
        assert_ne!(sha256_midstate_pair(&a, &a), sha256(&joined));
    }
}
