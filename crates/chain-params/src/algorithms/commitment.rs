//! # Configuration Commitment
//!
//! Binds the genesis block to the network id and both scripts, so loading
//! a node with different arguments yields a different chain instead of a
//! silently incompatible one.

use shared_crypto::Sha256Writer;
use shared_types::{Hash256, Script};

/// Single SHA-256 over `network_id || hex(fedpeg_script) || hex(challenge_script)`.
///
/// The scripts are committed as lowercase hex text, not raw bytes.
pub fn commit_to_arguments(
    network_id: &str,
    fedpeg_script: &Script,
    challenge_script: &Script,
) -> Hash256 {
    let mut writer = Sha256Writer::new();
    writer
        .write(network_id.as_bytes())
        .write(fedpeg_script.to_hex().as_bytes())
        .write(challenge_script.to_hex().as_bytes());
    Hash256(writer.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_crypto::sha256;

    #[test]
    fn test_commitment_is_sha256_of_hex_text() {
        let fedpeg = Script::op_true();
        let challenge = Script::from_hex("5152").unwrap();
        let expected = sha256(b"regtest515152");
        assert_eq!(commit_to_arguments("regtest", &fedpeg, &challenge).0, expected);
    }

    #[test]
    fn test_commitment_deterministic() {
        let script = Script::op_true();
        assert_eq!(
            commit_to_arguments("regtest", &script, &script),
            commit_to_arguments("regtest", &script, &script)
        );
    }

    #[test]
    fn test_commitment_changes_with_each_input() {
        let a = Script::op_true();
        let b = Script::from_hex("00").unwrap();
        let base = commit_to_arguments("regtest", &a, &a);

        assert_ne!(base, commit_to_arguments("custom", &a, &a));
        assert_ne!(base, commit_to_arguments("regtest", &b, &a));
        assert_ne!(base, commit_to_arguments("regtest", &a, &b));
    }
}
