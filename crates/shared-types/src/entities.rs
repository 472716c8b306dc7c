//! # Chain Entities
//!
//! Transactions and blocks in the shape needed to build and hash a genesis
//! block. Outputs always carry explicit (non-confidential) asset and value.

use serde::{Deserialize, Serialize};
use shared_crypto::sha256d;

use crate::amount::Amount;
use crate::encoding::{Encodable, Encoder};
use crate::hash::Hash256;
use crate::issuance::AssetId;
use crate::merkle::block_merkle_root;
use crate::script::Script;

/// Prefix byte for an explicit asset or value commitment.
const EXPLICIT_PREFIX: u8 = 0x01;

/// Prefix byte for a null commitment (no nonce).
const NULL_PREFIX: u8 = 0x00;

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// Reference to a transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Txid of the referenced transaction.
    pub hash: Hash256,
    /// Output index.
    pub n: u32,
}

impl OutPoint {
    pub fn new(hash: Hash256, n: u32) -> Self {
        Self { hash, n }
    }

    /// The outpoint spent by a coinbase-like input.
    pub fn null() -> Self {
        Self {
            hash: Hash256::ZERO,
            n: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.hash.is_zero() && self.n == u32::MAX
    }
}

impl Default for OutPoint {
    fn default() -> Self {
        Self::null()
    }
}

impl Encodable for OutPoint {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.write_hash(&self.hash);
        encoder.write_u32_le(self.n);
    }
}

/// Transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

impl Default for TxIn {
    fn default() -> Self {
        Self {
            prevout: OutPoint::null(),
            script_sig: Script::new(),
            sequence: u32::MAX,
        }
    }
}

impl Encodable for TxIn {
    fn encode(&self, encoder: &mut Encoder) {
        self.prevout.encode(encoder);
        encoder.write_var_bytes(self.script_sig.as_bytes());
        encoder.write_u32_le(self.sequence);
    }
}

/// Transaction output with explicit asset and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    pub asset: AssetId,
    pub value: Amount,
    pub script_pubkey: Script,
}

impl Encodable for TxOut {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.write_u8(EXPLICIT_PREFIX);
        encoder.write_hash(&self.asset.0);
        encoder.write_u8(EXPLICIT_PREFIX);
        encoder.write_u64_be(self.value as u64);
        encoder.write_u8(NULL_PREFIX);
        encoder.write_var_bytes(self.script_pubkey.as_bytes());
    }
}

/// A transaction (no witness data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Transaction id: double SHA-256 of the witness-less encoding.
    pub fn txid(&self) -> Hash256 {
        Hash256(sha256d(&self.consensus_encode()))
    }

    /// Sum of all output values.
    pub fn total_value(&self) -> Amount {
        self.outputs.iter().map(|out| out.value).sum()
    }
}

impl Encodable for Transaction {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.write_i32_le(self.version);
        // No witness flag
        encoder.write_u8(0);
        encoder.write_varint(self.inputs.len() as u64);
        for input in &self.inputs {
            input.encode(encoder);
        }
        encoder.write_varint(self.outputs.len() as u64);
        for output in &self.outputs {
            output.encode(encoder);
        }
        encoder.write_u32_le(self.lock_time);
    }
}

// =============================================================================
// BLOCKS
// =============================================================================

/// Signed-block proof: the challenge every block must satisfy and the
/// solution that satisfies it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Proof {
    pub challenge: Script,
    pub solution: Script,
}

impl Proof {
    pub fn new(challenge: Script, solution: Script) -> Self {
        Self {
            challenge,
            solution,
        }
    }
}

/// Block header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub height: u32,
    pub proof: Proof,
}

impl BlockHeader {
    /// Block hash. The proof solution is not committed to.
    pub fn hash(&self) -> Hash256 {
        Hash256(sha256d(&self.consensus_encode()))
    }
}

impl Encodable for BlockHeader {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.write_i32_le(self.version);
        encoder.write_hash(&self.prev_block_hash);
        encoder.write_hash(&self.merkle_root);
        encoder.write_u32_le(self.time);
        encoder.write_u32_le(self.height);
        encoder.write_var_bytes(self.proof.challenge.as_bytes());
    }
}

/// A block: header plus transactions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Header hash.
    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    /// Merkle root recomputed from the transaction list.
    pub fn compute_merkle_root(&self) -> Hash256 {
        let txids: Vec<Hash256> = self.transactions.iter().map(Transaction::txid).collect();
        block_merkle_root(&txids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tx(value: Amount) -> Transaction {
        Transaction {
            version: 1,
            inputs: vec![TxIn::default()],
            outputs: vec![TxOut {
                asset: AssetId(Hash256([0x11; 32])),
                value,
                script_pubkey: Script::op_true(),
            }],
            lock_time: 0,
        }
    }

    #[test]
    fn test_null_outpoint() {
        let null = OutPoint::null();
        assert!(null.is_null());
        assert_eq!(null.consensus_encode().len(), 36);
        assert!(!OutPoint::new(Hash256::ZERO, 0).is_null());
    }

    #[test]
    fn test_consensus_encoding_alongside_serde() {
        let outpoint = OutPoint::new(Hash256([0x05; 32]), 7);
        let json = serde_json::to_string(&outpoint).unwrap();
        assert!(json.contains("\"n\":7"));

        let bytes = outpoint.consensus_encode();
        assert_eq!(&bytes[..32], &[0x05; 32]);
        assert_eq!(&bytes[32..], &7u32.to_le_bytes());
    }

    #[test]
    fn test_txin_default_sequence() {
        assert_eq!(TxIn::default().sequence, 0xFFFF_FFFF);
    }

    #[test]
    fn test_txout_encoding_layout() {
        let out = sample_tx(1).outputs.remove(0);
        let bytes = out.consensus_encode();
        // asset(33) + value(9) + nonce(1) + script(1 + 1)
        assert_eq!(bytes.len(), 45);
        assert_eq!(bytes[0], EXPLICIT_PREFIX);
        assert_eq!(bytes[33], EXPLICIT_PREFIX);
        assert_eq!(bytes[41], 1);
        assert_eq!(bytes[42], NULL_PREFIX);
    }

    #[test]
    fn test_txid_changes_with_value() {
        assert_ne!(sample_tx(1).txid(), sample_tx(2).txid());
        assert_eq!(sample_tx(1).txid(), sample_tx(1).txid());
    }

    #[test]
    fn test_block_hash_ignores_solution() {
        let mut header = BlockHeader {
            version: 1,
            proof: Proof::new(Script::op_true(), Script::new()),
            ..Default::default()
        };
        let before = header.hash();
        header.proof.solution = Script::from_push(&[0xAA; 64]);
        assert_eq!(header.hash(), before);
    }

    #[test]
    fn test_block_hash_commits_to_challenge() {
        let a = BlockHeader {
            proof: Proof::new(Script::op_true(), Script::new()),
            ..Default::default()
        };
        let b = BlockHeader {
            proof: Proof::new(Script::from_push(&[1, 2, 3]), Script::new()),
            ..Default::default()
        };
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn test_single_tx_merkle_root_is_txid() {
        let tx = sample_tx(5);
        let block = Block {
            header: BlockHeader::default(),
            transactions: vec![tx.clone()],
        };
        assert_eq!(block.compute_merkle_root(), tx.txid());
    }

    #[test]
    fn test_total_value() {
        let mut tx = sample_tx(3);
        tx.outputs.push(tx.outputs[0].clone());
        assert_eq!(tx.total_value(), 6);
    }
}
