//! # Scripts
//!
//! Opaque script bytes plus the minimal builder needed to construct
//! genesis unlock fields and the "always true" sentinel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::HexError;

/// Script opcodes used by this crate.
pub mod opcodes {
    /// Push an empty byte vector.
    pub const OP_0: u8 = 0x00;
    /// Next byte is the push length.
    pub const OP_PUSHDATA1: u8 = 0x4c;
    /// Next two bytes (LE) are the push length.
    pub const OP_PUSHDATA2: u8 = 0x4d;
    /// Next four bytes (LE) are the push length.
    pub const OP_PUSHDATA4: u8 = 0x4e;
    /// Push the number 1.
    pub const OP_TRUE: u8 = 0x51;
}

/// A serialized script.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Script(Vec<u8>);

impl Script {
    /// Empty script.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wrap raw script bytes without interpretation.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The `OP_TRUE` script: anyone can satisfy it.
    pub fn op_true() -> Self {
        ScriptBuilder::new()
            .push_opcode(opcodes::OP_TRUE)
            .into_script()
    }

    /// A script consisting of a single data push of `data`.
    pub fn from_push(data: &[u8]) -> Self {
        ScriptBuilder::new().push_slice(data).into_script()
    }

    /// Decode strict hex (even length, no prefix) into raw script bytes.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        Ok(Self(hex::decode(s)?))
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty script.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex of the raw bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Incremental script construction.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    bytes: Vec<u8>,
}

impl ScriptBuilder {
    /// Start an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single opcode.
    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.bytes.push(opcode);
        self
    }

    /// Append a data push using the smallest push encoding.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < opcodes::OP_PUSHDATA1 as usize {
            self.bytes.push(len as u8);
        } else if len <= u8::MAX as usize {
            self.bytes.push(opcodes::OP_PUSHDATA1);
            self.bytes.push(len as u8);
        } else if len <= u16::MAX as usize {
            self.bytes.push(opcodes::OP_PUSHDATA2);
            self.bytes.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.bytes.push(opcodes::OP_PUSHDATA4);
            self.bytes.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.bytes.extend_from_slice(data);
        self
    }

    /// Finish building.
    pub fn into_script(self) -> Script {
        Script(self.bytes)
    }
}
