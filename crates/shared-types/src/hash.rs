//! # 256-bit Hash
//!
//! `Hash256` keeps its bytes in serialization order. Hex text, both parsed
//! and printed, uses the reversed "display" order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::HexError;

/// A 32-byte hash (block hash, txid, commitment, asset id...).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// The all-zero hash, used as the "no predecessor" sentinel.
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    /// Wrap raw bytes (serialization order).
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw bytes (serialization order).
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check for the all-zero sentinel.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse display-order hex.
    ///
    /// Accepts an optional `0x` prefix and fewer than 64 digits (the value is
    /// left-padded with zeros), so `"0x00"` and `""` both parse to zero.
    /// Non-hex characters and more than 64 digits are rejected.
    pub fn from_hex(input: &str) -> Result<Self, HexError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if let Some((index, character)) = digits
            .char_indices()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(HexError::InvalidCharacter { character, index });
        }
        if digits.len() > 64 {
            return Err(HexError::TooLong { len: digits.len() });
        }

        let padded = format!("{:0>64}", digits);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)?;
        bytes.reverse();
        Ok(Self(bytes))
    }

    /// Display-order hex, 64 lowercase digits.
    pub fn to_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl FromStr for Hash256 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Hash256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARENT_GENESIS: &str = "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206";

    #[test]
    fn test_display_roundtrip_reverses_bytes() {
        let hash = Hash256::from_hex(PARENT_GENESIS).unwrap();
        assert_eq!(hash.0[0], 0x06);
        assert_eq!(hash.0[31], 0x0f);
        assert_eq!(hash.to_string(), PARENT_GENESIS);
    }

    #[test]
    fn test_short_input_is_left_padded() {
        let hash = Hash256::from_hex("0x01").unwrap();
        assert_eq!(hash.0[0], 0x01);
        assert!(hash.0[1..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_zero_forms() {
        assert!(Hash256::from_hex("0x00").unwrap().is_zero());
        assert!(Hash256::from_hex("0x0").unwrap().is_zero());
        assert!(Hash256::from_hex("").unwrap().is_zero());
    }

    #[test]
    fn test_rejects_non_hex() {
        let err = Hash256::from_hex("0xzz").unwrap_err();
        assert!(matches!(err, HexError::InvalidCharacter { character: 'z', index: 0 }));
    }

    #[test]
    fn test_rejects_too_long() {
        let long = "0".repeat(65);
        assert!(matches!(
            Hash256::from_hex(&long),
            Err(HexError::TooLong { len: 65 })
        ));
    }

    #[test]
    fn test_serde_uses_display_hex() {
        let hash = Hash256::from_hex(PARENT_GENESIS).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", PARENT_GENESIS));
        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
