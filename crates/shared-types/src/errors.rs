//! # Error Types
//!
//! Errors raised while decoding hex-encoded chain values.

use thiserror::Error;

/// Errors that can occur when parsing hex text into a chain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// A character outside `[0-9a-fA-F]` was found.
    #[error("Invalid hex character {character:?} at position {index}")]
    InvalidCharacter { character: char, index: usize },

    /// The input encodes more than 32 bytes.
    #[error("Hex string too long: {len} digits, at most 64 allowed")]
    TooLong { len: usize },

    /// The input is not a whole number of bytes.
    #[error("Hex string has odd length")]
    OddLength,
}

impl From<hex::FromHexError> for HexError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidCharacter {
                character: c,
                index,
            },
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                HexError::OddLength
            }
        }
    }
}
