//! # Outbound Ports (Driven Ports)
//!
//! Profiles read operator configuration through `ArgSource`, never from a
//! process-wide argument table.
//!
//! Production: `ChainArgs` built from the command line and a TOML file.
//! Testing: `ChainArgs::new().with(..)`.

use primitive_types::U256;
use shared_types::Hash256;

use crate::domain::{ChainParamsError, ChainParamsResult};

/// Read-only key/value view of operator arguments.
///
/// Keys carry no leading dash. The provided readers follow the node's
/// argument conventions: an absent key or an empty value yields the
/// default, and an unparsable value is a fatal `InvalidArgument`.
pub trait ArgSource: Send + Sync {
    /// Last value stored under `key`.
    fn get(&self, key: &str) -> Option<&str>;

    /// Every value stored under `key`, in insertion order.
    fn get_all(&self, key: &str) -> Vec<&str>;

    /// Whether `key` was given at all.
    fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Boolean flag.
    ///
    /// A bare `-key` (empty value) is true. Otherwise `true`/`false` or an
    /// integer, where any non-zero integer is true.
    fn get_bool(&self, key: &str, default: bool) -> ChainParamsResult<bool> {
        let Some(raw) = self.get(key) else {
            return Ok(default);
        };
        match raw.trim() {
            "" | "true" => Ok(true),
            "false" => Ok(false),
            value => value
                .parse::<i64>()
                .map(|n| n != 0)
                .map_err(|err| invalid(key, raw, err)),
        }
    }

    fn get_i64(&self, key: &str, default: i64) -> ChainParamsResult<i64> {
        parse_or(self, key, default)
    }

    fn get_i32(&self, key: &str, default: i32) -> ChainParamsResult<i32> {
        parse_or(self, key, default)
    }

    fn get_u32(&self, key: &str, default: u32) -> ChainParamsResult<u32> {
        parse_or(self, key, default)
    }

    fn get_u16(&self, key: &str, default: u16) -> ChainParamsResult<u16> {
        parse_or(self, key, default)
    }

    fn get_u64(&self, key: &str, default: u64) -> ChainParamsResult<u64> {
        parse_or(self, key, default)
    }

    /// 256-bit hash in display (reversed) hex; `0x` prefix and short values
    /// are accepted.
    fn get_hash(&self, key: &str, default: Hash256) -> ChainParamsResult<Hash256> {
        match self.get(key).map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                Hash256::from_hex(raw).map_err(|err| invalid(key, raw, err))
            }
            _ => Ok(default),
        }
    }

    /// 256-bit number written as a display-order hex hash.
    fn get_u256(&self, key: &str, default: U256) -> ChainParamsResult<U256> {
        match self.get(key).map(str::trim) {
            Some(raw) if !raw.is_empty() => Hash256::from_hex(raw)
                .map(|hash| U256::from_little_endian(hash.as_bytes()))
                .map_err(|err| invalid(key, raw, err)),
            _ => Ok(default),
        }
    }
}

fn parse_or<S, T>(args: &S, key: &str, default: T) -> ChainParamsResult<T>
where
    S: ArgSource + ?Sized,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.get(key).map(str::trim) {
        Some(raw) if !raw.is_empty() => raw.parse().map_err(|err| invalid(key, raw, err)),
        _ => Ok(default),
    }
}

fn invalid(key: &str, value: &str, reason: impl std::fmt::Display) -> ChainParamsError {
    ChainParamsError::InvalidArgument {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
