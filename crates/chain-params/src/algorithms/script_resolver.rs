//! # Script Resolution
//!
//! Script-valued arguments arrive as hex text. Absent or empty values fall
//! back to a profile default; malformed hex is fatal. A value made only of
//! whitespace was given explicitly and decodes to the empty script.

use shared_types::{HexError, Script};
use tracing::debug;

use crate::domain::{ChainParamsError, ChainParamsResult};
use crate::ports::ArgSource;

/// Decode `hex_config` as raw script bytes, or return `fallback` when it is
/// absent or empty.
///
/// Surrounding whitespace is stripped only for decoding, so `"  "` yields
/// an empty script rather than the fallback.
pub fn resolve_script(hex_config: Option<&str>, fallback: &Script) -> Result<Script, HexError> {
    match hex_config {
        Some(raw) if !raw.is_empty() => Script::from_hex(raw.trim()),
        _ => Ok(fallback.clone()),
    }
}

/// Resolve the script stored under `key`, naming the key and network on error.
pub fn resolve_script_arg(
    args: &dyn ArgSource,
    key: &str,
    network: &str,
    fallback: &Script,
) -> ChainParamsResult<Script> {
    let script = resolve_script(args.get(key), fallback).map_err(|err| {
        ChainParamsError::InvalidScriptHex {
            key: key.to_string(),
            network: network.to_string(),
            reason: err.to_string(),
        }
    })?;
    debug!(key, network, script = %script, "Resolved script argument");
    Ok(script)
}
