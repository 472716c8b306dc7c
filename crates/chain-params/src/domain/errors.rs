//! # Domain Errors
//!
//! Every variant is a fatal configuration error: the node must not start
//! with a partially built parameter record.

use shared_types::Amount;
use thiserror::Error;

/// Chain parameter construction and selection errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainParamsError {
    /// A script-valued key holds malformed hex.
    #[error("Invalid hex in -{key} for network '{network}': {reason}")]
    InvalidScriptHex {
        /// Argument name without the leading dash.
        key: String,
        /// Network being constructed.
        network: String,
        /// Decoder message.
        reason: String,
    },

    /// A typed argument could not be parsed.
    #[error("Invalid value {value:?} for -{key}: {reason}")]
    InvalidArgument {
        /// Argument name without the leading dash.
        key: String,
        /// Raw value as supplied.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// Genesis reward cannot be split into equal shards, or the shard
    /// count is outside `1..=MAX_REWARD_SHARDS`.
    #[error("Genesis reward {total_reward} cannot be split into {shards} shards")]
    InvalidRewardShards {
        /// Total genesis reward.
        total_reward: Amount,
        /// Requested output count.
        shards: u32,
    },

    /// Genesis hash not propagated to consensus params and checkpoint 0.
    #[error("Genesis hash mismatch for network '{network}'")]
    GenesisMismatch {
        /// Network being constructed.
        network: String,
    },

    /// Parameters read before any network was selected.
    #[error("Chain parameters requested before a network was selected")]
    NotSelected,

    /// A second selection was attempted.
    #[error("Chain parameters already selected for network '{active}'")]
    AlreadySelected {
        /// Network id of the active record.
        active: String,
    },

    /// Selection with an empty network name.
    #[error("Network name must not be empty")]
    EmptyNetworkName,

    /// Deployment name not in the fixed slot set.
    #[error("Unknown deployment: {0}")]
    UnknownDeployment(String),

    /// Start time after timeout.
    #[error("Invalid window for deployment {deployment}: start {start} > timeout {timeout}")]
    InvalidDeploymentWindow {
        /// Deployment name.
        deployment: String,
        /// Requested start time.
        start: i64,
        /// Requested timeout.
        timeout: i64,
    },

    /// Bit outside [0, 31] or shared by two deployments.
    #[error("Deployment {deployment} uses bit {bit}, which is out of range or already taken")]
    InvalidDeploymentBit {
        /// Deployment name.
        deployment: String,
        /// Offending bit.
        bit: u8,
    },

    /// Window overrides requested on a network that is not a test network.
    #[error("Deployment windows may only be overridden on test networks; '{network}' does not mine blocks on demand")]
    OverrideNotPermitted {
        /// Active network id.
        network: String,
    },

    /// `-vbparams` value not in `name:start:timeout` form.
    #[error("Malformed -vbparams value {value:?}: expected deployment:start:timeout")]
    MalformedVbParams {
        /// Raw value.
        value: String,
    },

    /// Config file missing or unparsable.
    #[error("Failed to load config file {path}: {reason}")]
    ConfigFile {
        /// File path.
        path: String,
        /// I/O or parse message.
        reason: String,
    },
}

/// Result type for chain parameter operations.
pub type ChainParamsResult<T> = Result<T, ChainParamsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_hex_error_names_key_and_network() {
        let err = ChainParamsError::InvalidScriptHex {
            key: "fedpegscript".to_string(),
            network: "liquidtest".to_string(),
            reason: "Invalid hex character 'z' at position 0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("-fedpegscript"));
        assert!(msg.contains("liquidtest"));
    }

    #[test]
    fn test_reward_shards_error() {
        let err = ChainParamsError::InvalidRewardShards {
            total_reward: 100,
            shards: 3,
        };
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("3 shards"));
    }

    #[test]
    fn test_already_selected_error() {
        let err = ChainParamsError::AlreadySelected {
            active: "regtest".to_string(),
        };
        assert!(err.to_string().contains("regtest"));
    }
}
