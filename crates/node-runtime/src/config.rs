//! # Runtime Configuration
//!
//! Binary-level keys are read from the same argument table the profiles
//! consume, so `-chain` or `-printjson` may also live in the config file.

use std::path::PathBuf;

use chain_params::{ArgSource, ChainArgs, ChainParamsError, CUSTOM, REGTEST};
use thiserror::Error;

/// Default log filter when neither `RUST_LOG` nor `-loglevel` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Argument or config-file problem reported by the parameter crate.
    #[error(transparent)]
    Args(#[from] ChainParamsError),

    /// `-regtest` combined with a different `-chain`.
    #[error("Conflicting networks: -regtest and -chain={chain}")]
    ConflictingNetworks {
        /// Value of `-chain`.
        chain: String,
    },
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Network to select.
    pub network: String,
    /// TOML file merged beneath the command line.
    pub conf_path: Option<PathBuf>,
    /// `EnvFilter` directive.
    pub log_level: String,
    /// Print the full record as JSON instead of the summary.
    pub print_json: bool,
    /// `name:start:timeout` deployment overrides, in order.
    pub vbparams: Vec<String>,
    /// Merged argument table handed to the profiles.
    pub args: ChainArgs,
}

impl RuntimeConfig {
    /// Build from command-line tokens (program name excluded).
    pub fn from_cli<I, S>(tokens: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = ChainArgs::from_cli(tokens)?;
        let conf_path = args
            .get("conf")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        if let Some(path) = &conf_path {
            args.merge_defaults(ChainArgs::load_toml(path)?);
        }
        Self::from_args(args, conf_path)
    }

    /// Build from an already merged argument table.
    pub fn from_args(args: ChainArgs, conf_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let chain = args.get("chain").filter(|chain| !chain.is_empty());
        let network = if args.get_bool("regtest", false)? {
            match chain {
                Some(chain) if chain != REGTEST => {
                    return Err(ConfigError::ConflictingNetworks {
                        chain: chain.to_string(),
                    })
                }
                _ => REGTEST.to_string(),
            }
        } else {
            chain.unwrap_or(CUSTOM).to_string()
        };

        Ok(Self {
            network,
            conf_path,
            log_level: args.get_string("loglevel", DEFAULT_LOG_LEVEL),
            print_json: args.get_bool("printjson", false)?,
            vbparams: args
                .get_all("vbparams")
                .into_iter()
                .map(str::to_string)
                .collect(),
            args,
        })
    }
}
