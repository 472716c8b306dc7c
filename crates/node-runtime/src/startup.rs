//! # Startup
//!
//! Select, override, freeze. Errors carry the network name.

use anyhow::{Context, Result};
use chain_params::{ChainParameters, ChainParamsRegistry};
use tracing::info;

use crate::config::RuntimeConfig;

/// Select the configured network and apply its `-vbparams` overrides.
///
/// The registry is returned unfrozen so callers (and tests) can inspect it.
pub fn prepare_registry(config: &RuntimeConfig) -> Result<ChainParamsRegistry> {
    let mut registry = ChainParamsRegistry::new();
    registry
        .select(&config.network, &config.args)
        .with_context(|| format!("Failed to build parameters for network '{}'", config.network))?;

    if !config.vbparams.is_empty() {
        let mut overrides = registry
            .deployment_overrides()
            .with_context(|| format!("Cannot apply -vbparams on '{}'", config.network))?;
        for value in &config.vbparams {
            overrides
                .apply_vbparams(value)
                .with_context(|| format!("Invalid -vbparams={value}"))?;
        }
        info!(count = config.vbparams.len(), "Applied deployment overrides");
    }
    Ok(registry)
}

/// Build and publish the process-wide parameters.
pub fn bootstrap(config: &RuntimeConfig) -> Result<&'static ChainParameters> {
    prepare_registry(config)?
        .freeze()
        .with_context(|| format!("Failed to freeze parameters for '{}'", config.network))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_params::DeploymentPos;

    #[test]
    fn test_prepare_applies_vbparams() {
        let config =
            RuntimeConfig::from_cli(["-regtest", "-vbparams=csv:100:200"]).unwrap();
        let registry = prepare_registry(&config).unwrap();
        let csv = *registry
            .current()
            .unwrap()
            .consensus()
            .deployment(DeploymentPos::Csv);
        assert_eq!((csv.start_time, csv.timeout), (100, 200));
    }

    #[test]
    fn test_vbparams_rejected_on_non_test_network() {
        let config = RuntimeConfig::from_cli([
            "-chain=sealed",
            "-fmineblocksondemand=0",
            "-vbparams=csv:0:1",
        ])
        .unwrap();
        let err = prepare_registry(&config).unwrap_err();
        assert!(err.to_string().contains("sealed"));
    }

    #[test]
    fn test_bad_script_reports_network() {
        let config = RuntimeConfig::from_cli(["-chain=liquidtest", "-fedpegscript=zz"]).unwrap();
        let err = prepare_registry(&config).unwrap_err();
        assert!(format!("{err:#}").contains("liquidtest"));
        assert!(format!("{err:#}").contains("-fedpegscript"));
    }
}
