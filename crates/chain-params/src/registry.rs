//! # Parameter Registry
//!
//! Selects one profile by network name and holds the resulting record.
//!
//! `ChainParamsRegistry` is an owned context. The only post-construction
//! mutation, deployment windows for activation testing, needs `&mut` access
//! through `DeploymentOverrides`, so it cannot overlap with readers.
//! `freeze` moves the record into the process-wide slot read by `params()`;
//! once frozen it never changes.

use std::sync::OnceLock;

use tracing::{info, warn};

use crate::domain::{
    ChainParameters, ChainParamsError, ChainParamsResult, DeploymentPos, MAIN, REGTEST,
};
use crate::ports::ArgSource;
use crate::profiles::{
    build_custom_parameters, build_production_parameters, build_regtest_parameters,
};

static GLOBAL_PARAMS: OnceLock<ChainParameters> = OnceLock::new();

/// Build the parameters for `network`.
///
/// `main` and `regtest` pick their dedicated profiles; any other non-empty
/// name is a custom network identified by that name.
pub fn create_chain_params(
    network: &str,
    args: &dyn ArgSource,
) -> ChainParamsResult<ChainParameters> {
    match network {
        "" => Err(ChainParamsError::EmptyNetworkName),
        MAIN => build_production_parameters(args),
        REGTEST => build_regtest_parameters(args),
        custom => build_custom_parameters(custom, args),
    }
}

/// Holder of the single active parameter record.
#[derive(Debug, Default)]
pub struct ChainParamsRegistry {
    active: Option<ChainParameters>,
}

impl ChainParamsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct and store the parameters for `network`.
    ///
    /// Selection happens once; a second call fails with `AlreadySelected`.
    pub fn select(
        &mut self,
        network: &str,
        args: &dyn ArgSource,
    ) -> ChainParamsResult<&ChainParameters> {
        if let Some(active) = &self.active {
            return Err(ChainParamsError::AlreadySelected {
                active: active.network_id.clone(),
            });
        }
        let params = create_chain_params(network, args)?;
        info!(
            network = params.network_id(),
            genesis = %params.consensus().hash_genesis_block,
            "Selected chain parameters"
        );
        Ok(self.active.insert(params))
    }

    /// The active record.
    pub fn current(&self) -> ChainParamsResult<&ChainParameters> {
        self.active.as_ref().ok_or(ChainParamsError::NotSelected)
    }

    /// Test-support handle for deployment window overrides.
    ///
    /// Only networks that mine blocks on demand accept overrides.
    pub fn deployment_overrides(&mut self) -> ChainParamsResult<DeploymentOverrides<'_>> {
        let params = self.active.as_mut().ok_or(ChainParamsError::NotSelected)?;
        if !params.mine_blocks_on_demand() {
            return Err(ChainParamsError::OverrideNotPermitted {
                network: params.network_id.clone(),
            });
        }
        Ok(DeploymentOverrides { params })
    }

    /// Take the active record out of the registry.
    pub fn into_inner(self) -> ChainParamsResult<ChainParameters> {
        self.active.ok_or(ChainParamsError::NotSelected)
    }

    /// Publish the active record process-wide.
    pub fn freeze(self) -> ChainParamsResult<&'static ChainParameters> {
        let params = self.into_inner()?;
        let network = params.network_id.clone();
        GLOBAL_PARAMS
            .set(params)
            .map_err(|_| already_selected())?;
        info!(network = %network, "Froze chain parameters");
        GLOBAL_PARAMS.get().ok_or(ChainParamsError::NotSelected)
    }
}

/// Scoped write access to deployment windows of the active record.
#[derive(Debug)]
pub struct DeploymentOverrides<'a> {
    params: &'a mut ChainParameters,
}

impl DeploymentOverrides<'_> {
    /// Replace the signalling window of `pos`.
    ///
    /// The record is left untouched if the result would be invalid.
    pub fn override_window(
        &mut self,
        pos: DeploymentPos,
        start_time: i64,
        timeout: i64,
    ) -> ChainParamsResult<()> {
        self.params
            .update_deployment_window(pos, start_time, timeout)?;
        warn!(
            network = self.params.network_id(),
            deployment = pos.name(),
            start_time,
            timeout,
            "Overrode deployment window"
        );
        Ok(())
    }

    /// Apply one `name:start:timeout` value.
    pub fn apply_vbparams(&mut self, value: &str) -> ChainParamsResult<()> {
        let malformed = || ChainParamsError::MalformedVbParams {
            value: value.to_string(),
        };
        let mut parts = value.split(':');
        let (Some(name), Some(start), Some(timeout), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        let pos: DeploymentPos = name.parse()?;
        let start_time = start.trim().parse::<i64>().map_err(|_| malformed())?;
        let timeout = timeout.trim().parse::<i64>().map_err(|_| malformed())?;
        self.override_window(pos, start_time, timeout)
    }

    /// Current view of the record being edited.
    pub fn params(&self) -> &ChainParameters {
        self.params
    }
}

fn already_selected() -> ChainParamsError {
    ChainParamsError::AlreadySelected {
        active: GLOBAL_PARAMS
            .get()
            .map(|params| params.network_id.clone())
            .unwrap_or_default(),
    }
}

/// Select `network` and publish it process-wide in one step.
pub fn select_params(
    network: &str,
    args: &dyn ArgSource,
) -> ChainParamsResult<&'static ChainParameters> {
    if GLOBAL_PARAMS.get().is_some() {
        return Err(already_selected());
    }
    let mut registry = ChainParamsRegistry::new();
    registry.select(network, args)?;
    registry.freeze()
}

/// The process-wide parameters.
///
/// # Panics
///
/// Panics if no network has been selected. Reading parameters before
/// selection is a startup-order bug; use [`try_params`] to check first.
pub fn params() -> &'static ChainParameters {
    match GLOBAL_PARAMS.get() {
        Some(params) => params,
        None => panic!("{}", ChainParamsError::NotSelected),
    }
}

/// The process-wide parameters, or `NotSelected`.
pub fn try_params() -> ChainParamsResult<&'static ChainParameters> {
    GLOBAL_PARAMS.get().ok_or(ChainParamsError::NotSelected)
}
