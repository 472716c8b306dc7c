//! # Production Profile
//!
//! The custom construction for network `main`, followed by a fixed override
//! record. The overrides touch no field that feeds the commitment, so the
//! genesis block and pegged asset are exactly those of the custom pipeline.

use tracing::info;

use super::build_custom_parameters;
use crate::domain::{
    Base58Prefixes, ChainParameters, ChainParamsResult, DeploymentParams, DeploymentPos, MAIN,
};
use crate::ports::ArgSource;

/// Values production replaces after the custom construction.
///
/// Crate-private: the record is applied once inside
/// [`build_production_parameters`] and never to an arbitrary network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ProductionOverrides {
    /// 95% of a 2016-block window.
    rule_change_activation_threshold: u32,
    miner_confirmation_window: u32,
    /// Pinned to calendar year 2008.
    test_dummy: DeploymentParams,
    base58_prefixes: Base58Prefixes,
}

impl Default for ProductionOverrides {
    fn default() -> Self {
        Self {
            rule_change_activation_threshold: 1916,
            miner_confirmation_window: 2016,
            test_dummy: DeploymentParams::new(28, 1_199_145_601, 1_230_767_999),
            base58_prefixes: Base58Prefixes::production(),
        }
    }
}

impl ProductionOverrides {
    /// Apply the record to already-built parameters.
    pub(crate) fn apply(&self, params: &mut ChainParameters) -> ChainParamsResult<()> {
        params.consensus.rule_change_activation_threshold = self.rule_change_activation_threshold;
        params.consensus.miner_confirmation_window = self.miner_confirmation_window;
        params.consensus.deployments[DeploymentPos::TestDummy.index()] = self.test_dummy;
        params.base58_prefixes = self.base58_prefixes.clone();
        params.check_invariants()
    }
}

/// Build the `main` parameters.
///
/// The override record is not part of the public API, so it cannot be
/// replayed onto other networks:
///
/// ```compile_fail
/// use chain_params::ProductionOverrides;
/// ```
pub fn build_production_parameters(args: &dyn ArgSource) -> ChainParamsResult<ChainParameters> {
    let mut params = build_custom_parameters(MAIN, args)?;
    ProductionOverrides::default().apply(&mut params)?;
    info!(
        network = MAIN,
        genesis = %params.consensus.hash_genesis_block,
        "Applied production overrides"
    );
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ChainArgs;
    use crate::domain::Base58Type;

    #[test]
    fn test_production_overrides() {
        let params = build_production_parameters(&ChainArgs::new()).unwrap();
        assert_eq!(params.network_id(), "main");
        assert_eq!(params.consensus().rule_change_activation_threshold, 1916);
        assert_eq!(params.consensus().miner_confirmation_window, 2016);

        let dummy = params.consensus().deployment(DeploymentPos::TestDummy);
        assert_eq!(dummy.bit, 28);
        assert_eq!(dummy.start_time, 1_199_145_601);
        assert_eq!(dummy.timeout, 1_230_767_999);

        assert_eq!(params.base58_prefix(Base58Type::PubkeyAddress), &[0]);
        assert_eq!(params.base58_prefix(Base58Type::SecretKey), &[128]);
    }

    #[test]
    fn test_production_reuses_custom_genesis() {
        let custom = build_custom_parameters(MAIN, &ChainArgs::new()).unwrap();
        let main = build_production_parameters(&ChainArgs::new()).unwrap();
        assert_eq!(main.genesis_block(), custom.genesis_block());
        assert_eq!(main.pegged_asset(), custom.pegged_asset());
        assert_eq!(main.checkpoints(), custom.checkpoints());
        // Untouched deployments keep the custom windows.
        assert_eq!(
            main.consensus().deployment(DeploymentPos::Segwit),
            custom.consensus().deployment(DeploymentPos::Segwit)
        );
    }

    #[test]
    fn test_production_honours_custom_keys() {
        let args = ChainArgs::new().with("ndefaultport", "8333");
        let params = build_production_parameters(&args).unwrap();
        assert_eq!(params.default_port(), 8333);
    }
}
