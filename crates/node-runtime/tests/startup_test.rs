//! End-to-end startup: arguments in, frozen parameters out.
//!
//! Freezing is process-wide, so the binary holds a single test.

use chain_params::{params, DeploymentPos};
use node_runtime::{bootstrap, ChainSummary, RuntimeConfig};

#[test]
fn test_bootstrap_freezes_selected_network() {
    let config = RuntimeConfig::from_cli([
        "-chain=liquidtest",
        "-signblockscript=5151",
        "-vbparams=segwit:0:1",
    ])
    .unwrap();

    let frozen = bootstrap(&config).unwrap();
    assert!(std::ptr::eq(frozen, params()));
    assert_eq!(frozen.network_id(), "liquidtest");
    assert_eq!(frozen.consensus().deployment(DeploymentPos::Segwit).timeout, 1);

    let summary = ChainSummary::from_params(frozen);
    assert_eq!(summary.signblock_script, "5151");

    let json = serde_json::to_string(frozen).unwrap();
    assert!(json.contains("liquidtest"));

    let err = bootstrap(&config).unwrap_err();
    assert!(format!("{err:#}").contains("already selected"));
}
