//! # Parameter Summary
//!
//! Human-readable digest of the active parameters, logged at startup.

use chain_params::{ChainParameters, DeploymentPos};
use serde::Serialize;
use tracing::info;

/// One deployment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentSummary {
    pub name: &'static str,
    pub bit: u8,
    pub start_time: i64,
    pub timeout: i64,
}

/// Digest of the identity-defining parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainSummary {
    pub network: String,
    pub genesis_hash: String,
    pub pegged_asset: String,
    /// Wire magic as hex.
    pub message_start: String,
    pub default_port: u16,
    pub fedpeg_script: String,
    pub signblock_script: String,
    pub deployments: Vec<DeploymentSummary>,
}

impl ChainSummary {
    pub fn from_params(params: &ChainParameters) -> Self {
        let consensus = params.consensus();
        Self {
            network: params.network_id().to_string(),
            genesis_hash: consensus.hash_genesis_block.to_hex(),
            pegged_asset: params.pegged_asset().to_string(),
            message_start: hex::encode(params.message_start()),
            default_port: params.default_port(),
            fedpeg_script: consensus.fedpeg_script.to_hex(),
            signblock_script: params.genesis_block().header.proof.challenge.to_hex(),
            deployments: DeploymentPos::all()
                .into_iter()
                .map(|pos| {
                    let deployment = consensus.deployment(pos);
                    DeploymentSummary {
                        name: pos.name(),
                        bit: deployment.bit,
                        start_time: deployment.start_time,
                        timeout: deployment.timeout,
                    }
                })
                .collect(),
        }
    }

    /// Multi-line text form.
    pub fn render(&self) -> String {
        let port = self.default_port.to_string();
        let rows = [
            ("network", self.network.as_str()),
            ("genesis", self.genesis_hash.as_str()),
            ("pegged asset", self.pegged_asset.as_str()),
            ("magic", self.message_start.as_str()),
            ("port", port.as_str()),
            ("fedpegscript", self.fedpeg_script.as_str()),
            ("signblockscript", self.signblock_script.as_str()),
        ];
        let mut out = String::new();
        for (label, value) in rows {
            out.push_str(&format!("{:<16} {}\n", format!("{label}:"), value));
        }
        for d in &self.deployments {
            out.push_str(&format!(
                "deployment {:<10} bit={:<2} start={} timeout={}\n",
                d.name, d.bit, d.start_time, d.timeout
            ));
        }
        out
    }

    /// Emit the summary as structured log events.
    pub fn log(&self) {
        info!(
            network = %self.network,
            genesis = %self.genesis_hash,
            pegged_asset = %self.pegged_asset,
            magic = %self.message_start,
            port = self.default_port,
            "Chain parameters ready"
        );
        for d in &self.deployments {
            info!(
                deployment = d.name,
                bit = d.bit,
                start_time = d.start_time,
                timeout = d.timeout,
                "Deployment"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_params::{create_chain_params, ChainArgs};

    #[test]
    fn test_regtest_summary() {
        let params = create_chain_params("regtest", &ChainArgs::new()).unwrap();
        let summary = ChainSummary::from_params(&params);
        assert_eq!(summary.network, "regtest");
        assert_eq!(summary.message_start, "fabfb5da");
        assert_eq!(summary.default_port, 7042);
        assert_eq!(summary.fedpeg_script, "51");
        assert_eq!(summary.signblock_script, "51");
        assert_eq!(summary.genesis_hash, params.genesis_block().hash().to_hex());
        assert_eq!(summary.deployments.len(), 3);
        assert_eq!(summary.deployments[0].name, "testdummy");
        assert_eq!(summary.deployments[0].bit, 28);
    }

    #[test]
    fn test_render_lists_every_deployment() {
        let params = create_chain_params("main", &ChainArgs::new()).unwrap();
        let text = ChainSummary::from_params(&params).render();
        assert!(text.starts_with("network:         main\n"));
        for name in ["testdummy", "csv", "segwit"] {
            assert!(text.contains(name));
        }
        assert!(text.contains("start=1199145601"));
    }
}
