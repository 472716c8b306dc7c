//! # Node Runtime
//!
//! Establishes the chain parameters for this process and reports them.
//!
//! ```text
//! node-runtime -chain=liquidtest -fedpegscript=5221...52ae -printjson
//! node-runtime -regtest -vbparams=segwit:0:999999999999
//! node-runtime -conf=chain.toml
//! ```

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{bootstrap, ChainSummary, RuntimeConfig};

fn main() -> Result<()> {
    let config = RuntimeConfig::from_cli(std::env::args().skip(1))
        .context("Failed to parse arguments")?;

    // RUST_LOG wins over -loglevel
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("Invalid -loglevel={}", config.log_level))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(path) = &config.conf_path {
        info!(path = %path.display(), "Using config file");
    }

    let params = bootstrap(&config)?;

    if config.print_json {
        println!("{}", serde_json::to_string_pretty(params)?);
    } else {
        let summary = ChainSummary::from_params(params);
        summary.log();
        print!("{}", summary.render());
    }
    Ok(())
}
