//! # Node Runtime Library
//!
//! Startup plumbing around `chain-params`, exposed for testing. The main
//! entry point is the `main.rs` binary.
//!
//! ## Startup Sequence
//!
//! 1. Parse command-line tokens, merge the `-conf` TOML file beneath them
//! 2. Install the tracing subscriber
//! 3. Select the network and build its parameters
//! 4. Apply `-vbparams` deployment overrides (test networks only)
//! 5. Freeze the parameters process-wide
//! 6. Log the summary, or print the full record as JSON

pub mod config;
pub mod startup;
pub mod summary;

pub use config::{ConfigError, RuntimeConfig};
pub use startup::{bootstrap, prepare_registry};
pub use summary::ChainSummary;
