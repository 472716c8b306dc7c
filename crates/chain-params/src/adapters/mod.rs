//! # Adapters
//!
//! Concrete argument sources.

pub mod args;

pub use args::ChainArgs;
