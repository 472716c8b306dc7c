//! # Ports
//!
//! Interfaces the parameter profiles depend on.

pub mod outbound;

pub use outbound::ArgSource;
