//! # Domain Module
//!
//! Parameter records and the error taxonomy.

pub mod consensus;
pub mod deployment;
pub mod errors;
pub mod params;

pub use consensus::*;
pub use deployment::*;
pub use errors::*;
pub use params::*;
