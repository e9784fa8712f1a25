//! Utility modules shared across Algovis crates.

pub mod error;
pub mod rng;
