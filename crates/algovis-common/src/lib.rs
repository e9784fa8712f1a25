//! # algovis-common
//!
//! Foundation layer for Algovis: typed values, errors, and random data
//! generation.
//!
//! This crate provides the fundamental building blocks used by all other
//! Algovis crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions ([`Value`], [`ValueKind`])
//! - [`utils`] - Utility modules (errors, random value generation)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{Value, ValueKind};
pub use utils::error::{Error, Result};
pub use utils::rng::ValueSource;
