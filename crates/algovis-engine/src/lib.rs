//! # algovis-engine
//!
//! The entry point a presentation layer talks to: configuration, wall-clock
//! timing of engine runs, and display-string formatting.
//!
//! The engines in `algovis-core` are pure with respect to time and
//! randomness; this crate supplies both. A [`Workbench`] owns the seeded
//! random source and wraps engine calls with timing and size-guard policy.
//!
//! ## Modules
//!
//! - [`config`] - Configuration options
//! - [`timing`] - `Timed` results and the measurement helper
//! - [`display`] - Display-string rendering of sequences, traversals, paths
//! - [`workbench`] - The facade object owning configuration and randomness

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod display;
pub mod timing;
pub mod workbench;

pub use config::Config;
pub use timing::{measure, Timed};
pub use workbench::Workbench;
