//! CLI command implementations.

pub mod graph;
pub mod list;
pub mod sort;
pub mod tree;
