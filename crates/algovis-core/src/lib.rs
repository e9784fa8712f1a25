//! # algovis-core
//!
//! Core layer for Algovis: the algorithm engines behind the visualizer.
//!
//! This crate provides the data structures and algorithms the GUI layer
//! animates. It depends only on `algovis-common`. Engines never depend on
//! each other, and every operation is synchronous and single-threaded: the
//! calling layer serializes access through its own event dispatch.
//!
//! ## Modules
//!
//! - [`arena`] - Index-based node storage with free-list reuse
//! - [`sort`] - Array sorting (bubble, insertion, shell, quick)
//! - [`list`] - Singly- and doubly-linked lists with positional ops and sorts
//! - [`tree`] - Binary search tree, n-ary tree, and n-ary→binary conversion
//! - [`graph`] - Adjacency-matrix graph with shortest-path algorithms

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod graph;
pub mod list;
pub mod sort;
pub mod tree;

// Re-export commonly used types
pub use arena::{NodeArena, NodeId};
pub use graph::{Graph, PathAlgorithm, PathResult, MAX_VERTICES};
pub use list::{DoubleList, ListSortAlgorithm, SimpleList};
pub use sort::SortAlgorithm;
pub use tree::{BinaryTree, NaryTraversal, NaryTree, TraversalOrder};
