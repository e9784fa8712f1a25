//! Core type definitions for Algovis.
//!
//! This module contains the typed-value model shared by every engine:
//! - [`Value`] - a closed sum over the four supported data kinds
//! - [`ValueKind`] - the discriminant used to configure homogeneous structures

mod value;

pub use value::{Value, ValueKind};
