//! Tree engines.
//!
//! Two tree disciplines over integer values:
//!
//! - [`BinaryTree`] - a binary search tree: ordered, no duplicates, with the
//!   classic three-case deletion and four traversal orders.
//! - [`NaryTree`] - an unordered n-ary tree addressed by value lookup, with
//!   re-parenting deletion and three traversal orders (in-order is undefined
//!   for n-ary trees and deliberately not offered).
//!
//! [`NaryTree::to_binary`] converts between them via the canonical
//! first-child/next-sibling transform.
//!
//! Operations targeting an absent value are no-ops that report `false`; the
//! tree is never left half-mutated.

mod binary;
mod convert;
mod nary;

pub use binary::{BinaryTree, TraversalOrder};
pub use nary::{NaryTraversal, NaryTree};
