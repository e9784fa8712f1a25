//! Linked-list engines.
//!
//! Two link disciplines share one operation surface: positional insert,
//! delete, and modify, random fill, and three sort algorithms specialized
//! per discipline. Nodes live in a [`crate::arena::NodeArena`] and link by
//! id, so structural edits stay O(1) and deletion can never dangle.
//!
//! - [`SimpleList`] - singly linked, head only
//! - [`DoubleList`] - doubly linked with head and tail

mod double;
mod simple;

pub use double::DoubleList;
pub use simple::SimpleList;

use serde::{Deserialize, Serialize};

/// Which list sorting algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListSortAlgorithm {
    /// Adjacent payload swaps until a pass makes no swap.
    Bubble,
    /// Node re-linking into a sorted chain.
    Insertion,
    /// Minimum-payload swap per position.
    Selection,
}

impl ListSortAlgorithm {
    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ListSortAlgorithm::Bubble => "bubble",
            ListSortAlgorithm::Insertion => "insertion",
            ListSortAlgorithm::Selection => "selection",
        }
    }
}
