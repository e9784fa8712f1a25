//! Binary search tree.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::arena::{NodeArena, NodeId};

/// Traversal orders for a binary tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalOrder {
    /// Visit, left, right.
    PreOrder,
    /// Left, visit, right. Yields sorted order on a search tree.
    InOrder,
    /// Left, right, visit.
    PostOrder,
    /// Level order via a FIFO queue.
    BreadthFirst,
}

#[derive(Debug, Clone)]
pub(crate) struct BinaryNode {
    pub(crate) value: i64,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

/// A binary tree of integer values with search-tree mutation operations.
///
/// [`BinaryTree::insert`], [`BinaryTree::remove`], [`BinaryTree::modify`],
/// and [`BinaryTree::contains`] maintain and rely on the search ordering:
/// for every node, left subtree values < node value < right subtree values,
/// with no duplicates. Trees produced by [`crate::tree::NaryTree::to_binary`]
/// carry no such ordering; only the traversal and metric queries are
/// meaningful on them.
#[derive(Debug, Clone, Default)]
pub struct BinaryTree {
    arena: NodeArena<BinaryNode>,
    root: Option<NodeId>,
}

impl BinaryTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
        }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a value, keeping the search ordering.
    ///
    /// Returns `false` (and leaves the tree unchanged) if the value is
    /// already present.
    pub fn insert(&mut self, value: i64) -> bool {
        let Some(root) = self.root else {
            self.root = Some(self.alloc(value));
            return true;
        };
        let mut current = root;
        loop {
            let node_value = self.arena[current].value;
            if value < node_value {
                match self.arena[current].left {
                    Some(left) => current = left,
                    None => {
                        let leaf = self.alloc(value);
                        self.arena[current].left = Some(leaf);
                        return true;
                    }
                }
            } else if value > node_value {
                match self.arena[current].right {
                    Some(right) => current = right,
                    None => {
                        let leaf = self.alloc(value);
                        self.arena[current].right = Some(leaf);
                        return true;
                    }
                }
            } else {
                return false;
            }
        }
    }

    /// Removes a value. Returns `false` if it was absent.
    ///
    /// Deletion cases: a leaf is dropped; a node with one child is replaced
    /// by that child; a node with two children takes the value of its
    /// in-order successor (minimum of the right subtree), and the successor
    /// is removed from the right subtree.
    pub fn remove(&mut self, value: i64) -> bool {
        let mut removed = false;
        self.root = self.remove_rec(self.root, value, &mut removed);
        removed
    }

    /// Replaces `old` with `new` by deleting then re-inserting, which
    /// generally reshapes the tree. Returns `false` if `old` is absent.
    ///
    /// If `new` already exists elsewhere in the tree, the re-insert is a
    /// no-op and the net effect is the removal of `old`.
    pub fn modify(&mut self, old: i64, new: i64) -> bool {
        if !self.remove(old) {
            return false;
        }
        self.insert(new);
        true
    }

    /// Returns true if the value is present.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.arena[id];
            if value == node.value {
                return true;
            }
            cursor = if value < node.value {
                node.left
            } else {
                node.right
            };
        }
        false
    }

    /// Collects the values in the requested traversal order.
    #[must_use]
    pub fn traverse(&self, order: TraversalOrder) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len());
        match order {
            TraversalOrder::PreOrder => self.pre_order(self.root, &mut out),
            TraversalOrder::InOrder => self.in_order(self.root, &mut out),
            TraversalOrder::PostOrder => self.post_order(self.root, &mut out),
            TraversalOrder::BreadthFirst => self.breadth_first(&mut out),
        }
        out
    }

    /// Returns the height: 0 for an empty tree, 1 for a single node.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height_rec(self.root)
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    fn remove_rec(&mut self, node: Option<NodeId>, value: i64, removed: &mut bool) -> Option<NodeId> {
        let id = node?;
        let node_value = self.arena[id].value;
        if value < node_value {
            let new_left = self.remove_rec(self.arena[id].left, value, removed);
            self.arena[id].left = new_left;
            return Some(id);
        }
        if value > node_value {
            let new_right = self.remove_rec(self.arena[id].right, value, removed);
            self.arena[id].right = new_right;
            return Some(id);
        }

        *removed = true;
        match (self.arena[id].left, self.arena[id].right) {
            (None, replacement) | (replacement, None) => {
                self.arena.remove(id);
                replacement
            }
            (Some(_), Some(right)) => {
                let successor = self.min_value(right);
                self.arena[id].value = successor;
                let mut dropped = false;
                let new_right = self.remove_rec(Some(right), successor, &mut dropped);
                self.arena[id].right = new_right;
                Some(id)
            }
        }
    }

    fn min_value(&self, mut id: NodeId) -> i64 {
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        self.arena[id].value
    }

    fn pre_order(&self, node: Option<NodeId>, out: &mut Vec<i64>) {
        let Some(id) = node else { return };
        out.push(self.arena[id].value);
        self.pre_order(self.arena[id].left, out);
        self.pre_order(self.arena[id].right, out);
    }

    fn in_order(&self, node: Option<NodeId>, out: &mut Vec<i64>) {
        let Some(id) = node else { return };
        self.in_order(self.arena[id].left, out);
        out.push(self.arena[id].value);
        self.in_order(self.arena[id].right, out);
    }

    fn post_order(&self, node: Option<NodeId>, out: &mut Vec<i64>) {
        let Some(id) = node else { return };
        self.post_order(self.arena[id].left, out);
        self.post_order(self.arena[id].right, out);
        out.push(self.arena[id].value);
    }

    fn breadth_first(&self, out: &mut Vec<i64>) {
        let Some(root) = self.root else { return };
        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            let node = &self.arena[id];
            out.push(node.value);
            if let Some(left) = node.left {
                queue.push_back(left);
            }
            if let Some(right) = node.right {
                queue.push_back(right);
            }
        }
    }

    fn height_rec(&self, node: Option<NodeId>) -> usize {
        let Some(id) = node else { return 0 };
        let left = self.height_rec(self.arena[id].left);
        let right = self.height_rec(self.arena[id].right);
        1 + left.max(right)
    }

    pub(crate) fn alloc(&mut self, value: i64) -> NodeId {
        self.arena.insert(BinaryNode {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    pub(crate) fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.arena[parent].left = child;
    }

    pub(crate) fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.arena[parent].right = child;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_tree() -> BinaryTree {
        //        50
        //      /    \
        //    30      70
        //   /  \    /  \
        //  20  40  60  80
        let mut tree = BinaryTree::new();
        for v in [50, 30, 70, 20, 40, 60, 80] {
            assert!(tree.insert(v));
        }
        tree
    }

    #[test]
    fn test_insert_and_duplicates() {
        let mut tree = BinaryTree::new();
        assert!(tree.insert(10));
        assert!(tree.insert(5));
        assert!(tree.insert(15));
        assert_eq!(tree.len(), 3);

        assert!(!tree.insert(10));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_contains() {
        let tree = sample_tree();
        assert!(tree.contains(60));
        assert!(tree.contains(50));
        assert!(!tree.contains(65));
        assert!(!BinaryTree::new().contains(1));
    }

    #[test]
    fn test_traversals() {
        let tree = sample_tree();
        assert_eq!(
            tree.traverse(TraversalOrder::PreOrder),
            vec![50, 30, 20, 40, 70, 60, 80]
        );
        assert_eq!(
            tree.traverse(TraversalOrder::InOrder),
            vec![20, 30, 40, 50, 60, 70, 80]
        );
        assert_eq!(
            tree.traverse(TraversalOrder::PostOrder),
            vec![20, 40, 30, 60, 80, 70, 50]
        );
        assert_eq!(
            tree.traverse(TraversalOrder::BreadthFirst),
            vec![50, 30, 70, 20, 40, 60, 80]
        );
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = sample_tree();
        assert!(tree.remove(20));
        assert_eq!(
            tree.traverse(TraversalOrder::InOrder),
            vec![30, 40, 50, 60, 70, 80]
        );
    }

    #[test]
    fn test_remove_single_child() {
        let mut tree = BinaryTree::new();
        for v in [10, 5, 3] {
            tree.insert(v);
        }
        assert!(tree.remove(5));
        assert_eq!(tree.traverse(TraversalOrder::InOrder), vec![3, 10]);
        assert_eq!(tree.traverse(TraversalOrder::PreOrder), vec![10, 3]);
    }

    #[test]
    fn test_remove_two_children_uses_successor() {
        let mut tree = sample_tree();
        assert!(tree.remove(50));
        // 60 is the in-order successor and becomes the new root value.
        assert_eq!(
            tree.traverse(TraversalOrder::PreOrder),
            vec![60, 30, 20, 40, 70, 80]
        );
        assert_eq!(
            tree.traverse(TraversalOrder::InOrder),
            vec![20, 30, 40, 60, 70, 80]
        );
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut tree = sample_tree();
        assert!(!tree.remove(99));
        assert_eq!(tree.len(), 7);
        assert_eq!(
            tree.traverse(TraversalOrder::InOrder),
            vec![20, 30, 40, 50, 60, 70, 80]
        );
    }

    #[test]
    fn test_remove_root_until_empty() {
        let mut tree = BinaryTree::new();
        for v in [2, 1, 3] {
            tree.insert(v);
        }
        assert!(tree.remove(2));
        assert!(tree.remove(3));
        assert!(tree.remove(1));
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_modify_reshapes() {
        let mut tree = sample_tree();
        assert!(tree.modify(30, 75));
        assert!(!tree.contains(30));
        assert!(tree.contains(75));
        assert_eq!(
            tree.traverse(TraversalOrder::InOrder),
            vec![20, 40, 50, 60, 70, 75, 80]
        );

        assert!(!tree.modify(30, 1));
        assert!(!tree.contains(1));
    }

    #[test]
    fn test_modify_to_existing_value_collapses() {
        let mut tree = BinaryTree::new();
        for v in [2, 1, 3] {
            tree.insert(v);
        }
        assert!(tree.modify(1, 3));
        assert_eq!(tree.traverse(TraversalOrder::InOrder), vec![2, 3]);
    }

    #[test]
    fn test_height() {
        assert_eq!(BinaryTree::new().height(), 0);

        let mut tree = BinaryTree::new();
        tree.insert(1);
        assert_eq!(tree.height(), 1);

        assert_eq!(sample_tree().height(), 3);

        let mut chain = BinaryTree::new();
        for v in 0..5 {
            chain.insert(v);
        }
        assert_eq!(chain.height(), 5);
    }

    proptest! {
        #[test]
        fn prop_in_order_strictly_increasing(values in prop::collection::vec(-500i64..500, 0..64)) {
            let mut tree = BinaryTree::new();
            let mut distinct = std::collections::BTreeSet::new();
            for &v in &values {
                prop_assert_eq!(tree.insert(v), distinct.insert(v));
            }
            prop_assert_eq!(tree.len(), distinct.len());

            let in_order = tree.traverse(TraversalOrder::InOrder);
            prop_assert!(in_order.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(in_order, distinct.into_iter().collect::<Vec<_>>());
        }
    }
}
