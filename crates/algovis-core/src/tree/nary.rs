//! N-ary tree.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::arena::{NodeArena, NodeId};

/// Traversal orders for an n-ary tree. In-order is undefined for n-ary
/// trees, so the variant does not exist here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaryTraversal {
    /// Visit, then children left to right.
    PreOrder,
    /// Children left to right, then visit.
    PostOrder,
    /// Level order via a FIFO queue.
    BreadthFirst,
}

#[derive(Debug, Clone)]
pub(crate) struct NaryNode {
    pub(crate) value: i64,
    pub(crate) children: SmallVec<[NodeId; 4]>,
}

/// An unordered n-ary tree of integer values, addressed by value.
///
/// Nodes carry an ordered child list but no ordering invariant holds among
/// children or across the tree, so value lookup is a full pre-order search.
/// Values are expected to be unique application-wide; with duplicates,
/// addressing resolves to the first pre-order match and the outcome for the
/// rest is undefined. Nothing enforces uniqueness.
#[derive(Debug, Clone, Default)]
pub struct NaryTree {
    arena: NodeArena<NaryNode>,
    root: Option<NodeId>,
}

impl NaryTree {
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

    /// Inserts `value` as a child of the node holding `parent_value`.
    ///
    /// An empty tree roots `value` and ignores `parent_value`. Returns
    /// `false` (no mutation) if the parent cannot be found.
    pub fn insert(&mut self, value: i64, parent_value: i64) -> bool {
        if self.root.is_none() {
            let root = self.alloc(value);
            self.root = Some(root);
            return true;
        }
        let Some(parent) = self.find(parent_value) else {
            return false;
        };
        let child = self.alloc(value);
        self.arena[parent].children.push(child);
        true
    }

    /// Removes the first pre-order node holding `value`, re-parenting its
    /// children. Returns `false` if the value is absent.
    ///
    /// Deleting the root promotes its first child as the new root and
    /// appends the root's remaining children to the promoted node; a
    /// childless root empties the tree. Deleting an interior node appends
    /// its children to its parent and shifts it out of the parent's child
    /// list.
    pub fn remove(&mut self, value: i64) -> bool {
        let Some(root) = self.root else {
            return false;
        };

        if self.arena[root].value == value {
            let old = self.arena.remove(root).expect("live root");
            match old.children.split_first() {
                Some((&promoted, siblings)) => {
                    self.arena[promoted].children.extend_from_slice(siblings);
                    self.root = Some(promoted);
                }
                None => self.root = None,
            }
            return true;
        }

        let Some((parent, slot)) = self.find_parent(root, value) else {
            return false;
        };
        let victim = self.arena[parent].children[slot];
        let orphans = self.arena.remove(victim).expect("live node").children;
        self.arena[parent].children.remove(slot);
        self.arena[parent].children.extend_from_slice(&orphans);
        true
    }

    /// Rewrites the value of the first pre-order node holding `old`, without
    /// restructuring. Returns `false` if `old` is absent.
    pub fn modify(&mut self, old: i64, new: i64) -> bool {
        match self.find(old) {
            Some(id) => {
                self.arena[id].value = new;
                true
            }
            None => false,
        }
    }

    /// Returns true if some node holds `value`.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.find(value).is_some()
    }

    /// Collects the values in the requested traversal order.
    #[must_use]
    pub fn traverse(&self, order: NaryTraversal) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len());
        match order {
            NaryTraversal::PreOrder => self.pre_order(self.root, &mut out),
            NaryTraversal::PostOrder => self.post_order(self.root, &mut out),
            NaryTraversal::BreadthFirst => self.breadth_first(&mut out),
        }
        out
    }

    /// Returns the height: 0 for an empty tree, 1 for a lone root.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height_rec(self.root)
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// First pre-order match for `value`.
    fn find(&self, value: i64) -> Option<NodeId> {
        fn walk(tree: &NaryTree, id: NodeId, value: i64) -> Option<NodeId> {
            if tree.arena[id].value == value {
                return Some(id);
            }
            for &child in &tree.arena[id].children {
                if let Some(found) = walk(tree, child, value) {
                    return Some(found);
                }
            }
            None
        }
        walk(self, self.root?, value)
    }

    /// Parent of the first pre-order match for `value`, with the child slot.
    fn find_parent(&self, id: NodeId, value: i64) -> Option<(NodeId, usize)> {
        for (slot, &child) in self.arena[id].children.iter().enumerate() {
            if self.arena[child].value == value {
                return Some((id, slot));
            }
            if let Some(found) = self.find_parent(child, value) {
                return Some(found);
            }
        }
        None
    }

    fn pre_order(&self, node: Option<NodeId>, out: &mut Vec<i64>) {
        let Some(id) = node else { return };
        out.push(self.arena[id].value);
        for &child in &self.arena[id].children {
            self.pre_order(Some(child), out);
        }
    }

    fn post_order(&self, node: Option<NodeId>, out: &mut Vec<i64>) {
        let Some(id) = node else { return };
        for &child in &self.arena[id].children {
            self.post_order(Some(child), out);
        }
        out.push(self.arena[id].value);
    }

    fn breadth_first(&self, out: &mut Vec<i64>) {
        let Some(root) = self.root else { return };
        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            let node = &self.arena[id];
            out.push(node.value);
            queue.extend(node.children.iter().copied());
        }
    }

    fn height_rec(&self, node: Option<NodeId>) -> usize {
        let Some(id) = node else { return 0 };
        let deepest = self.arena[id]
            .children
            .iter()
            .map(|&child| self.height_rec(Some(child)))
            .max()
            .unwrap_or(0);
        1 + deepest
    }

    fn alloc(&mut self, value: i64) -> NodeId {
        self.arena.insert(NaryNode {
            value,
            children: SmallVec::new(),
        })
    }

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &NaryNode {
        &self.arena[id]
    }
}
