//! Index-based node storage with free-list reuse.
//!
//! Lists and trees own their nodes through a [`NodeArena`] and reference
//! children and links by [`NodeId`] instead of pointers. Removing a node
//! marks its slot free for reuse; a stale id can at worst read a recycled
//! slot, never dangle.

use std::fmt;

/// Dense identifier for an arena slot.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates an id from a raw index.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    data: Option<T>,
    next_free: Option<u32>,
}

/// Contiguous node storage with free-list reuse.
///
/// Slots freed by [`NodeArena::remove`] are recycled most-recently-freed
/// first, so allocation order is deterministic for a given sequence of
/// operations.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    live: usize,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    /// Stores `data` in a slot and returns its id.
    pub fn insert(&mut self, data: T) -> NodeId {
        self.live += 1;
        if let Some(idx) = self.free_head {
            let slot = &mut self.slots[idx as usize];
            debug_assert!(slot.data.is_none());
            self.free_head = slot.next_free;
            slot.data = Some(data);
            slot.next_free = None;
            NodeId(idx)
        } else {
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                data: Some(data),
                next_free: None,
            });
            NodeId(idx)
        }
    }

    /// Frees a slot, returning its data if the slot was live.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let slot = self.slots.get_mut(id.index())?;
        let data = slot.data.take()?;
        slot.next_free = self.free_head;
        self.free_head = Some(id.0);
        self.live -= 1;
        Some(data)
    }

    /// Returns a reference to the node at `id`, if live.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.index()).and_then(|s| s.data.as_ref())
    }

    /// Returns a mutable reference to the node at `id`, if live.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.index()).and_then(|s| s.data.as_mut())
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if no nodes are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Frees all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::ops::Index<NodeId> for NodeArena<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the slot is not live. Structure code only indexes with ids
    /// it owns, so a panic here indicates a broken link invariant.
    fn index(&self, id: NodeId) -> &T {
        self.get(id).expect("live arena slot")
    }
}

impl<T> std::ops::IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        self.get_mut(id).expect("live arena slot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get() {
        let mut arena = NodeArena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_remove_then_get() {
        let mut arena = NodeArena::new();
        let a = arena.insert(1);
        assert_eq!(arena.remove(a), Some(1));
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.remove(a), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn test_slot_reuse() {
        let mut arena = NodeArena::new();
        let a = arena.insert(1);
        let _b = arena.insert(2);
        arena.remove(a);
        // Most recently freed slot is recycled first.
        let c = arena.insert(3);
        assert_eq!(c, a);
        assert_eq!(arena.get(c), Some(&3));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut arena = NodeArena::new();
        let a = arena.insert(1);
        arena.insert(2);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(a), None);
    }
}
