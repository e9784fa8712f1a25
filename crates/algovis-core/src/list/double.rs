//! Doubly-linked list.

use algovis_common::{Error, Result, Value, ValueKind, ValueSource};

use crate::arena::{NodeArena, NodeId};
use crate::list::ListSortAlgorithm;

#[derive(Debug, Clone)]
struct DoubleNode {
    value: Value,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// A doubly-linked list of homogeneously typed values.
///
/// Tracks head and tail, so both end insertions are O(1). Link invariant:
/// `node.next.prev == node` and `node.prev.next == node` for all interior
/// nodes, `head.prev == None`, `tail.next == None`. Every operation,
/// including the re-splicing insertion sort, restores the invariant before
/// returning.
#[derive(Debug, Clone)]
pub struct DoubleList {
    arena: NodeArena<DoubleNode>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    kind: ValueKind,
    len: usize,
}

impl DoubleList {
    /// Creates an empty list holding values of `kind`.
    #[must_use]
    pub fn new(kind: ValueKind) -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
            kind,
            len: 0,
        }
    }

    /// Returns the configured value kind.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns the number of values in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts at the front. O(1).
    pub fn push_front(&mut self, value: Value) {
        debug_assert_eq!(value.kind(), self.kind);
        let node = self.arena.insert(DoubleNode {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old) => self.arena[old].prev = Some(node),
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Inserts at the end. O(1) via the tail pointer.
    pub fn push_back(&mut self, value: Value) {
        debug_assert_eq!(value.kind(), self.kind);
        let node = self.arena.insert(DoubleNode {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old) => self.arena[old].next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Inserts at `position`, where `position == len` appends. O(position).
    pub fn insert_at(&mut self, position: usize, value: Value) -> Result<()> {
        if position > self.len {
            return Err(Error::PositionOutOfRange {
                position,
                len: self.len,
            });
        }
        if position == 0 {
            self.push_front(value);
            return Ok(());
        }
        if position == self.len {
            self.push_back(value);
            return Ok(());
        }
        debug_assert_eq!(value.kind(), self.kind);
        let after = self.id_at(position).expect("checked position");
        let before = self.arena[after].prev.expect("interior node");
        let node = self.arena.insert(DoubleNode {
            value,
            prev: Some(before),
            next: Some(after),
        });
        self.arena[before].next = Some(node);
        self.arena[after].prev = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Removes the value at `position` and returns it. O(position).
    pub fn remove_at(&mut self, position: usize) -> Result<Value> {
        let victim = self.id_at(position).ok_or(Error::PositionOutOfRange {
            position,
            len: self.len,
        })?;
        self.unlink(victim);
        self.len -= 1;
        Ok(self.arena.remove(victim).expect("live node").value)
    }

    /// Replaces the value at `position`; the prior value is dropped.
    pub fn set_at(&mut self, position: usize, value: Value) -> Result<()> {
        debug_assert_eq!(value.kind(), self.kind);
        let id = self.id_at(position).ok_or(Error::PositionOutOfRange {
            position,
            len: self.len,
        })?;
        self.arena[id].value = value;
        Ok(())
    }

    /// Returns the value at `position`, if in range. O(position).
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Value> {
        self.id_at(position).map(|id| &self.arena[id].value)
    }

    /// Appends `count` random values of the list's kind.
    pub fn fill_random(&mut self, source: &mut ValueSource, count: usize) {
        for _ in 0..count {
            let value = source.next_value(self.kind);
            self.push_back(value);
        }
    }

    /// Iterates front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let id = cursor?;
            cursor = self.arena[id].next;
            Some(&self.arena[id].value)
        })
    }

    /// Iterates back to front.
    pub fn iter_rev(&self) -> impl Iterator<Item = &Value> {
        let mut cursor = self.tail;
        std::iter::from_fn(move || {
            let id = cursor?;
            cursor = self.arena[id].prev;
            Some(&self.arena[id].value)
        })
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Sorts the list in place into ascending order.
    pub fn sort(&mut self, algorithm: ListSortAlgorithm) {
        if self.len < 2 {
            return;
        }
        match algorithm {
            ListSortAlgorithm::Bubble => self.bubble_sort(),
            ListSortAlgorithm::Insertion => self.insertion_sort(),
            ListSortAlgorithm::Selection => self.selection_sort(),
        }
    }

    fn bubble_sort(&mut self) {
        loop {
            let mut swapped = false;
            let mut cursor = self.head;
            while let Some(current) = cursor {
                let Some(next) = self.arena[current].next else {
                    break;
                };
                if self.arena[current]
                    .value
                    .compare(&self.arena[next].value)
                    .is_gt()
                {
                    self.swap_values(current, next);
                    swapped = true;
                }
                cursor = Some(next);
            }
            if !swapped {
                break;
            }
        }
    }

    /// Removes each out-of-place node and re-splices it after the last
    /// earlier node that is not greater, walking backwards over `prev` links.
    /// Head and tail stay valid at every step.
    fn insertion_sort(&mut self) {
        let mut cursor = self.head.and_then(|head| self.arena[head].next);
        while let Some(current) = cursor {
            cursor = self.arena[current].next;

            let mut search = self.arena[current].prev;
            while let Some(candidate) = search {
                if self.arena[current]
                    .value
                    .compare(&self.arena[candidate].value)
                    .is_lt()
                {
                    search = self.arena[candidate].prev;
                } else {
                    break;
                }
            }

            if search == self.arena[current].prev {
                continue; // already placed
            }

            self.unlink(current);
            match search {
                Some(after) => {
                    let following = self.arena[after].next.expect("interior splice point");
                    self.arena[current].next = Some(following);
                    self.arena[current].prev = Some(after);
                    self.arena[following].prev = Some(current);
                    self.arena[after].next = Some(current);
                }
                None => {
                    let old_head = self.head.expect("non-empty list");
                    self.arena[current].next = Some(old_head);
                    self.arena[current].prev = None;
                    self.arena[old_head].prev = Some(current);
                    self.head = Some(current);
                }
            }
        }
    }

    fn selection_sort(&mut self) {
        let mut cursor = self.head;
        while let Some(current) = cursor {
            let mut min = current;
            let mut search = self.arena[current].next;
            while let Some(candidate) = search {
                if self.arena[candidate]
                    .value
                    .compare(&self.arena[min].value)
                    .is_lt()
                {
                    min = candidate;
                }
                search = self.arena[candidate].next;
            }
            if min != current {
                self.swap_values(current, min);
            }
            cursor = self.arena[current].next;
        }
    }

    /// Detaches a node from the chain, fixing head/tail. The node's own
    /// links are left stale for the caller to overwrite or free.
    fn unlink(&mut self, id: NodeId) {
        let prev = self.arena[id].prev;
        let next = self.arena[id].next;
        match prev {
            Some(prev) => self.arena[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.arena[next].prev = prev,
            None => self.tail = prev,
        }
    }

    fn swap_values(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);
        let value_a = std::mem::replace(&mut self.arena[a].value, Value::Int(0));
        let value_b = std::mem::replace(&mut self.arena[b].value, value_a);
        self.arena[a].value = value_b;
    }

    fn id_at(&self, position: usize) -> Option<NodeId> {
        if position >= self.len {
            return None;
        }
        let mut cursor = self.head?;
        for _ in 0..position {
            cursor = self.arena[cursor].next?;
        }
        Some(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORTS: [ListSortAlgorithm; 3] = [
        ListSortAlgorithm::Bubble,
        ListSortAlgorithm::Insertion,
        ListSortAlgorithm::Selection,
    ];

    fn collect(list: &DoubleList) -> Vec<i64> {
        list.iter().filter_map(Value::as_int).collect()
    }

    fn from_ints(values: &[i64]) -> DoubleList {
        let mut list = DoubleList::new(ValueKind::Int);
        for &v in values {
            list.push_back(Value::Int(v));
        }
        list
    }

    /// Forward and backward walks must visit the same values in mutually
    /// reversed order.
    fn assert_links_consistent(list: &DoubleList) {
        let forward: Vec<&Value> = list.iter().collect();
        let mut backward: Vec<&Value> = list.iter_rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), list.len());
    }

    #[test]
    fn test_push_both_ends() {
        let mut list = DoubleList::new(ValueKind::Int);
        list.push_back(Value::Int(2));
        list.push_front(Value::Int(1));
        list.push_back(Value::Int(3));
        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_links_consistent(&list);
    }

    #[test]
    fn test_insert_at() {
        let mut list = from_ints(&[1, 4]);
        list.insert_at(1, Value::Int(2)).unwrap();
        list.insert_at(2, Value::Int(3)).unwrap();
        list.insert_at(4, Value::Int(5)).unwrap();
        list.insert_at(0, Value::Int(0)).unwrap();
        assert_eq!(collect(&list), vec![0, 1, 2, 3, 4, 5]);
        assert_links_consistent(&list);

        assert!(list.insert_at(7, Value::Int(9)).is_err());
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn test_remove_at() {
        let mut list = from_ints(&[1, 2, 3, 4, 5]);
        assert_eq!(list.remove_at(0).unwrap(), Value::Int(1));
        assert_eq!(list.remove_at(3).unwrap(), Value::Int(5));
        assert_eq!(list.remove_at(1).unwrap(), Value::Int(3));
        assert_eq!(collect(&list), vec![2, 4]);
        assert_links_consistent(&list);

        assert!(list.remove_at(5).is_err());

        list.remove_at(0).unwrap();
        list.remove_at(0).unwrap();
        assert!(list.is_empty());
        assert_links_consistent(&list);
    }

    #[test]
    fn test_set_and_get() {
        let mut list = from_ints(&[1, 2, 3]);
        list.set_at(2, Value::Int(30)).unwrap();
        assert_eq!(list.get(2), Some(&Value::Int(30)));
        assert!(list.set_at(3, Value::Int(0)).is_err());
    }

    #[test]
    fn test_sorts_preserve_links() {
        for algo in SORTS {
            let mut list = from_ints(&[9, 1, 8, 3, 3, 7, 0]);
            list.sort(algo);
            assert_eq!(collect(&list), vec![0, 1, 3, 3, 7, 8, 9], "{algo:?}");
            assert_links_consistent(&list);
        }
    }

    #[test]
    fn test_insertion_sort_moves_head_and_tail() {
        // Smallest value last and largest first exercises both relocations.
        let mut list = from_ints(&[5, 2, 4, 1]);
        list.sort(ListSortAlgorithm::Insertion);
        assert_eq!(collect(&list), vec![1, 2, 4, 5]);
        assert_links_consistent(&list);
        assert_eq!(list.get(0), Some(&Value::Int(1)));
        assert_eq!(list.get(3), Some(&Value::Int(5)));
    }

    #[test]
    fn test_sorts_after_mixed_edits() {
        for algo in SORTS {
            let mut list = from_ints(&[6, 2, 9]);
            list.insert_at(1, Value::Int(7)).unwrap();
            list.remove_at(0).unwrap();
            list.push_front(Value::Int(4));
            list.sort(algo);
            assert_eq!(collect(&list), vec![2, 4, 7, 9], "{algo:?}");
            assert_links_consistent(&list);
        }
    }

    #[test]
    fn test_fill_random() {
        let mut source = ValueSource::with_seed(11);
        let mut list = DoubleList::new(ValueKind::Float);
        list.fill_random(&mut source, 20);
        assert_eq!(list.len(), 20);
        assert!(list.iter().all(|v| v.kind() == ValueKind::Float));
        assert_links_consistent(&list);
    }
}
