//! Singly-linked list.

use algovis_common::{Error, Result, Value, ValueKind, ValueSource};

use crate::arena::{NodeArena, NodeId};
use crate::list::ListSortAlgorithm;

#[derive(Debug, Clone)]
struct SimpleNode {
    value: Value,
    next: Option<NodeId>,
}

/// A singly-linked list of homogeneously typed values.
///
/// Only the head is tracked, so end-insertion walks the chain. Positional
/// operations are O(position); out-of-range positions fail without mutating
/// the list.
#[derive(Debug, Clone)]
pub struct SimpleList {
    arena: NodeArena<SimpleNode>,
    head: Option<NodeId>,
    kind: ValueKind,
    len: usize,
}

impl SimpleList {
    /// Creates an empty list holding values of `kind`.
    #[must_use]
    pub fn new(kind: ValueKind) -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
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
        let node = self.arena.insert(SimpleNode {
            value,
            next: self.head,
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Inserts at the end. O(n): the chain is walked from the head.
    pub fn push_back(&mut self, value: Value) {
        debug_assert_eq!(value.kind(), self.kind);
        let node = self.arena.insert(SimpleNode { value, next: None });
        match self.last_id() {
            Some(last) => self.arena[last].next = Some(node),
            None => self.head = Some(node),
        }
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
        debug_assert_eq!(value.kind(), self.kind);
        let before = self.id_at(position - 1).expect("checked position");
        let node = self.arena.insert(SimpleNode {
            value,
            next: self.arena[before].next,
        });
        self.arena[before].next = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Removes the value at `position` and returns it. O(position).
    pub fn remove_at(&mut self, position: usize) -> Result<Value> {
        if position >= self.len {
            return Err(Error::PositionOutOfRange {
                position,
                len: self.len,
            });
        }
        let victim = if position == 0 {
            let victim = self.head.expect("non-empty list");
            self.head = self.arena[victim].next;
            victim
        } else {
            let before = self.id_at(position - 1).expect("checked position");
            let victim = self.arena[before].next.expect("checked position");
            self.arena[before].next = self.arena[victim].next;
            victim
        };
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

    /// Removes every value.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
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

    /// Re-links nodes one at a time into a sorted chain, then adopts the
    /// chain as the new list body.
    fn insertion_sort(&mut self) {
        let mut sorted: Option<NodeId> = None;
        let mut cursor = self.head;
        while let Some(current) = cursor {
            cursor = self.arena[current].next;
            match sorted {
                Some(first)
                    if self.arena[current]
                        .value
                        .compare(&self.arena[first].value)
                        .is_gt() =>
                {
                    let mut search = first;
                    while let Some(after) = self.arena[search].next {
                        if self.arena[current]
                            .value
                            .compare(&self.arena[after].value)
                            .is_gt()
                        {
                            search = after;
                        } else {
                            break;
                        }
                    }
                    self.arena[current].next = self.arena[search].next;
                    self.arena[search].next = Some(current);
                }
                _ => {
                    self.arena[current].next = sorted;
                    sorted = Some(current);
                }
            }
        }
        self.head = sorted;
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

    fn last_id(&self) -> Option<NodeId> {
        let mut cursor = self.head?;
        while let Some(next) = self.arena[cursor].next {
            cursor = next;
        }
        Some(cursor)
    }
}
