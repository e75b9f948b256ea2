//! # Indexed Binary Heap
//!
//! A min-heap keyed by caller-supplied slot ids, supporting the
//! decrease-key operation the A* open set needs. Slots are typically grid
//! cell indices, so membership checks and updates are O(1) lookups plus a
//! sift.

use std::collections::HashMap;

/// Min-heap with slot-id tracking and decrease-key.
#[derive(Debug, Clone, Default)]
pub struct IndexedHeap<T> {
    // (slot, value) pairs in heap order, smallest value at the root
    items: Vec<(usize, T)>,
    positions: HashMap<usize, usize>,
}

impl<T: Ord> IndexedHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates an empty heap with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if `slot` is currently queued.
    pub fn contains(&self, slot: usize) -> bool {
        self.positions.contains_key(&slot)
    }

    /// The queued value for `slot`, if any.
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.positions.get(&slot).map(|&i| &self.items[i].1)
    }

    /// Queues `value` under `slot`.
    ///
    /// If the slot is already queued its value is replaced and re-sifted,
    /// so `push` doubles as decrease-key.
    pub fn push(&mut self, slot: usize, value: T) {
        if let Some(&i) = self.positions.get(&slot) {
            let old = std::mem::replace(&mut self.items[i].1, value);
            if self.items[i].1 < old {
                self.sift_up(i);
            } else {
                self.sift_down(i);
            }
        } else {
            let i = self.items.len();
            self.items.push((slot, value));
            self.positions.insert(slot, i);
            self.sift_up(i);
        }
    }

    /// Replaces the value queued under `slot`, re-sifting in either
    /// direction. Returns false if the slot is not queued.
    pub fn update(&mut self, slot: usize, value: T) -> bool {
        if self.contains(slot) {
            self.push(slot, value);
            true
        } else {
            false
        }
    }

    /// Removes and returns the smallest `(slot, value)` pair.
    pub fn pop(&mut self) -> Option<(usize, T)> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let (slot, value) = self.items.pop().expect("non-empty after check");
        self.positions.remove(&slot);
        if !self.items.is_empty() {
            self.positions.insert(self.items[0].0, 0);
            self.sift_down(0);
        }
        Some((slot, value))
    }

    /// Drops every queued item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.positions.clear();
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.items[i].1 < self.items[parent].1 {
                self.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.items[left].1 < self.items[smallest].1 {
                smallest = left;
            }
            if right < len && self.items[right].1 < self.items[smallest].1 {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.positions.insert(self.items[a].0, a);
        self.positions.insert(self.items[b].0, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pops_in_ascending_order() {
        let mut heap = IndexedHeap::new();
        for (slot, value) in [(0, 30), (1, 10), (2, 20), (3, 5), (4, 25)] {
            heap.push(slot, value);
        }
        let mut popped = Vec::new();
        while let Some((_, value)) = heap.pop() {
            popped.push(value);
        }
        assert_eq!(popped, vec![5, 10, 20, 25, 30]);
    }

    #[test]
    fn decrease_key_moves_item_forward() {
        let mut heap = IndexedHeap::new();
        heap.push(0, 50);
        heap.push(1, 10);
        heap.push(2, 40);
        assert!(heap.update(2, 1));
        assert_eq!(heap.pop(), Some((2, 1)));
        assert_eq!(heap.pop(), Some((1, 10)));
        assert_eq!(heap.pop(), Some((0, 50)));
    }

    #[test]
    fn update_of_missing_slot_is_rejected() {
        let mut heap: IndexedHeap<u32> = IndexedHeap::new();
        assert!(!heap.update(7, 1));
        heap.push(7, 3);
        assert!(heap.contains(7));
        assert_eq!(heap.get(7), Some(&3));
        assert!(!heap.contains(8));
    }

    #[test]
    fn push_on_existing_slot_replaces() {
        let mut heap = IndexedHeap::new();
        heap.push(4, 10);
        heap.push(4, 2);
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.pop(), Some((4, 2)));
        assert!(heap.is_empty());
    }

    proptest! {
        #[test]
        fn heap_order_holds_for_random_input(values in proptest::collection::vec(0u32..1000, 1..64)) {
            let mut heap = IndexedHeap::new();
            for (slot, &value) in values.iter().enumerate() {
                heap.push(slot, value);
            }
            let mut sorted = values.clone();
            sorted.sort_unstable();
            let mut popped = Vec::new();
            while let Some((_, v)) = heap.pop() {
                popped.push(v);
            }
            prop_assert_eq!(popped, sorted);
        }
    }
}
