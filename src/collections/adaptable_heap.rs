//! `AdaptableHeap` - a binary min-heap with addressable entries.
//!
//! Each `push` hands back a `HeapHandle` that can later be used to change
//! that entry's key in place (`replace_key`), restoring heap order with a
//! single sift. This is the priority structure Prim-Jarnik needs: without an
//! O(log n) decrease-key the algorithm degrades past its
//! O((|E| + |V|) log |V|) bound.
//!
//! Entries live in a stable slot table; the heap itself is a vector of slot
//! indices plus a back-pointer (`pos`) per entry so an entry can be located
//! in O(1) when its key changes.

/// A handle to an entry in an `AdaptableHeap`.
///
/// Handles are only meaningful for the heap that issued them, and only until
/// the entry is popped. Like [`SlotKey`](crate::collections::SlotKey), a
/// handle carries a generation counter, so a handle held past its entry's
/// removal stays stale even after the slot is recycled by a later push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapHandle {
    slot: u32,
    generation: u32,
}

struct HeapEntry<K, T> {
    key: K,
    value: T,
    /// Index of this entry in `heap`.
    pos: usize,
}

/// A priority queue implemented with a binary min-heap, supporting key
/// replacement through handles.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `push` | O(log n) |
/// | `pop_min` | O(log n) |
/// | `replace_key` | O(log n) |
/// | `peek_min` | O(1) |
pub struct AdaptableHeap<K, T> {
    entries: Vec<Option<HeapEntry<K, T>>>,
    /// Per-slot generation counters, bumped whenever a slot is vacated.
    generations: Vec<u32>,
    free: Vec<u32>,
    /// `heap[i]` is an index into `entries`; min-ordered by entry key.
    heap: Vec<u32>,
}

impl<K: Ord, T> AdaptableHeap<K, T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            generations: Vec::new(),
            free: Vec::new(),
            heap: Vec::new(),
        }
    }

    /// Creates an empty heap with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            generations: Vec::with_capacity(capacity),
            free: Vec::new(),
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Pushes a keyed entry, returning a handle for later key replacement.
    pub fn push(&mut self, key: K, value: T) -> HeapHandle {
        let pos = self.heap.len();
        let entry = HeapEntry { key, value, pos };

        let slot = if let Some(slot) = self.free.pop() {
            self.entries[slot as usize] = Some(entry);
            slot
        } else {
            self.entries.push(Some(entry));
            self.generations.push(0);
            (self.entries.len() - 1) as u32
        };

        self.heap.push(slot);
        self.sift_up(pos);
        HeapHandle {
            slot,
            generation: self.generations[slot as usize],
        }
    }

    /// Removes and returns the minimum-key entry.
    pub fn pop_min(&mut self) -> Option<(K, T)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let slot = self.heap.pop().expect("non-empty checked above");
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        self.free.push(slot);
        self.generations[slot as usize] = self.generations[slot as usize].wrapping_add(1);
        let entry = self.entries[slot as usize]
            .take()
            .expect("heap referenced a vacant entry");
        Some((entry.key, entry.value))
    }

    /// Returns the minimum-key entry without removing it.
    pub fn peek_min(&self) -> Option<(&K, &T)> {
        let slot = *self.heap.first()?;
        let entry = self.entries[slot as usize].as_ref()?;
        Some((&entry.key, &entry.value))
    }

    /// Replaces the key of the entry behind `handle`, restoring heap order.
    ///
    /// Returns `false` if the handle is stale (its entry was already popped),
    /// even when the slot has since been recycled by another push. Both
    /// decreases and increases are accepted.
    pub fn replace_key(&mut self, handle: HeapHandle, key: K) -> bool {
        let slot = handle.slot as usize;
        if self.generations.get(slot) != Some(&handle.generation) {
            return false;
        }
        let Some(Some(entry)) = self.entries.get_mut(slot) else {
            return false;
        };

        let pos = entry.pos;
        let went_down = key < entry.key;
        entry.key = key;

        if went_down {
            self.sift_up(pos);
        } else {
            self.sift_down(pos);
        }
        true
    }

    /// Clears the heap, invalidating all outstanding handles.
    pub fn clear(&mut self) {
        for (slot, entry) in self.entries.iter_mut().enumerate() {
            if entry.take().is_some() {
                self.generations[slot] = self.generations[slot].wrapping_add(1);
                self.free.push(slot as u32);
            }
        }
        self.heap.clear();
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    // Compares the keys at two heap positions.
    fn less(&self, a: usize, b: usize) -> bool {
        let key_a = &self.entries[self.heap[a] as usize]
            .as_ref()
            .expect("heap referenced a vacant entry")
            .key;
        let key_b = &self.entries[self.heap[b] as usize]
            .as_ref()
            .expect("heap referenced a vacant entry")
            .key;
        key_a < key_b
    }

    // Swaps two heap positions and fixes the entries' back-pointers.
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        for pos in [a, b] {
            let slot = self.heap[pos] as usize;
            if let Some(entry) = self.entries[slot].as_mut() {
                entry.pos = pos;
            }
        }
    }
}

impl<K: Ord, T> Default for AdaptableHeap<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_key_order() {
        let mut heap = AdaptableHeap::new();
        for (key, value) in [(5, 'e'), (1, 'a'), (4, 'd'), (2, 'b'), (3, 'c')] {
            heap.push(key, value);
        }

        let mut drained = Vec::new();
        while let Some(entry) = heap.pop_min() {
            drained.push(entry);
        }
        assert_eq!(drained, vec![(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd'), (5, 'e')]);
    }

    #[test]
    fn replace_key_reorders() {
        let mut heap = AdaptableHeap::new();
        heap.push(10, "ten");
        let h = heap.push(20, "twenty");
        heap.push(30, "thirty");

        assert!(heap.replace_key(h, 1));
        assert_eq!(heap.pop_min(), Some((1, "twenty")));
        assert_eq!(heap.pop_min(), Some((10, "ten")));

        // Increases are accepted too.
        let h = heap.push(5, "five");
        heap.push(7, "seven");
        assert!(heap.replace_key(h, 40));
        assert_eq!(heap.pop_min(), Some((7, "seven")));
    }

    #[test]
    fn stale_handle_rejected() {
        let mut heap = AdaptableHeap::new();
        let h = heap.push(1, ());
        heap.pop_min();
        assert!(!heap.replace_key(h, 0));
    }

    #[test]
    fn stale_handle_rejected_after_slot_reuse() {
        let mut heap = AdaptableHeap::new();
        let old = heap.push(10, "old");
        heap.pop_min();

        // The next push recycles the freed slot; the popped entry's handle
        // must not rekey the entry that took its place.
        let new = heap.push(5, "new");
        assert!(!heap.replace_key(old, 1));
        assert_eq!(heap.peek_min(), Some((&5, &"new")));

        assert!(heap.replace_key(new, 2));
        assert_eq!(heap.pop_min(), Some((2, "new")));
    }

    #[test]
    fn clear_invalidates_outstanding_handles() {
        let mut heap = AdaptableHeap::new();
        let h = heap.push(3, "a");
        heap.clear();
        assert!(heap.is_empty());

        heap.push(9, "b");
        assert!(!heap.replace_key(h, 1));
        assert_eq!(heap.pop_min(), Some((9, "b")));
    }

    #[test]
    fn peek_does_not_remove() {
        let mut heap = AdaptableHeap::new();
        heap.push(2, "b");
        heap.push(1, "a");

        assert_eq!(heap.peek_min(), Some((&1, &"a")));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn slots_are_recycled_after_pop() {
        let mut heap = AdaptableHeap::new();
        for i in 0..100 {
            heap.push(i, i);
        }
        for _ in 0..100 {
            heap.pop_min();
        }
        assert!(heap.is_empty());
        assert_eq!(heap.entries.len(), 100);

        // Refill reuses the freed entry slots.
        for i in 0..100 {
            heap.push(i, i);
        }
        assert_eq!(heap.entries.len(), 100);
    }

    #[test]
    fn equal_keys_all_surface() {
        let mut heap = AdaptableHeap::new();
        for value in 0..10 {
            heap.push(7, value);
        }
        let mut values: Vec<i32> = std::iter::from_fn(|| heap.pop_min().map(|(_, v)| v)).collect();
        values.sort_unstable();
        assert_eq!(values, (0..10).collect::<Vec<_>>());
    }
}
