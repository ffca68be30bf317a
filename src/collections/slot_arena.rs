//! `SlotArena` - a generational arena with an intrusive free list.
//!
//! Values are stored in slots addressed by a `SlotKey` (index + generation).
//! Removing a value bumps the slot's generation, so keys held past removal
//! are detected as stale rather than resolving to whatever value reused the
//! slot. Freed slots are chained through a `free_head` list and reused in
//! LIFO order.

/// A key for accessing a `SlotArena`.
///
/// Contains an index and a generation counter. A key is valid only while the
/// slot it names is occupied with the same generation it was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    index: u32,
    generation: u32,
}

impl SlotKey {
    #[inline(always)]
    fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the slot index this key addresses.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.index as usize
    }
}

enum Slot<T> {
    Occupied(T),
    Free { next_free: u32 },
}

struct Entry<T> {
    generation: u32,
    slot: Slot<T>,
}

/// A generational slot arena.
pub struct SlotArena<T> {
    entries: Vec<Entry<T>>,
    free_head: u32,
    len: usize,
}

/// Sentinel for "no free slots".
const NO_FREE_SLOT: u32 = u32::MAX;

impl<T> SlotArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free_head: NO_FREE_SLOT,
            len: 0,
        }
    }

    /// Creates an empty arena with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            free_head: NO_FREE_SLOT,
            len: 0,
        }
    }

    /// Returns the number of occupied slots.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slots are occupied.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a value, returning the key for the slot it occupies.
    ///
    /// Reuses the most recently freed slot if one exists, otherwise appends.
    pub fn insert(&mut self, value: T) -> SlotKey {
        self.len += 1;

        if self.free_head != NO_FREE_SLOT {
            let idx = self.free_head as usize;
            let entry = &mut self.entries[idx];
            let Slot::Free { next_free } = entry.slot else {
                unreachable!("free list points at an occupied slot");
            };
            self.free_head = next_free;
            entry.slot = Slot::Occupied(value);
            SlotKey::new(idx as u32, entry.generation)
        } else {
            let idx = self.entries.len();
            self.entries.push(Entry {
                generation: 0,
                slot: Slot::Occupied(value),
            });
            SlotKey::new(idx as u32, 0)
        }
    }

    /// Returns a shared reference to the value for `key`, or `None` if the
    /// key is stale.
    pub fn get(&self, key: SlotKey) -> Option<&T> {
        match self.entries.get(key.index()) {
            Some(entry) if entry.generation == key.generation => match &entry.slot {
                Slot::Occupied(value) => Some(value),
                Slot::Free { .. } => None,
            },
            _ => None,
        }
    }

    /// Returns a mutable reference to the value for `key`, or `None` if the
    /// key is stale.
    pub fn get_mut(&mut self, key: SlotKey) -> Option<&mut T> {
        match self.entries.get_mut(key.index()) {
            Some(entry) if entry.generation == key.generation => match &mut entry.slot {
                Slot::Occupied(value) => Some(value),
                Slot::Free { .. } => None,
            },
            _ => None,
        }
    }

    /// Removes the value for `key`, returning it, or `None` if the key is
    /// stale. The slot's generation is bumped so the key cannot resolve
    /// again.
    pub fn remove(&mut self, key: SlotKey) -> Option<T> {
        let idx = key.index();
        let entry = self.entries.get_mut(idx)?;
        if entry.generation != key.generation || matches!(entry.slot, Slot::Free { .. }) {
            return None;
        }

        let slot = core::mem::replace(
            &mut entry.slot,
            Slot::Free {
                next_free: self.free_head,
            },
        );
        entry.generation = entry.generation.wrapping_add(1);
        self.free_head = idx as u32;
        self.len -= 1;

        match slot {
            Slot::Occupied(value) => Some(value),
            Slot::Free { .. } => unreachable!("occupancy checked above"),
        }
    }

    /// Returns `true` if `key` names a live value.
    pub fn contains(&self, key: SlotKey) -> bool {
        self.get(key).is_some()
    }

    /// Removes all values, bumping the generation of every occupied slot so
    /// outstanding keys go stale. The free list is rebuilt over all slots,
    /// lowest index first.
    pub fn clear(&mut self) {
        self.free_head = NO_FREE_SLOT;
        for (idx, entry) in self.entries.iter_mut().enumerate().rev() {
            if matches!(entry.slot, Slot::Occupied(_)) {
                entry.generation = entry.generation.wrapping_add(1);
            }
            entry.slot = Slot::Free {
                next_free: self.free_head,
            };
            self.free_head = idx as u32;
        }
        self.len = 0;
    }

    /// Iterates over all occupied slots as `(key, &value)` pairs.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: self,
            index: 0,
            remaining: self.len,
        }
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the occupied slots of a `SlotArena`.
pub struct Iter<'a, T> {
    arena: &'a SlotArena<T>,
    index: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (SlotKey, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        while self.index < self.arena.entries.len() {
            let idx = self.index;
            self.index += 1;

            let entry = &self.arena.entries[idx];
            if let Slot::Occupied(value) = &entry.slot {
                self.remaining -= 1;
                return Some((SlotKey::new(idx as u32, entry.generation), value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
