//! Support collections for the graph engine and its algorithms.
//!
//! - `slot_arena`: generational slot storage with stale-key detection
//! - `adaptable_heap`: addressable min-heap with O(log n) key replacement

pub mod adaptable_heap;
pub mod slot_arena;

pub use adaptable_heap::{AdaptableHeap, HeapHandle};
pub use slot_arena::{SlotArena, SlotKey};
