//! `DecoratorMap` - transient per-vertex metadata for algorithm runs.
//!
//! Algorithms attach working state (costs, predecessors, queue handles) to
//! vertices without the vertex records ever carrying algorithm fields: the
//! state lives in an external side-table keyed by vertex handle, created
//! fresh for each run and dropped afterwards.

use std::collections::HashMap;

use crate::graph::matrix_graph::VertexId;

/// A side-table mapping vertices to arbitrary per-run metadata.
///
/// Lookups of vertices that were never decorated return `None`; algorithms
/// rely on that absence signal (e.g. "no predecessor recorded yet").
#[derive(Debug, Clone, Default)]
pub struct DecoratorMap<T> {
    entries: HashMap<VertexId, T>,
}

impl<T> DecoratorMap<T> {
    /// Creates an empty decorator map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates an empty decorator map sized for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Decorates `vertex` with `value`, returning the previous decoration if
    /// one existed.
    pub fn set(&mut self, vertex: VertexId, value: T) -> Option<T> {
        self.entries.insert(vertex, value)
    }

    /// Returns the decoration on `vertex`, if any.
    pub fn get(&self, vertex: VertexId) -> Option<&T> {
        self.entries.get(&vertex)
    }

    /// Returns the decoration on `vertex` mutably, if any.
    pub fn get_mut(&mut self, vertex: VertexId) -> Option<&mut T> {
        self.entries.get_mut(&vertex)
    }

    /// Removes and returns the decoration on `vertex`, if any.
    pub fn remove(&mut self, vertex: VertexId) -> Option<T> {
        self.entries.remove(&vertex)
    }

    /// Returns `true` if `vertex` carries a decoration.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.entries.contains_key(&vertex)
    }

    /// Returns the number of decorated vertices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no vertex is decorated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all decorations.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over all `(vertex, decoration)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &T)> {
        self.entries.iter().map(|(vertex, value)| (*vertex, value))
    }
}

impl<T> IntoIterator for DecoratorMap<T> {
    type Item = (VertexId, T);
    type IntoIter = std::collections::hash_map::IntoIter<VertexId, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
