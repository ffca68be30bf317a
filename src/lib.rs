//! # `matgraph` - Dense Adjacency-Matrix Graph Engine
//!
//! A small in-memory graph engine: a vertex/edge-labeled graph over a
//! fixed-capacity adjacency matrix, plus two classic algorithms layered on
//! top of it - a Prim-Jarnik minimum-spanning-forest builder and an
//! iterative PageRank computation.
//!
//! ## Key Features
//!
//! - **O(1) structural queries**: adjacency, connecting edges, endpoints and
//!   opposites are direct matrix or record lookups.
//! - **Slot recycling**: removing a vertex immediately frees its matrix
//!   row/column pair; the lowest free slot is always reused first, so the
//!   full `MAX_VERTICES` capacity survives any insert/remove churn.
//! - **Generational handles**: `VertexId`/`EdgeId` carry generation
//!   counters, so a handle held past removal is rejected with a typed error
//!   instead of silently resolving to whatever recycled its slot.
//! - **Decorated algorithms**: algorithm runs attach transient per-vertex
//!   state (costs, predecessors, queue handles) through external
//!   `DecoratorMap` side-tables; vertex records never carry algorithm
//!   fields, and the algorithms never mutate the graph.
//!
//! ## Architecture
//!
//! - `collections`: the support structures - a generational `SlotArena` and
//!   an `AdaptableHeap` (binary min-heap with O(log n) decrease-key).
//! - `graph`: the `MatrixGraph` engine, `DecoratorMap`, and the two
//!   algorithms (`msf`, `pagerank`).
//! - `error`: the `GraphError` validation-failure taxonomy. Failures are
//!   immediate and leave no partial side effects.
//!
//! The engine is single-threaded and synchronous by design; callers own the
//! graph exclusively and algorithm runs never overlap on it. All returned
//! collections are materialized snapshots, unaffected by later mutation.
//!
//! ## Example
//!
//! ```rust
//! use matgraph::{minimum_spanning_forest, MatrixGraph};
//!
//! let mut graph = MatrixGraph::<&str, i32>::undirected();
//! let a = graph.insert_vertex("A");
//! let b = graph.insert_vertex("B");
//! let c = graph.insert_vertex("C");
//! graph.insert_edge(a, b, 1)?;
//! graph.insert_edge(b, c, 1)?;
//! graph.insert_edge(c, a, 10)?;
//!
//! let forest = minimum_spanning_forest(&graph)?;
//! let weight: i32 = forest
//!     .iter()
//!     .map(|e| *graph.edge_element(*e).unwrap())
//!     .sum();
//! assert_eq!(weight, 2);
//! # Ok::<(), matgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{AdaptableHeap, HeapHandle, SlotArena, SlotKey};
pub use error::GraphError;
pub use graph::{
    minimum_spanning_forest, minimum_spanning_forest_with_observer, page_rank, DecoratorMap,
    EdgeId, MatrixGraph, MsfObserver, PageRank, VertexId, MAX_VERTICES,
};

// Compile-time layout and capacity assertions.
const _: () = {
    use core::mem;

    // Handles are small copyable keys; passing them by value must stay cheap.
    assert!(mem::size_of::<VertexId>() == 8);
    assert!(mem::size_of::<EdgeId>() == 8);

    // Slot indices are stored as u32 throughout.
    assert!(MAX_VERTICES > 0);
    assert!(MAX_VERTICES <= u32::MAX as usize);
};
