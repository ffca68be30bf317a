//! The adjacency-matrix graph engine and the algorithms built on it.
//!
//! - `matrix_graph`: the fixed-capacity dense graph representation
//! - `decorator`: transient per-run vertex metadata side-tables
//! - `msf`: Prim-Jarnik minimum spanning forest
//! - `pagerank`: iterative PageRank for directed graphs

pub mod decorator;
pub mod matrix_graph;
pub mod msf;
pub mod pagerank;

pub use decorator::DecoratorMap;
pub use matrix_graph::{EdgeId, MatrixGraph, VertexId, MAX_VERTICES};
pub use msf::{minimum_spanning_forest, minimum_spanning_forest_with_observer, MsfObserver};
pub use pagerank::{page_rank, PageRank};
