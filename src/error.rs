//! Error types for graph operations.
//!
//! Every failure here is a caller-input validation failure, surfaced
//! immediately and with no partial side effects: the graph is left exactly as
//! it was before the failing call.

/// The error type for graph operations.
///
/// Handles (`VertexId`/`EdgeId`) are generational: a handle whose slot has
/// been freed, or whose generation no longer matches, is *stale* and behaves
/// like a missing argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphError {
    /// A required vertex argument was stale or belongs to another graph.
    InvalidVertex,
    /// A required edge argument was stale or belongs to another graph.
    InvalidEdge,
    /// No edge connects the queried pair of vertices under the current
    /// directedness.
    NoSuchEdge,
    /// The edge is not incident on the vertex it was checked against.
    NoSuchVertex,
    /// The operation is only meaningful on a directed graph.
    Direction,
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidVertex => f.write_str("invalid or stale vertex handle"),
            Self::InvalidEdge => f.write_str("invalid or stale edge handle"),
            Self::NoSuchEdge => f.write_str("no edge connects the given vertices"),
            Self::NoSuchVertex => f.write_str("edge is not incident on the given vertex"),
            Self::Direction => f.write_str("operation requires a directed graph"),
        }
    }
}

impl std::error::Error for GraphError {}
