//! Iterative PageRank for directed graphs.
//!
//! Power iteration with damping and uniform sink redistribution. Ranks are
//! double-buffered (`previous`/`current`) over a vertex enumeration captured
//! once at the start of the run; the enumeration order is arbitrary but must
//! stay consistent across the buffers, which it does by construction.
//!
//! Sink handling: each round, the total sink mass `sum(previous[sink]) / n`
//! is written into *every* `current` entry as the provisional base rank, and
//! incoming-edge contributions are then accumulated on top. The overwrite
//! happens before accumulation, never after.

use crate::error::GraphError;
use crate::graph::decorator::DecoratorMap;
use crate::graph::matrix_graph::MatrixGraph;

/// The probability of following a link versus jumping uniformly at random.
pub const DAMPING_FACTOR: f64 = 0.85;

/// Upper bound on power-iteration rounds; termination is guaranteed by this
/// cap even when convergence is not reached.
pub const MAX_ITERATIONS: usize = 100;

/// Per-vertex convergence tolerance between consecutive rounds.
pub const CONVERGENCE_TOLERANCE: f64 = 0.01;

/// PageRank parameters.
///
/// [`PageRank::default`] gives the standard configuration (damping 0.85,
/// tolerance 0.01, 100-iteration cap); [`page_rank`] is a shorthand for it.
#[derive(Debug, Clone, Copy)]
pub struct PageRank {
    /// Damping factor in `(0, 1)`.
    pub damping: f64,
    /// Convergence tolerance on per-vertex rank movement.
    pub tolerance: f64,
    /// Hard cap on iteration count.
    pub max_iterations: usize,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: DAMPING_FACTOR,
            tolerance: CONVERGENCE_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl PageRank {
    /// Computes a rank for every vertex of a directed graph.
    ///
    /// Ranks sum to approximately 1 (within the convergence tolerance). An
    /// empty graph yields an empty mapping without iterating. The graph is
    /// only read, never mutated.
    ///
    /// # Errors
    /// [`GraphError::Direction`] if the graph is undirected: sinks are
    /// defined through out-degrees, which undirected graphs do not have.
    pub fn ranks<V, E>(&self, graph: &MatrixGraph<V, E>) -> Result<DecoratorMap<f64>, GraphError> {
        let vertices = graph.vertices();
        let n = vertices.len();

        let mut ranks = DecoratorMap::with_capacity(n);
        if n == 0 {
            return Ok(ranks);
        }

        // Fixed enumeration: position in `vertices` indexes every buffer.
        let mut position = DecoratorMap::with_capacity(n);
        for (i, &v) in vertices.iter().enumerate() {
            position.set(v, i);
        }

        let mut out_degree = Vec::with_capacity(n);
        let mut sinks = Vec::new();
        for (i, &v) in vertices.iter().enumerate() {
            let degree = graph.num_outgoing_edges(v)?;
            out_degree.push(degree);
            if degree == 0 {
                sinks.push(i);
            }
        }

        // Incoming contributor positions, resolved once; the graph is frozen
        // for the duration of the run.
        let mut contributors: Vec<Vec<usize>> = Vec::with_capacity(n);
        for &v in &vertices {
            let mut sources = Vec::new();
            for edge in graph.incoming_edges(v)? {
                let u = graph.opposite(v, edge)?;
                sources.push(*position.get(u).expect("enumeration covers all vertices"));
            }
            contributors.push(sources);
        }

        let n_f = n as f64;
        let mut current = vec![1.0 / n_f; n];
        let mut previous = vec![0.0; n];

        let mut rounds = 0;
        for _ in 0..self.max_iterations {
            rounds += 1;
            previous.copy_from_slice(&current);

            // Redistribute sink mass uniformly: it becomes every vertex's
            // provisional base rank for this round (overwrite, not add).
            let sink_sum: f64 = sinks.iter().map(|&i| previous[i] / n_f).sum();
            current.fill(sink_sum);

            for (i, sources) in contributors.iter().enumerate() {
                for &u in sources {
                    current[i] += previous[u] / out_degree[u] as f64;
                }
                current[i] = (1.0 - self.damping) / n_f + self.damping * current[i];
            }

            let converged = current
                .iter()
                .zip(&previous)
                .all(|(c, p)| (c - p).abs() <= self.tolerance);
            if converged {
                break;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(vertices = n, rounds, "pagerank finished");
        #[cfg(not(feature = "tracing"))]
        let _ = rounds;

        for (i, &v) in vertices.iter().enumerate() {
            ranks.set(v, current[i]);
        }
        Ok(ranks)
    }
}

/// Computes PageRank with the default parameters.
///
/// # Errors
/// [`GraphError::Direction`] if the graph is undirected.
pub fn page_rank<V, E>(graph: &MatrixGraph<V, E>) -> Result<DecoratorMap<f64>, GraphError> {
    PageRank::default().ranks(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank_sum(ranks: &DecoratorMap<f64>) -> f64 {
        ranks.iter().map(|(_, r)| *r).sum()
    }

    #[test]
    fn empty_graph_returns_empty_mapping() {
        let graph = MatrixGraph::<&str, ()>::directed();
        let ranks = page_rank(&graph).unwrap();
        assert!(ranks.is_empty());
    }

    #[test]
    fn single_vertex_holds_all_rank() {
        let mut graph = MatrixGraph::<&str, ()>::directed();
        let a = graph.insert_vertex("A");
        let ranks = page_rank(&graph).unwrap();
        assert_eq!(ranks.len(), 1);
        assert!((ranks.get(a).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn four_cycle_converges_to_quarter() {
        let mut graph = MatrixGraph::<&str, ()>::directed();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        let d = graph.insert_vertex("D");
        graph.insert_edge(a, b, ()).unwrap();
        graph.insert_edge(b, c, ()).unwrap();
        graph.insert_edge(c, d, ()).unwrap();
        graph.insert_edge(d, a, ()).unwrap();

        let ranks = page_rank(&graph).unwrap();
        assert_eq!(ranks.len(), 4);
        assert!((rank_sum(&ranks) - 1.0).abs() <= 0.03);
        for v in [a, b, c, d] {
            assert!((ranks.get(v).unwrap() - 0.25).abs() <= 0.03);
        }
    }

    #[test]
    fn sink_mass_is_redistributed() {
        // A and B both link to sink C; C's mass flows back to everyone.
        let mut graph = MatrixGraph::<&str, ()>::directed();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        graph.insert_edge(a, c, ()).unwrap();
        graph.insert_edge(b, c, ()).unwrap();

        let ranks = page_rank(&graph).unwrap();
        assert!((rank_sum(&ranks) - 1.0).abs() <= 0.03);
        // The sink accumulates the most rank; its feeders stay symmetric.
        assert!(ranks.get(c).unwrap() > ranks.get(a).unwrap());
        assert!((ranks.get(a).unwrap() - ranks.get(b).unwrap()).abs() < 1e-9);
    }

    #[test]
    fn hub_outranks_leaves() {
        // Two leaves pointing at a hub which points back at one of them.
        let mut graph = MatrixGraph::<&str, ()>::directed();
        let hub = graph.insert_vertex("hub");
        let x = graph.insert_vertex("x");
        let y = graph.insert_vertex("y");
        graph.insert_edge(x, hub, ()).unwrap();
        graph.insert_edge(y, hub, ()).unwrap();
        graph.insert_edge(hub, x, ()).unwrap();

        let ranks = page_rank(&graph).unwrap();
        assert!((rank_sum(&ranks) - 1.0).abs() <= 0.03);
        assert!(ranks.get(hub).unwrap() > ranks.get(y).unwrap());
        assert!(ranks.get(x).unwrap() > ranks.get(y).unwrap());
    }

    #[test]
    fn undirected_graph_is_rejected() {
        let mut graph = MatrixGraph::<&str, ()>::undirected();
        graph.insert_vertex("A");
        assert_eq!(page_rank(&graph).unwrap_err(), GraphError::Direction);
    }

    #[test]
    fn termination_is_capped() {
        // Two vertices flip-flopping mass still terminate within the cap.
        let mut graph = MatrixGraph::<&str, ()>::directed();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        graph.insert_edge(a, b, ()).unwrap();
        graph.insert_edge(b, a, ()).unwrap();

        let config = PageRank {
            tolerance: 0.0,
            ..PageRank::default()
        };
        let ranks = config.ranks(&graph).unwrap();
        assert_eq!(ranks.len(), 2);
        assert!((rank_sum(&ranks) - 1.0).abs() <= 0.03);
    }
}
