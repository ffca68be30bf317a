//! Prim-Jarnik minimum spanning forest.
//!
//! The classic Prim-Jarnik algorithm grows a single tree from a start
//! vertex. This variant seeds the priority queue with *every* vertex at
//! infinite cost: whenever the minimum extraction has no recorded
//! predecessor, it roots a fresh tree instead of emitting an edge, so
//! disconnected graphs yield a spanning forest rather than one tree.
//!
//! Per-vertex working state (best cost, predecessor, queue handle, frontier
//! membership) lives in [`DecoratorMap`]s; the graph itself is only read
//! through its public query contract and never mutated. The
//! [`AdaptableHeap`] provides the O(log |V|) decrease-key that keeps the
//! whole run within O((|E| + |V|) log |V|).

use num_traits::{Bounded, Zero};

use crate::collections::AdaptableHeap;
use crate::error::GraphError;
use crate::graph::decorator::DecoratorMap;
use crate::graph::matrix_graph::{EdgeId, MatrixGraph, VertexId};

/// An observer of minimum-spanning-forest progress.
///
/// Intended for visualizers and instrumentation: every method has a no-op
/// default, and nothing the observer does can influence the computed forest.
pub trait MsfObserver<V, E> {
    /// A vertex was extracted from the frontier and settled into the forest.
    fn vertex_settled(&mut self, graph: &MatrixGraph<V, E>, vertex: VertexId) {
        let _ = (graph, vertex);
    }

    /// An edge was emitted into the forest.
    fn edge_selected(&mut self, graph: &MatrixGraph<V, E>, edge: EdgeId) {
        let _ = (graph, edge);
    }

    /// An edge improved the best known cost of a frontier vertex.
    fn edge_relaxed(&mut self, graph: &MatrixGraph<V, E>, edge: EdgeId) {
        let _ = (graph, edge);
    }
}

/// Computes the minimum spanning forest of `graph`, returning its edge set.
///
/// Edge elements are the weights; a graph with `k` connected components and
/// `n` vertices yields exactly `n - k` edges. An empty graph yields an empty
/// set. Ties between equal-cost candidates are broken arbitrarily; the total
/// weight is minimal either way.
///
/// # Errors
/// Propagates [`GraphError`] from graph queries; none occur for handles the
/// run itself obtained from `graph`.
pub fn minimum_spanning_forest<V, E>(graph: &MatrixGraph<V, E>) -> Result<Vec<EdgeId>, GraphError>
where
    E: Copy + Ord + Bounded + Zero,
{
    run(graph, None)
}

/// [`minimum_spanning_forest`] with a progress observer attached.
pub fn minimum_spanning_forest_with_observer<V, E>(
    graph: &MatrixGraph<V, E>,
    observer: &mut dyn MsfObserver<V, E>,
) -> Result<Vec<EdgeId>, GraphError>
where
    E: Copy + Ord + Bounded + Zero,
{
    run(graph, Some(observer))
}

fn run<V, E>(
    graph: &MatrixGraph<V, E>,
    mut observer: Option<&mut dyn MsfObserver<V, E>>,
) -> Result<Vec<EdgeId>, GraphError>
where
    E: Copy + Ord + Bounded + Zero,
{
    let vertices = graph.vertices();
    let mut forest = Vec::new();
    if vertices.is_empty() {
        return Ok(forest);
    }

    // Best known cost of attaching each vertex to the growing forest.
    // E::max_value() stands in for +infinity.
    let mut cost: DecoratorMap<E> = DecoratorMap::with_capacity(vertices.len());
    let mut predecessor: DecoratorMap<VertexId> = DecoratorMap::new();
    let mut in_frontier: DecoratorMap<bool> = DecoratorMap::with_capacity(vertices.len());

    for &v in &vertices {
        cost.set(v, E::max_value());
        in_frontier.set(v, true);
    }
    cost.set(vertices[0], E::zero());

    let mut queue = AdaptableHeap::with_capacity(vertices.len());
    let mut handle = DecoratorMap::with_capacity(vertices.len());
    for &v in &vertices {
        let key = *cost.get(v).expect("every vertex was seeded with a cost");
        handle.set(v, queue.push(key, v));
    }

    while let Some((_, u)) = queue.pop_min() {
        in_frontier.set(u, false);
        if let Some(&prev) = predecessor.get(u) {
            let edge = graph.connecting_edge(prev, u)?;
            forest.push(edge);
            if let Some(observer) = observer.as_deref_mut() {
                observer.edge_selected(graph, edge);
            }
        }
        if let Some(observer) = observer.as_deref_mut() {
            observer.vertex_settled(graph, u);
        }

        for edge in graph.outgoing_edges(u)? {
            let w = graph.opposite(u, edge)?;
            if !matches!(in_frontier.get(w), Some(true)) {
                continue;
            }
            let weight = *graph.edge_element(edge)?;
            if weight < *cost.get(w).expect("frontier vertices keep a cost") {
                cost.set(w, weight);
                predecessor.set(w, u);
                let h = *handle.get(w).expect("every vertex was queued");
                queue.replace_key(h, weight);
                if let Some(observer) = observer.as_deref_mut() {
                    observer.edge_relaxed(graph, edge);
                }
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        vertices = vertices.len(),
        forest_edges = forest.len(),
        "minimum spanning forest complete"
    );

    Ok(forest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_weight(graph: &MatrixGraph<&str, i32>, forest: &[EdgeId]) -> i32 {
        forest.iter().map(|e| *graph.edge_element(*e).unwrap()).sum()
    }

    #[test]
    fn triangle_drops_heaviest_edge() {
        let mut graph = MatrixGraph::<&str, i32>::undirected();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        let ab = graph.insert_edge(a, b, 1).unwrap();
        let bc = graph.insert_edge(b, c, 1).unwrap();
        let ca = graph.insert_edge(c, a, 10).unwrap();

        let forest = minimum_spanning_forest(&graph).unwrap();
        assert_eq!(forest.len(), 2);
        assert!(forest.contains(&ab));
        assert!(forest.contains(&bc));
        assert!(!forest.contains(&ca));
        assert_eq!(total_weight(&graph, &forest), 2);
    }

    #[test]
    fn empty_graph_yields_empty_forest() {
        let graph = MatrixGraph::<&str, i32>::undirected();
        assert!(minimum_spanning_forest(&graph).unwrap().is_empty());
    }

    #[test]
    fn single_vertex_yields_empty_forest() {
        let mut graph = MatrixGraph::<&str, i32>::undirected();
        graph.insert_vertex("A");
        assert!(minimum_spanning_forest(&graph).unwrap().is_empty());
    }

    #[test]
    fn disconnected_components_form_a_forest() {
        let mut graph = MatrixGraph::<&str, i32>::undirected();
        // Component one: a path of three vertices.
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        graph.insert_edge(a, b, 1).unwrap();
        graph.insert_edge(b, c, 2).unwrap();
        // Component two: a pair.
        let d = graph.insert_vertex("D");
        let e = graph.insert_vertex("E");
        graph.insert_edge(d, e, 5).unwrap();
        // Component three: an isolated vertex.
        graph.insert_vertex("F");

        let forest = minimum_spanning_forest(&graph).unwrap();
        // n - k = 6 - 3.
        assert_eq!(forest.len(), 3);
        assert_eq!(total_weight(&graph, &forest), 8);
    }

    #[test]
    fn cheaper_late_edge_wins_via_decrease_key() {
        // Star-ish graph where the initially recorded attachment for D is
        // later undercut by a cheaper edge, exercising replace_key.
        let mut graph = MatrixGraph::<&str, i32>::undirected();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        let d = graph.insert_vertex("D");
        graph.insert_edge(a, b, 1).unwrap();
        graph.insert_edge(a, d, 10).unwrap();
        graph.insert_edge(b, c, 1).unwrap();
        let cd = graph.insert_edge(c, d, 2).unwrap();

        let forest = minimum_spanning_forest(&graph).unwrap();
        assert_eq!(forest.len(), 3);
        assert!(forest.contains(&cd));
        assert_eq!(total_weight(&graph, &forest), 4);
    }

    #[test]
    fn observer_sees_settles_and_selections_without_affecting_result() {
        struct Counter {
            settled: usize,
            selected: usize,
        }
        impl MsfObserver<&'static str, i32> for Counter {
            fn vertex_settled(&mut self, _: &MatrixGraph<&'static str, i32>, _: VertexId) {
                self.settled += 1;
            }
            fn edge_selected(&mut self, _: &MatrixGraph<&'static str, i32>, _: EdgeId) {
                self.selected += 1;
            }
        }

        let mut graph = MatrixGraph::<&str, i32>::undirected();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        graph.insert_edge(a, b, 1).unwrap();
        graph.insert_edge(b, c, 1).unwrap();

        let mut counter = Counter {
            settled: 0,
            selected: 0,
        };
        let observed = minimum_spanning_forest_with_observer(&graph, &mut counter).unwrap();
        let plain = minimum_spanning_forest(&graph).unwrap();

        assert_eq!(counter.settled, 3);
        assert_eq!(counter.selected, 2);
        assert_eq!(observed.len(), plain.len());
    }
}
