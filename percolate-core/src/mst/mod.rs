//! Minimum spanning forest construction (Kruskal's algorithm).
//!
//! Sorts the graph's edge snapshot by weight and accepts every edge whose
//! endpoints lie in distinct components of a [`DisjointSet`], accumulating
//! total weight. A connected graph yields a spanning tree with
//! `vertex_count - 1` edges; a disconnected graph exhausts the edge list
//! and yields one tree per component instead; that is a result, not an
//! error.

mod union_find;

use tracing::{debug, instrument};

use crate::graph::{Edge, Graph};

pub use self::union_find::DisjointSet;

/// The output of a spanning-forest computation.
///
/// When the input graph is connected, the forest is a spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    total_weight: f64,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the accepted edges in acceptance (ascending weight) order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the sum of accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of connected components the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest is a single spanning tree.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Computes a minimum spanning forest of `graph`.
///
/// Edges are ordered by ascending weight with ties broken by insertion
/// sequence, so the accepted set and the summation order are deterministic
/// for a fixed edge multiset. The scan exits early once a full spanning
/// tree is complete; remaining edges cannot improve the result.
///
/// # Examples
/// ```
/// use percolate_core::{Graph, spanning_forest};
///
/// let mut graph = Graph::new(4)?;
/// graph.add_weighted_edge(0, 1, 1.0)?;
/// graph.add_weighted_edge(1, 2, 2.0)?;
/// graph.add_weighted_edge(2, 3, 3.0)?;
/// graph.add_weighted_edge(0, 3, 10.0)?;
/// let forest = spanning_forest(&graph);
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 6.0);
/// # Ok::<(), percolate_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.spanning_forest",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn spanning_forest(graph: &Graph) -> SpanningForest {
    let mut candidates: Vec<Edge> = graph.all_edges().to_vec();
    candidates.sort_unstable_by(|a, b| {
        a.weight()
            .total_cmp(&b.weight())
            .then_with(|| a.sequence().cmp(&b.sequence()))
    });

    let spanning_target = graph.vertex_count().saturating_sub(1);
    let mut components = DisjointSet::new(graph.vertex_count());
    let mut accepted = Vec::with_capacity(spanning_target);
    let mut total_weight = 0.0;

    for edge in candidates {
        if components.find(edge.source()) != components.find(edge.target()) {
            components.union(edge.source(), edge.target());
            total_weight += edge.weight();
            accepted.push(edge);
            if accepted.len() == spanning_target {
                break;
            }
        }
    }

    let component_count = graph.vertex_count() - accepted.len();
    debug!(
        accepted = accepted.len(),
        component_count, total_weight, "forest construction completed"
    );
    SpanningForest {
        edges: accepted,
        total_weight,
        component_count,
    }
}

/// Computes only the total weight of the minimum spanning forest.
///
/// # Examples
/// ```
/// use percolate_core::{Graph, spanning_forest_weight};
///
/// let mut graph = Graph::new(2)?;
/// graph.add_weighted_edge(0, 1, 5.0)?;
/// assert_eq!(spanning_forest_weight(&graph), 5.0);
/// # Ok::<(), percolate_core::GraphError>(())
/// ```
#[must_use]
pub fn spanning_forest_weight(graph: &Graph) -> f64 {
    spanning_forest(graph).total_weight()
}

#[cfg(test)]
mod property;
