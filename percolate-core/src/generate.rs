//! Seeded random graph generation.
//!
//! Endpoint pairs are rejection-sampled until the requested number of
//! distinct, non-self-looping edges exists. For a fixed seed the produced
//! graph is identical across runs, which is what makes the statistical
//! sweep experiments repeatable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

use crate::error::GraphError;
use crate::graph::Graph;

/// Errors returned while generating a random graph.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum GenerateError {
    /// More edges were requested than distinct unordered pairs exist.
    #[error(
        "cannot place {requested} edges in a {vertex_count}-vertex simple graph (maximum {maximum})"
    )]
    TooManyEdges {
        /// The requested edge count.
        requested: usize,
        /// The vertex count of the graph under construction.
        vertex_count: usize,
        /// The number of distinct unordered pairs available.
        maximum: usize,
    },
    /// Weighted generation needs a weight range of at least `1..=1`.
    #[error("max_weight must be at least 1")]
    ZeroMaxWeight,
    /// Graph construction rejected the parameters.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl GenerateError {
    /// Retrieve the inner [`crate::GraphErrorCode`] when the failure
    /// originated in the graph store.
    #[must_use]
    pub const fn graph_code(&self) -> Option<crate::GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Generates an unweighted random graph (every edge weight 1.0).
///
/// Deterministic for a fixed `(vertex_count, edge_count, seed)` triple.
///
/// # Errors
/// Returns [`GenerateError::TooManyEdges`] when `edge_count` exceeds the
/// number of distinct unordered pairs, and propagates [`GraphError`] from
/// construction.
///
/// # Examples
/// ```
/// use percolate_core::random_graph;
///
/// let graph = random_graph(10, 12, 1)?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 12);
/// # Ok::<(), percolate_core::GenerateError>(())
/// ```
#[instrument(name = "generate.random", err)]
pub fn random_graph(
    vertex_count: usize,
    edge_count: usize,
    seed: u64,
) -> Result<Graph, GenerateError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    fill_random_edges(vertex_count, edge_count, &mut rng, |_| 1.0)
}

/// Generates a weighted random graph with integer weights in
/// `1..=max_weight`.
///
/// # Errors
/// As [`random_graph`], plus [`GenerateError::ZeroMaxWeight`] when
/// `max_weight == 0`.
///
/// # Examples
/// ```
/// use percolate_core::random_weighted_graph;
///
/// let graph = random_weighted_graph(8, 10, 5, 42)?;
/// assert!(graph.all_edges().iter().all(|edge| {
///     (1.0..=5.0).contains(&edge.weight())
/// }));
/// # Ok::<(), percolate_core::GenerateError>(())
/// ```
#[instrument(name = "generate.random_weighted", err)]
pub fn random_weighted_graph(
    vertex_count: usize,
    edge_count: usize,
    max_weight: u32,
    seed: u64,
) -> Result<Graph, GenerateError> {
    if max_weight == 0 {
        return Err(GenerateError::ZeroMaxWeight);
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    fill_random_edges(vertex_count, edge_count, &mut rng, |rng| {
        f64::from(rng.gen_range(1..=max_weight))
    })
}

fn fill_random_edges(
    vertex_count: usize,
    edge_count: usize,
    rng: &mut SmallRng,
    mut draw_weight: impl FnMut(&mut SmallRng) -> f64,
) -> Result<Graph, GenerateError> {
    let mut graph = Graph::new(vertex_count)?;

    let maximum = vertex_count * (vertex_count - 1) / 2;
    if edge_count > maximum {
        return Err(GenerateError::TooManyEdges {
            requested: edge_count,
            vertex_count,
            maximum,
        });
    }

    while graph.edge_count() < edge_count {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        if source != target && !graph.edge_exists(source, target) {
            let weight = draw_weight(rng);
            graph.add_weighted_edge(source, target, weight)?;
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_exactly_the_requested_edge_count() {
        let graph = random_graph(50, 75, 7).expect("generation must succeed");
        assert_eq!(graph.edge_count(), 75);
        assert_eq!(graph.vertex_count(), 50);
    }

    #[test]
    fn is_deterministic_for_a_fixed_seed() {
        let first = random_weighted_graph(20, 30, 10, 99).expect("generation must succeed");
        let second = random_weighted_graph(20, 30, 10, 99).expect("generation must succeed");
        assert_eq!(first.all_edges(), second.all_edges());
    }

    #[test]
    fn distinct_seeds_diverge() {
        let first = random_graph(20, 30, 1).expect("generation must succeed");
        let second = random_graph(20, 30, 2).expect("generation must succeed");
        assert_ne!(first.all_edges(), second.all_edges());
    }

    #[test]
    fn rejects_impossible_edge_counts() {
        let err = random_graph(3, 4, 1).expect_err("4 edges cannot fit in K3");
        assert_eq!(
            err,
            GenerateError::TooManyEdges {
                requested: 4,
                vertex_count: 3,
                maximum: 3
            }
        );
    }

    #[test]
    fn rejects_zero_max_weight() {
        let err = random_weighted_graph(3, 2, 0, 1).expect_err("zero max weight is invalid");
        assert_eq!(err, GenerateError::ZeroMaxWeight);
        assert_eq!(err.graph_code(), None);
    }

    #[test]
    fn propagates_graph_construction_errors() {
        let err = random_graph(0, 0, 1).expect_err("zero vertices must be rejected");
        assert!(matches!(err, GenerateError::Graph(GraphError::NoVertices)));
        assert_eq!(
            err.graph_code().map(|code| code.as_str()),
            Some("GRAPH_NO_VERTICES")
        );
    }

    #[test]
    fn weighted_generation_stays_within_bounds() {
        let graph = random_weighted_graph(15, 20, 3, 5).expect("generation must succeed");
        for edge in graph.all_edges() {
            assert!(edge.source() != edge.target());
            assert!((1.0..=3.0).contains(&edge.weight()));
        }
    }

    #[test]
    fn can_saturate_a_small_complete_graph() {
        let graph = random_graph(5, 10, 3).expect("K5 has exactly 10 edges");
        assert_eq!(graph.edge_count(), 10);
    }
}
