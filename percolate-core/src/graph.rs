//! Array-backed adjacency storage for undirected graphs.
//!
//! Each undirected edge is stored as two directed adjacency entries so both
//! endpoints see it during traversal, plus one canonical entry in the
//! insertion-ordered edge list consumed by the spanning-forest builder.
//! Every insertion precondition (bounds, self-loops, duplicates, weight
//! finiteness) is enforced here, which lets the analyzers take an
//! already-validated `&Graph` and run infallibly.

use crate::error::GraphError;

/// A single undirected edge as seen from one endpoint.
///
/// The `sequence` number is the insertion serial shared by both directed
/// entries of an edge; weight ties are broken by it so analysis results are
/// reproducible for a fixed insertion order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
    sequence: u64,
}

impl Edge {
    /// Returns the endpoint this entry departs from.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the endpoint this entry arrives at.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    /// Returns the insertion serial shared by both directions of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> u64 { self.sequence }

    fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            ..self
        }
    }
}

/// An undirected graph with a fixed vertex count and a growable edge set.
///
/// # Examples
/// ```
/// use percolate_core::Graph;
///
/// let mut graph = Graph::new(3)?;
/// graph.add_edge(0, 1)?;
/// graph.add_weighted_edge(1, 2, 2.5)?;
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.edge_exists(1, 0));
/// assert!(!graph.edge_exists(0, 2));
/// # Ok::<(), percolate_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<Vec<Edge>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    /// Returns [`GraphError::NoVertices`] when `vertex_count == 0`; a graph
    /// without vertices has no meaningful analysis result, so the
    /// precondition is discharged here once rather than in every analyzer.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::NoVertices);
        }
        Ok(Self {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
        })
    }

    /// Returns the number of vertices fixed at construction.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of undirected edges inserted so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Inserts an unweighted edge (weight 1.0) between `source` and `target`.
    ///
    /// # Errors
    /// Same contract as [`Self::add_weighted_edge`].
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<(), GraphError> {
        self.add_weighted_edge(source, target, 1.0)
    }

    /// Inserts a weighted undirected edge between `source` and `target`.
    ///
    /// Both directed adjacency entries are appended, sharing one insertion
    /// sequence number.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] when either endpoint is not
    /// a vertex of this graph, [`GraphError::SelfLoop`] when the endpoints
    /// coincide, [`GraphError::DuplicateEdge`] when the unordered pair is
    /// already connected, and [`GraphError::NonFiniteWeight`] when `weight`
    /// is NaN or infinite. A rejected insertion leaves the graph unchanged.
    pub fn add_weighted_edge(
        &mut self,
        source: usize,
        target: usize,
        weight: f64,
    ) -> Result<(), GraphError> {
        for vertex in [source, target] {
            if vertex >= self.vertex_count {
                return Err(GraphError::VertexOutOfBounds {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        if source == target {
            return Err(GraphError::SelfLoop { vertex: source });
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight { source, target });
        }
        if self.edge_exists(source, target) {
            return Err(GraphError::DuplicateEdge { source, target });
        }

        let edge = Edge {
            source,
            target,
            weight,
            sequence: self.edges.len() as u64,
        };
        self.edges.push(edge);
        self.adjacency[source].push(edge);
        self.adjacency[target].push(edge.reversed());
        Ok(())
    }

    /// Reports whether an edge connects the unordered pair `{a, b}`.
    ///
    /// Scans the shorter of the two adjacency lists; out-of-bounds vertices
    /// have no edges and yield `false`.
    #[must_use]
    pub fn edge_exists(&self, a: usize, b: usize) -> bool {
        let (Some(list_a), Some(list_b)) = (self.adjacency.get(a), self.adjacency.get(b)) else {
            return false;
        };
        let probe = if list_a.len() <= list_b.len() {
            list_a
        } else {
            list_b
        };
        let other = if probe.len() == list_a.len() { b } else { a };
        probe.iter().any(|edge| edge.target() == other)
    }

    /// Returns the outgoing edges of `vertex`.
    ///
    /// Both directions of every incident edge are visible through symmetric
    /// insertion, so this is the full neighborhood of `vertex`.
    ///
    /// # Panics
    /// Panics when `vertex >= vertex_count()`; vertex indices come from the
    /// graph itself during traversal, so an out-of-range argument is a
    /// caller logic error.
    #[must_use]
    pub fn edges_from(&self, vertex: usize) -> &[Edge] {
        &self.adjacency[vertex]
    }

    /// Returns every undirected edge once, in insertion order.
    #[must_use]
    pub fn all_edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_vertices() {
        let err = Graph::new(0).expect_err("zero vertices must be rejected");
        assert_eq!(err, GraphError::NoVertices);
    }

    #[test]
    fn rejects_self_loop() {
        let mut graph = Graph::new(2).expect("two vertices must be accepted");
        let err = graph.add_edge(1, 1).expect_err("self-loop must be rejected");
        assert_eq!(err, GraphError::SelfLoop { vertex: 1 });
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let mut graph = Graph::new(3).expect("three vertices must be accepted");
        let err = graph.add_edge(0, 3).expect_err("endpoint 3 is out of bounds");
        assert_eq!(
            err,
            GraphError::VertexOutOfBounds {
                vertex: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn rejects_duplicate_in_either_orientation() {
        let mut graph = Graph::new(3).expect("three vertices must be accepted");
        graph.add_edge(0, 1).expect("first insertion must succeed");
        let err = graph
            .add_edge(1, 0)
            .expect_err("reversed duplicate must be rejected");
        assert_eq!(err, GraphError::DuplicateEdge { source: 1, target: 0 });
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn rejects_non_finite_weight() {
        let mut graph = Graph::new(2).expect("two vertices must be accepted");
        let err = graph
            .add_weighted_edge(0, 1, f64::NAN)
            .expect_err("NaN weight must be rejected");
        assert_eq!(err.code().as_str(), "GRAPH_NON_FINITE_WEIGHT");
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn symmetric_insertion_makes_both_directions_visible() {
        let mut graph = Graph::new(2).expect("two vertices must be accepted");
        graph
            .add_weighted_edge(0, 1, 4.0)
            .expect("insertion must succeed");

        let forward = graph.edges_from(0);
        let backward = graph.edges_from(1);
        assert_eq!(forward.len(), 1);
        assert_eq!(backward.len(), 1);
        assert_eq!(forward[0].target(), 1);
        assert_eq!(backward[0].target(), 0);
        assert_eq!(forward[0].sequence(), backward[0].sequence());
        assert_eq!(forward[0].weight(), 4.0);
    }

    #[test]
    fn all_edges_snapshots_in_insertion_order() {
        let mut graph = Graph::new(4).expect("four vertices must be accepted");
        graph.add_weighted_edge(2, 3, 3.0).expect("insert 2-3");
        graph.add_weighted_edge(0, 1, 1.0).expect("insert 0-1");

        let edges = graph.all_edges();
        assert_eq!(edges.len(), 2);
        assert_eq!((edges[0].source(), edges[0].target()), (2, 3));
        assert_eq!((edges[1].source(), edges[1].target()), (0, 1));
        assert_eq!(edges[0].sequence(), 0);
        assert_eq!(edges[1].sequence(), 1);
    }
}
