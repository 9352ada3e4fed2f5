//! Breadth-first connectivity analysis.
//!
//! Partitions a graph's vertices into connected components and reports the
//! size of the largest one. Sparse random graphs are frequently
//! disconnected, so the scan restarts a traversal at every vertex left
//! undiscovered by earlier passes. All working state lives in a per-call
//! [`TraversalContext`]; nothing is retained between invocations, so
//! repeated calls on an unmodified graph are independent and concurrent
//! calls over one shared graph cannot alias each other's state.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::graph::Graph;

/// Transient per-vertex discovery state for one traversal pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mark {
    Undiscovered,
    Discovered,
}

/// Working arrays owned by a single analysis invocation.
///
/// `parents` records the BFS tree parent of each discovered vertex (`None`
/// for roots), and `counts` accumulates component sizes at each tree's root
/// index. Construction is the reset: every field starts undiscovered,
/// parentless, and zeroed.
struct TraversalContext {
    marks: Vec<Mark>,
    parents: Vec<Option<usize>>,
    counts: Vec<usize>,
}

impl TraversalContext {
    fn new(vertex_count: usize) -> Self {
        Self {
            marks: vec![Mark::Undiscovered; vertex_count],
            parents: vec![None; vertex_count],
            counts: vec![0; vertex_count],
        }
    }

    /// Walks parent pointers from `vertex` to its BFS tree root.
    ///
    /// An explicit loop: tree depth is bounded but not small, and the walk
    /// runs once per absorbed vertex.
    fn root_of(&self, vertex: usize) -> usize {
        let mut current = vertex;
        while let Some(parent) = self.parents[current] {
            current = parent;
        }
        current
    }
}

/// Computes the size of the largest connected component of `graph`.
///
/// An isolated vertex forms a singleton component, so the result for an
/// edgeless graph is 1. The result depends only on the edge set, not on
/// insertion or adjacency iteration order.
///
/// # Examples
/// ```
/// use percolate_core::{Graph, largest_component_size};
///
/// // Two components: a triangle {0, 1, 2} and a single edge {3, 4}.
/// let mut graph = Graph::new(5)?;
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 2)?;
/// graph.add_edge(2, 0)?;
/// graph.add_edge(3, 4)?;
/// assert_eq!(largest_component_size(&graph), 3);
/// # Ok::<(), percolate_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "components.largest",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn largest_component_size(graph: &Graph) -> usize {
    let mut context = TraversalContext::new(graph.vertex_count());
    let mut component_count = 0_usize;

    for root in 0..graph.vertex_count() {
        if context.marks[root] == Mark::Undiscovered {
            traverse(graph, root, &mut context);
            component_count += 1;
        }
    }

    let largest = context.counts.iter().copied().max().unwrap_or(0);
    debug!(largest, components = component_count, "component scan completed");
    largest
}

/// Runs one breadth-first traversal rooted at `start`.
///
/// The root's counter takes the first increment; every later absorption
/// walks the parent chain of the discovering vertex and credits the root.
/// Counters at non-root indices stay at zero, so the maximum over `counts`
/// is the largest component size.
fn traverse(graph: &Graph, start: usize, context: &mut TraversalContext) {
    let mut frontier = VecDeque::new();
    frontier.push_back(start);
    context.marks[start] = Mark::Discovered;
    context.counts[start] += 1;

    while let Some(vertex) = frontier.pop_front() {
        for edge in graph.edges_from(vertex) {
            let target = edge.target();
            if context.marks[target] == Mark::Undiscovered {
                context.marks[target] = Mark::Discovered;
                context.parents[target] = Some(vertex);
                frontier.push_back(target);
                let root = context.root_of(vertex);
                context.counts[root] += 1;
            }
        }
    }
}
