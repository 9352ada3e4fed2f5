//! Error types for graph construction and edge insertion.

/// Errors returned while constructing a [`crate::Graph`] or inserting edges.
///
/// Every rejection happens before the adjacency index is touched, so a
/// failed insertion leaves the graph exactly as it was.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// The caller requested a graph with no vertices.
    #[error("a graph must have at least one vertex")]
    NoVertices,
    /// An edge endpoint referenced a vertex outside the graph.
    #[error("vertex {vertex} is out of bounds for a {vertex_count}-vertex graph")]
    VertexOutOfBounds {
        /// The offending vertex index.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// Both endpoints of the edge were the same vertex.
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop {
        /// The vertex named by both endpoints.
        vertex: usize,
    },
    /// An edge between the unordered pair already exists.
    #[error("edge between {source} and {target} already exists")]
    DuplicateEdge {
        /// The source endpoint as supplied.
        r#source: usize,
        /// The target endpoint as supplied.
        target: usize,
    },
    /// The edge weight was NaN or infinite.
    #[error("edge ({source}, {target}) has non-finite weight")]
    NonFiniteWeight {
        /// The source endpoint as supplied.
        r#source: usize,
        /// The target endpoint as supplied.
        target: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::NoVertices => GraphErrorCode::NoVertices,
            Self::VertexOutOfBounds { .. } => GraphErrorCode::VertexOutOfBounds,
            Self::SelfLoop { .. } => GraphErrorCode::SelfLoop,
            Self::DuplicateEdge { .. } => GraphErrorCode::DuplicateEdge,
            Self::NonFiniteWeight { .. } => GraphErrorCode::NonFiniteWeight,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// The caller requested a graph with no vertices.
    NoVertices,
    /// An edge endpoint referenced a vertex outside the graph.
    VertexOutOfBounds,
    /// Both endpoints of the edge were the same vertex.
    SelfLoop,
    /// An edge between the unordered pair already exists.
    DuplicateEdge,
    /// The edge weight was NaN or infinite.
    NonFiniteWeight,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoVertices => "GRAPH_NO_VERTICES",
            Self::VertexOutOfBounds => "GRAPH_VERTEX_OUT_OF_BOUNDS",
            Self::SelfLoop => "GRAPH_SELF_LOOP",
            Self::DuplicateEdge => "GRAPH_DUPLICATE_EDGE",
            Self::NonFiniteWeight => "GRAPH_NON_FINITE_WEIGHT",
        }
    }
}
