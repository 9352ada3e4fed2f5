//! Edge-list document parsing.
//!
//! The format is a header line `"<vertex_count> <edge_count>"` followed by
//! one `"<source> <target> <weight>"` line per edge, terminated by a blank
//! line or end of input. The declared edge count is authoritative: a blank
//! line or EOF before every declared edge has been read is truncation, and
//! any malformed field fails the whole parse, so no partial graph escapes.

use std::io::BufRead;

use tracing::instrument;

use crate::error::GraphError;
use crate::graph::Graph;

/// Errors returned while parsing an edge-list document.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Reading from the underlying source failed.
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),
    /// The document was empty.
    #[error("edge list is empty; expected `<vertex_count> <edge_count>` header")]
    MissingHeader,
    /// The header line did not hold two integer fields.
    #[error("malformed header `{line}`; expected `<vertex_count> <edge_count>`")]
    MalformedHeader {
        /// The raw header line.
        line: String,
    },
    /// An edge line did not hold two integers and a float.
    #[error("malformed edge on line {line_number}: `{line}`; expected `<source> <target> <weight>`")]
    MalformedEdge {
        /// One-based line number within the document.
        line_number: usize,
        /// The raw edge line.
        line: String,
    },
    /// The document ended before every declared edge was read.
    #[error("edge list declared {expected} edges but ended after {found}")]
    TruncatedEdgeList {
        /// The edge count declared by the header.
        expected: usize,
        /// The number of edge lines actually present.
        found: usize,
    },
    /// The graph store rejected an edge (duplicate pair, self-loop, bad
    /// endpoint, or non-finite weight).
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl ParseError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> ParseErrorCode {
        match self {
            Self::Io(_) => ParseErrorCode::Io,
            Self::MissingHeader => ParseErrorCode::MissingHeader,
            Self::MalformedHeader { .. } => ParseErrorCode::MalformedHeader,
            Self::MalformedEdge { .. } => ParseErrorCode::MalformedEdge,
            Self::TruncatedEdgeList { .. } => ParseErrorCode::TruncatedEdgeList,
            Self::Graph(_) => ParseErrorCode::Graph,
        }
    }
}

/// Machine-readable error codes for [`ParseError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ParseErrorCode {
    /// Reading from the underlying source failed.
    Io,
    /// The document was empty.
    MissingHeader,
    /// The header line did not hold two integer fields.
    MalformedHeader,
    /// An edge line did not hold two integers and a float.
    MalformedEdge,
    /// The document ended before every declared edge was read.
    TruncatedEdgeList,
    /// The graph store rejected an edge.
    Graph,
}

impl ParseErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "PARSE_IO",
            Self::MissingHeader => "PARSE_MISSING_HEADER",
            Self::MalformedHeader => "PARSE_MALFORMED_HEADER",
            Self::MalformedEdge => "PARSE_MALFORMED_EDGE",
            Self::TruncatedEdgeList => "PARSE_TRUNCATED_EDGE_LIST",
            Self::Graph => "PARSE_GRAPH_REJECTED",
        }
    }
}

/// Parses an edge-list document into a [`Graph`].
///
/// # Errors
/// Returns a [`ParseError`] describing the first failure encountered; the
/// variants carry line context so callers can report exactly what was
/// wrong. Rejections from the graph store (duplicate pairs, self-loops,
/// out-of-range endpoints, non-finite weights) surface as
/// [`ParseError::Graph`].
///
/// # Examples
/// ```
/// use percolate_core::parse_edge_list;
///
/// let document = "3 2\n0 1 1.5\n1 2 2.5\n";
/// let graph = parse_edge_list(document.as_bytes())?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), percolate_core::ParseError>(())
/// ```
#[instrument(name = "parse.edge_list", skip(reader), err)]
pub fn parse_edge_list(reader: impl BufRead) -> Result<Graph, ParseError> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(ParseError::MissingHeader)??;
    let (vertex_count, edge_count) = parse_header(&header)?;

    let mut graph = Graph::new(vertex_count)?;
    let mut found = 0_usize;
    while found < edge_count {
        let line_number = found + 2;
        let Some(line) = lines.next().transpose()? else {
            return Err(ParseError::TruncatedEdgeList {
                expected: edge_count,
                found,
            });
        };
        if line.trim().is_empty() {
            return Err(ParseError::TruncatedEdgeList {
                expected: edge_count,
                found,
            });
        }
        let (source, target, weight) = parse_edge_line(&line, line_number)?;
        graph.add_weighted_edge(source, target, weight)?;
        found += 1;
    }

    Ok(graph)
}

fn parse_header(line: &str) -> Result<(usize, usize), ParseError> {
    let mut fields = line.split_whitespace();
    let malformed = || ParseError::MalformedHeader {
        line: line.to_owned(),
    };
    let vertex_count = fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or_else(malformed)?;
    let edge_count = fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }
    Ok((vertex_count, edge_count))
}

fn parse_edge_line(line: &str, line_number: usize) -> Result<(usize, usize, f64), ParseError> {
    let mut fields = line.split_whitespace();
    let malformed = || ParseError::MalformedEdge {
        line_number,
        line: line.to_owned(),
    };
    let source = fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or_else(malformed)?;
    let target = fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or_else(malformed)?;
    let weight = fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }
    Ok((source, target, weight))
}
