//! Percolate core library.
//!
//! Structural connectivity analysis for undirected graphs: a breadth-first
//! largest-component finder and a Kruskal minimum-spanning-forest builder
//! over a shared array-backed [`Graph`] store. Graphs are built once with a
//! fixed vertex count, populated by edge insertion, and then handed by
//! shared reference to any number of sequential analysis passes; each pass
//! owns its own transient state and never mutates the edge set.

mod components;
mod error;
mod generate;
mod graph;
mod mst;
mod parse;

pub use crate::{
    components::largest_component_size,
    error::{GraphError, GraphErrorCode},
    generate::{GenerateError, random_graph, random_weighted_graph},
    graph::{Edge, Graph},
    mst::{DisjointSet, SpanningForest, spanning_forest, spanning_forest_weight},
    parse::{ParseError, ParseErrorCode, parse_edge_list},
};
