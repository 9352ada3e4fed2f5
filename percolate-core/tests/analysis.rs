//! End-to-end tests driving the public analysis API: generated and parsed
//! graphs flowing through the component analyzer and the forest builder.

use percolate_core::{
    Graph, largest_component_size, parse_edge_list, random_graph, random_weighted_graph,
    spanning_forest, spanning_forest_weight,
};
use rstest::rstest;

#[test]
fn parsed_document_through_both_analyzers() {
    let document = "4 4\n0 1 1.0\n1 2 2.0\n2 3 3.0\n0 3 10.0\n";
    let graph = parse_edge_list(document.as_bytes()).expect("document is well formed");

    assert_eq!(largest_component_size(&graph), 4);
    let forest = spanning_forest(&graph);
    assert!(forest.is_tree());
    assert_eq!(forest.total_weight(), 6.0);
}

#[test]
fn generated_graph_is_reproducible_end_to_end() {
    let first = random_weighted_graph(100, 300, 10, 1).expect("generation must succeed");
    let second = random_weighted_graph(100, 300, 10, 1).expect("generation must succeed");

    assert_eq!(
        largest_component_size(&first),
        largest_component_size(&second)
    );
    assert_eq!(
        spanning_forest_weight(&first),
        spanning_forest_weight(&second)
    );
}

#[rstest]
#[case::sparse(200, 50)]
#[case::near_threshold(200, 400)]
#[case::dense(200, 2000)]
fn generated_graphs_satisfy_cross_analyzer_invariants(
    #[case] vertices: usize,
    #[case] edges: usize,
) {
    let graph = random_graph(vertices, edges, 17).expect("generation must succeed");
    let largest = largest_component_size(&graph);
    let forest = spanning_forest(&graph);

    assert!(largest >= 1 && largest <= vertices);
    // A spanning tree exists exactly when one component spans the graph.
    assert_eq!(forest.is_tree(), largest == vertices);
    assert_eq!(forest.edge_count(), vertices - forest.component_count());
}

#[test]
fn dense_random_graph_is_connected() {
    // 60 vertices with every possible edge present is one clique.
    let graph = random_graph(60, 60 * 59 / 2, 3).expect("generation must succeed");
    assert_eq!(largest_component_size(&graph), 60);
    let forest = spanning_forest(&graph);
    assert_eq!(forest.edge_count(), 59);
    // Unit weights: a spanning tree of n-1 unit edges weighs n-1.
    assert_eq!(forest.total_weight(), 59.0);
}

#[test]
fn a_graph_survives_many_alternating_passes() {
    let graph = random_weighted_graph(50, 80, 6, 11).expect("generation must succeed");
    let largest = largest_component_size(&graph);
    let weight = spanning_forest_weight(&graph);

    for _ in 0..5 {
        assert_eq!(largest_component_size(&graph), largest);
        assert_eq!(spanning_forest_weight(&graph), weight);
    }
}

#[test]
fn hand_built_graph_matches_parsed_equivalent() {
    let mut built = Graph::new(3).expect("three vertices must be accepted");
    built.add_weighted_edge(0, 1, 1.5).expect("insert 0-1");
    built.add_weighted_edge(1, 2, 2.5).expect("insert 1-2");

    let parsed = parse_edge_list("3 2\n0 1 1.5\n1 2 2.5\n".as_bytes())
        .expect("document is well formed");

    assert_eq!(built.all_edges(), parsed.all_edges());
    assert_eq!(
        spanning_forest_weight(&built),
        spanning_forest_weight(&parsed)
    );
}
