//! Property-based tests for the spanning-forest builder and the component
//! analyzer.
//!
//! Random simple graphs are generated from a seed so each case is
//! reproducible from its proptest failure persistence. Verified properties:
//!
//! - **Acyclicity**: accepted edges never close a cycle.
//! - **Edge count**: `V - C` accepted edges for `C` components.
//! - **Weight bound**: forest weight never exceeds the total edge weight.
//! - **Order invariance**: forest weight and largest-component size are
//!   unchanged by edge insertion order.
//! - **Component bounds**: largest component size lies in `1..=V`.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::components::largest_component_size;
use crate::graph::Graph;

use super::spanning_forest;

const MAX_VERTICES: usize = 48;

/// A reproducible random edge set over a small simple graph.
#[derive(Clone, Debug)]
struct GraphFixture {
    vertex_count: usize,
    edges: Vec<(usize, usize, f64)>,
}

fn fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (2..=MAX_VERTICES, any::<u64>()).prop_map(|(vertex_count, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut edges = Vec::new();
        for source in 0..vertex_count {
            for target in source + 1..vertex_count {
                if rng.gen_bool(0.2) {
                    let weight = f64::from(rng.gen_range(1..=16_u32));
                    edges.push((source, target, weight));
                }
            }
        }
        GraphFixture {
            vertex_count,
            edges,
        }
    })
}

fn build(fixture: &GraphFixture) -> Graph {
    let mut graph = Graph::new(fixture.vertex_count).expect("fixture vertex count is positive");
    for &(source, target, weight) in &fixture.edges {
        graph
            .add_weighted_edge(source, target, weight)
            .expect("fixture edges are distinct and in bounds");
    }
    graph
}

fn component_count_oracle(vertex_count: usize, edges: &[(usize, usize, f64)]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    fn find(parent: &mut [usize], vertex: usize) -> usize {
        let mut current = vertex;
        while parent[current] != current {
            parent[current] = parent[parent[current]];
            current = parent[current];
        }
        current
    }
    for &(source, target, _) in edges {
        let source_root = find(&mut parent, source);
        let target_root = find(&mut parent, target);
        if source_root != target_root {
            parent[target_root] = source_root;
        }
    }
    let mut roots = (0..vertex_count)
        .map(|vertex| find(&mut parent, vertex))
        .collect::<Vec<_>>();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

proptest! {
    #[test]
    fn forest_satisfies_structural_invariants(fixture in fixture_strategy()) {
        let graph = build(&fixture);
        let forest = spanning_forest(&graph);

        // Acyclicity: replaying the accepted edges through a fresh
        // union-find oracle must never find both endpoints pre-joined.
        let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
        fn find(parent: &mut [usize], vertex: usize) -> usize {
            let mut current = vertex;
            while parent[current] != current {
                parent[current] = parent[parent[current]];
                current = parent[current];
            }
            current
        }
        for edge in forest.edges() {
            let source_root = find(&mut parent, edge.source());
            let target_root = find(&mut parent, edge.target());
            prop_assert_ne!(source_root, target_root, "accepted edge closed a cycle");
            parent[target_root] = source_root;
        }

        let expected_components = component_count_oracle(fixture.vertex_count, &fixture.edges);
        prop_assert_eq!(forest.component_count(), expected_components);
        prop_assert_eq!(
            forest.edge_count(),
            fixture.vertex_count - expected_components
        );

        let total: f64 = fixture.edges.iter().map(|&(_, _, weight)| weight).sum();
        prop_assert!(forest.total_weight() <= total);
    }

    #[test]
    fn forest_weight_ignores_insertion_order(fixture in fixture_strategy()) {
        let forward = build(&fixture);
        let mut reversed_fixture = fixture.clone();
        reversed_fixture.edges.reverse();
        let backward = build(&reversed_fixture);

        prop_assert_eq!(
            spanning_forest(&forward).total_weight(),
            spanning_forest(&backward).total_weight()
        );
    }

    #[test]
    fn largest_component_is_bounded_and_order_independent(fixture in fixture_strategy()) {
        let forward = build(&fixture);
        let largest = largest_component_size(&forward);
        prop_assert!(largest >= 1);
        prop_assert!(largest <= fixture.vertex_count);

        let mut reversed_fixture = fixture.clone();
        reversed_fixture.edges.reverse();
        let backward = build(&reversed_fixture);
        prop_assert_eq!(largest, largest_component_size(&backward));
    }

    #[test]
    fn component_and_forest_views_agree(fixture in fixture_strategy()) {
        // The largest component can never be smaller than the largest tree
        // in the forest (tree vertices = edges + 1), and a spanning tree
        // means one component covering every vertex.
        let graph = build(&fixture);
        let forest = spanning_forest(&graph);
        let largest = largest_component_size(&graph);

        if forest.is_tree() {
            prop_assert_eq!(largest, fixture.vertex_count);
        } else {
            prop_assert!(largest < fixture.vertex_count);
        }
    }
}
