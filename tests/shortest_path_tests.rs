//! Integration tests for Dijkstra shortest paths

use algokit::graph::{
    dijkstra, dijkstra_with_options, Cost, Direction, Edge, Graph, GraphProvider,
    TraversalOptions,
};
use std::collections::BTreeMap;

const REFERENCE_GRAPH: &str = r#"[
    [1, 2, 7], [1, 3, 9], [1, 6, 14],
    [2, 1, 7], [2, 3, 10], [2, 4, 15],
    [3, 1, 9], [3, 2, 10], [3, 4, 11], [3, 6, 2],
    [4, 2, 15], [4, 3, 11], [4, 5, 6],
    [5, 4, 6], [5, 6, 9],
    [6, 1, 14], [6, 3, 2], [6, 5, 9]
]"#;

fn values(costs: &[Cost]) -> Vec<f64> {
    costs.iter().map(|c| c.value()).collect()
}

#[test]
fn test_reference_graph_from_json() {
    let graph = Graph::<i64>::from_json(REFERENCE_GRAPH).unwrap();
    let paths = dijkstra(&graph, 1).unwrap();

    assert_eq!(paths.nodes(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(
        values(&paths.to_vec()),
        vec![0.0, 7.0, 9.0, 20.0, 20.0, 11.0]
    );
}

#[test]
fn test_reference_graph_is_symmetric() {
    // Every edge has a mirror with the same weight, so In and Out agree
    let graph = Graph::<i64>::from_json(REFERENCE_GRAPH).unwrap();
    let out = dijkstra(&graph, 4).unwrap();
    let inbound = dijkstra_with_options(
        &graph,
        4,
        &TraversalOptions {
            direction: Direction::In,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(out.into_map(), inbound.into_map());
}

#[test]
fn test_unreachable_nodes_are_infinite() {
    let graph = Graph::from_triples([(1, 2, 1.0), (3, 4, 1.0)]).unwrap();
    let paths = dijkstra(&graph, 1).unwrap();

    assert_eq!(paths.len(), 4);
    assert_eq!(paths.distance(3), Some(Cost::INFINITY));
    assert!(paths.distance(4).is_some_and(|c| !c.is_finite()));
}

#[test]
fn test_absent_source_is_invalid_argument() {
    let graph = Graph::<i64>::from_json(REFERENCE_GRAPH).unwrap();
    let err = dijkstra(&graph, 42).unwrap_err();
    assert_eq!(err.error_type(), "invalid_argument");
    assert_eq!(err.context(), "source node");
}

#[test]
fn test_malformed_graph_is_invalid_argument() {
    let err = Graph::<i64>::from_json("[[1, 2]]").unwrap_err();
    assert_eq!(err.error_type(), "invalid_argument");
    assert_eq!(err.context(), "graph");
}

#[test]
fn test_negative_weight_rejected_at_construction() {
    let err = Edge::new(1, 2, -1.0).unwrap_err();
    assert_eq!(err.context(), "edge weight");
}

/// Adjacency served from a plain map instead of [`Graph`]
struct MapProvider {
    edges: BTreeMap<u32, Vec<Edge<u32>>>,
}

impl GraphProvider<u32> for MapProvider {
    fn node_ids(&self) -> Vec<u32> {
        let mut nodes: Vec<u32> = self
            .edges
            .values()
            .flatten()
            .flat_map(|e| [e.from, e.to])
            .collect();
        nodes.sort_unstable();
        nodes.dedup();
        nodes
    }

    fn contains_node(&self, node: u32) -> bool {
        self.node_ids().contains(&node)
    }

    fn outbound_edges(&self, node: u32) -> Vec<Edge<u32>> {
        self.edges.get(&node).cloned().unwrap_or_default()
    }

    fn inbound_edges(&self, node: u32) -> Vec<Edge<u32>> {
        self.edges
            .values()
            .flatten()
            .filter(|e| e.to == node)
            .copied()
            .collect()
    }
}

#[test]
fn test_custom_provider() {
    let provider = MapProvider {
        edges: BTreeMap::from([
            (
                10,
                vec![Edge::new(10, 20, 2.0).unwrap(), Edge::new(10, 30, 8.0).unwrap()],
            ),
            (20, vec![Edge::new(20, 30, 3.0).unwrap()]),
        ]),
    };

    let paths = dijkstra(&provider, 10).unwrap();
    assert_eq!(values(&paths.to_vec()), vec![0.0, 2.0, 5.0]);
    assert_eq!(paths.path_to(30), Some(vec![10, 20, 30]));
}

#[test]
fn test_results_serialize_to_json() {
    let graph = Graph::from_triples([(1, 2, 1.5)]).unwrap();
    let json = serde_json::to_value(dijkstra(&graph, 1).unwrap()).unwrap();
    assert_eq!(json["distances"]["2"], 1.5);
}

#[test]
fn test_overflowing_path_cost_rejected() {
    // a provider that skips Graph's total-weight check
    let provider = MapProvider {
        edges: BTreeMap::from([
            (1, vec![Edge::new(1, 2, 1e308).unwrap()]),
            (2, vec![Edge::new(2, 3, 1e308).unwrap()]),
        ]),
    };

    let err = dijkstra(&provider, 1).unwrap_err();
    assert_eq!(err.context(), "graph");
    assert_eq!(
        err.to_string(),
        "invalid graph: path cost to 3 via 2 is not finite"
    );
}
