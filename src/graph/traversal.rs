use crate::graph::edge::Edge;
use crate::graph::edge_list::Graph;
use crate::graph::types::{Cost, Direction, NodeId};

/// Trait for providing graph adjacency to the path algorithms
pub trait GraphProvider<N: NodeId> {
    /// All nodes, ascending
    fn node_ids(&self) -> Vec<N>;
    fn contains_node(&self, node: N) -> bool;
    fn outbound_edges(&self, node: N) -> Vec<Edge<N>>;
    fn inbound_edges(&self, node: N) -> Vec<Edge<N>>;

    /// Reachable neighbors of `node` and the cost of the connecting edge
    fn neighbors(&self, node: N, direction: Direction) -> Vec<(N, Cost)> {
        let mut neighbors = Vec::new();

        if direction == Direction::Out || direction == Direction::Both {
            neighbors.extend(
                self.outbound_edges(node)
                    .into_iter()
                    .filter_map(|edge| Some((edge.other(node)?, edge.weight))),
            );
        }

        if direction == Direction::In || direction == Direction::Both {
            neighbors.extend(
                self.inbound_edges(node)
                    .into_iter()
                    .filter_map(|edge| Some((edge.other(node)?, edge.weight))),
            );
        }

        neighbors
    }
}

impl<N: NodeId> GraphProvider<N> for Graph<N> {
    fn node_ids(&self) -> Vec<N> {
        self.nodes().collect()
    }

    fn contains_node(&self, node: N) -> bool {
        Graph::contains_node(self, node)
    }

    fn outbound_edges(&self, node: N) -> Vec<Edge<N>> {
        self.outbound(node).copied().collect()
    }

    fn inbound_edges(&self, node: N) -> Vec<Edge<N>> {
        self.inbound(node).copied().collect()
    }
}
