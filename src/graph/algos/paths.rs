use serde::Serialize;
use std::collections::BTreeMap;

use crate::graph::types::{Cost, NodeId};

/// One edge of the shortest-path tree: `to` is reached via `from`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpanningTreeEntry<N> {
    pub from: N,
    pub to: N,
    /// Total distance of `to` from the source
    pub cost: Cost,
}

/// Finalized single-source distances, with predecessors for path recovery.
///
/// Every node of the graph has an entry; unreachable nodes hold
/// [`Cost::INFINITY`]. Iteration is in ascending node order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths<N: NodeId> {
    source: N,
    distances: BTreeMap<N, Cost>,
    #[serde(skip)]
    predecessors: BTreeMap<N, N>,
}

impl<N: NodeId> ShortestPaths<N> {
    pub(crate) fn new(
        source: N,
        distances: BTreeMap<N, Cost>,
        predecessors: BTreeMap<N, N>,
    ) -> Self {
        Self {
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> N {
        self.source
    }

    /// Distance of `node`; `None` if the node is not part of the graph
    pub fn distance(&self, node: N) -> Option<Cost> {
        self.distances.get(&node).copied()
    }

    pub fn is_reachable(&self, node: N) -> bool {
        self.distance(node).is_some_and(|cost| cost.is_finite())
    }

    /// `(node, distance)` pairs in ascending node order
    pub fn iter(&self) -> impl Iterator<Item = (N, Cost)> + '_ {
        self.distances.iter().map(|(node, cost)| (*node, *cost))
    }

    /// Nodes in ascending order
    pub fn nodes(&self) -> Vec<N> {
        self.distances.keys().copied().collect()
    }

    /// Distances aligned with [`Self::nodes`]
    pub fn to_vec(&self) -> Vec<Cost> {
        self.distances.values().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// The node `node` was last relaxed through
    pub fn predecessor(&self, node: N) -> Option<N> {
        self.predecessors.get(&node).copied()
    }

    /// Nodes along a shortest path from the source to `target`, both included.
    ///
    /// `None` when `target` is unknown or unreachable.
    pub fn path_to(&self, target: N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    /// Shortest-path tree edges, sorted by target node
    pub fn spanning_tree(&self) -> Vec<SpanningTreeEntry<N>> {
        self.predecessors
            .iter()
            .map(|(to, from)| SpanningTreeEntry {
                from: *from,
                to: *to,
                cost: self.distances.get(to).copied().unwrap_or(Cost::INFINITY),
            })
            .collect()
    }

    pub fn into_map(self) -> BTreeMap<N, Cost> {
        self.distances
    }
}
