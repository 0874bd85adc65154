use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet};

use crate::bail_invalid;
use crate::error::{AlgoError, Result};
use crate::graph::edge::Edge;
use crate::graph::types::NodeId;

/// A directed weighted graph built from an ordered edge list.
///
/// The node set is exactly the union of edge endpoints; there is no way to
/// name an isolated node. Parallel edges and self-loops are kept as given.
#[derive(Debug, Clone)]
pub struct Graph<N: NodeId = i64> {
    edges: Vec<Edge<N>>,
    nodes: BTreeSet<N>,
    outbound: BTreeMap<N, Vec<usize>>,
    inbound: BTreeMap<N, Vec<usize>>,
}

impl<N: NodeId> Graph<N> {
    /// Build a graph from validated edges.
    ///
    /// An empty edge list is rejected, as is one whose total weight overflows
    /// `f64`: every simple path costs at most the total, so distances stay finite.
    pub fn new(edges: Vec<Edge<N>>) -> Result<Self> {
        if edges.is_empty() {
            bail_invalid!("graph", "edge list is empty");
        }

        let total: f64 = edges.iter().map(|edge| edge.weight.value()).sum();
        if !total.is_finite() {
            tracing::debug!(edges = edges.len(), "total edge weight overflows");
            bail_invalid!("graph", "total edge weight is not finite");
        }

        let mut nodes = BTreeSet::new();
        let mut outbound: BTreeMap<N, Vec<usize>> = BTreeMap::new();
        let mut inbound: BTreeMap<N, Vec<usize>> = BTreeMap::new();

        for (idx, edge) in edges.iter().enumerate() {
            nodes.insert(edge.from);
            nodes.insert(edge.to);
            outbound.entry(edge.from).or_default().push(idx);
            inbound.entry(edge.to).or_default().push(idx);
        }

        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "graph constructed"
        );

        Ok(Graph {
            edges,
            nodes,
            outbound,
            inbound,
        })
    }

    /// Build a graph from `(from, to, weight)` triples
    pub fn from_triples<I>(triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let edges = triples
            .into_iter()
            .map(|(from, to, weight)| Edge::new(from, to, weight))
            .collect::<Result<Vec<_>>>()?;
        Self::new(edges)
    }

    /// Parse a JSON array of edges.
    ///
    /// Each element is either a `[from, to, weight]` triple or an object with
    /// `from`, `to` and `weight` fields.
    pub fn from_json(raw: &str) -> Result<Self>
    where
        N: DeserializeOwned,
    {
        let edges: Vec<Edge<N>> =
            serde_json::from_str(raw).map_err(|e| AlgoError::invalid_argument("graph", e))?;
        Self::new(edges)
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    /// Nodes in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes.iter().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, node: N) -> bool {
        self.nodes.contains(&node)
    }

    /// Edges leaving `node`, in insertion order
    pub fn outbound(&self, node: N) -> impl Iterator<Item = &Edge<N>> + '_ {
        self.outbound
            .get(&node)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.edges[idx])
    }

    /// Edges arriving at `node`, in insertion order
    pub fn inbound(&self, node: N) -> impl Iterator<Item = &Edge<N>> + '_ {
        self.inbound
            .get(&node)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.edges[idx])
    }
}
