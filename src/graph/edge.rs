use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{AlgoError, Result};
use crate::graph::types::{Cost, NodeId};

/// A directed, non-negatively weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "EdgeRecord<N>",
    bound(deserialize = "N: NodeId + Deserialize<'de>")
)]
pub struct Edge<N: NodeId> {
    pub from: N,
    pub to: N,
    pub weight: Cost,
}

impl<N: NodeId> Edge<N> {
    /// Create an edge, rejecting negative and non-finite weights
    pub fn new(from: N, to: N, weight: f64) -> Result<Self> {
        if !weight.is_finite() || weight < 0.0 {
            tracing::debug!(%from, %to, weight, "rejecting edge weight");
            bail_invalid!("edge weight", format!("{} on {} -> {}", weight, from, to));
        }
        Ok(Edge {
            from,
            to,
            weight: Cost::new(weight),
        })
    }

    /// The endpoint opposite `node`, if `node` is one of the endpoints
    pub fn other(&self, node: N) -> Option<N> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }
}

/// Raw edge shape accepted from serialized graphs
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EdgeRecord<N> {
    Triple(N, N, f64),
    Named { from: N, to: N, weight: f64 },
}

impl<N: NodeId> TryFrom<EdgeRecord<N>> for Edge<N> {
    type Error = AlgoError;

    fn try_from(record: EdgeRecord<N>) -> Result<Self> {
        match record {
            EdgeRecord::Triple(from, to, weight) | EdgeRecord::Named { from, to, weight } => {
                Edge::new(from, to, weight)
            }
        }
    }
}
