//! Weighted directed graphs and shortest-path search
//!
//! - Strongly typed edge records validated at construction
//! - Edge-list graph with outbound/inbound adjacency
//! - Graph provider trait for pluggable adjacency sources
//! - Dijkstra single-source shortest paths

pub mod algos;
pub mod edge;
pub mod edge_list;
pub mod traversal;
pub mod types;

pub use algos::{dijkstra, dijkstra_with_options, ShortestPaths, SpanningTreeEntry};
pub use edge::Edge;
pub use edge_list::Graph;
pub use traversal::GraphProvider;
pub use types::{Cost, Direction, NodeId, TraversalOptions};
