//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths over non-negative weights
//! - `paths`: the finalized distance/predecessor result

pub mod dijkstra;
pub mod paths;

pub use dijkstra::{dijkstra, dijkstra_with_options};
pub use paths::{ShortestPaths, SpanningTreeEntry};
