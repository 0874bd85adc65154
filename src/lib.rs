//! Algokit
//!
//! Two independent textbook algorithms: the Euclidean greatest common divisor
//! and Dijkstra's single-source shortest paths over a non-negatively weighted
//! directed graph. Both are pure, synchronous functions; every call owns its
//! working state.

pub mod config;
pub mod error;
pub mod gcd;
pub mod graph;
pub mod logging;

pub use error::{AlgoError, Result};
pub use gcd::euclidean;
pub use graph::{dijkstra, Graph};
