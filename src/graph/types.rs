use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use crate::bail_invalid;
use crate::error::Result;

/// Scalar node identifier.
///
/// Any small copyable, totally ordered value works; the ordering defines the
/// canonical enumeration of a graph's nodes and breaks frontier ties.
pub trait NodeId: Copy + Ord + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Copy + Ord + Hash + fmt::Debug + fmt::Display {}

/// Accumulated path cost (or a single edge weight).
///
/// Totally ordered via [`f64::total_cmp`]; unreachable nodes carry
/// [`Cost::INFINITY`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    /// Wrap a raw cost; `-0.0` is stored as `0.0`
    pub fn new(cost: f64) -> Self {
        Cost(if cost == 0.0 { 0.0 } else { cost })
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<u32> for Cost {
    fn from(value: u32) -> Self {
        Cost(value as f64)
    }
}

impl PartialEq<f64> for Cost {
    fn eq(&self, other: &f64) -> bool {
        *self == Cost::new(*other)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            write!(f, "inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Which way edges are followed during traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Follow edges from source to destination
    #[default]
    Out,
    /// Follow edges backwards (distances *to* the init node)
    In,
    /// Treat every edge as undirected
    Both,
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "out" => Ok(Direction::Out),
            "in" => Ok(Direction::In),
            "both" => Ok(Direction::Both),
            other => Err(format!(
                "unknown direction '{}' (expected: out, in, both)",
                other
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Out => "out",
            Direction::In => "in",
            Direction::Both => "both",
        };
        f.write_str(name)
    }
}

/// Options for shortest-path traversal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalOptions {
    /// Direction for traversal
    #[serde(default)]
    pub direction: Direction,
    /// Distances above this bound are never recorded (nodes stay unreachable)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cost: Option<f64>,
}

impl TraversalOptions {
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_cost {
            if max.is_nan() || max < 0.0 {
                bail_invalid!("max_cost", max);
            }
        }
        Ok(())
    }

    pub(crate) fn within_budget(&self, cost: Cost) -> bool {
        self.max_cost.is_none_or(|max| cost.value() <= max)
    }
}
