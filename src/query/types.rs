//! Solver result types

use crate::route::Route;
use serde::{Deserialize, Serialize};

/// Total cost of a path (summed edge weights)
///
/// Wider than [`crate::Weight`] so that summing edges cannot overflow.
pub type Distance = u64;

/// Outcome of a shortest-path solve
///
/// `Unreachable` is a normal result, not an error: the graph simply has no
/// path between the two vertices. Missing vertices are reported as
/// [`crate::GraphError::VertexNotFound`] before solving starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PathResult {
    /// The target is reachable: the minimal total cost and one path
    /// realizing it, inclusive of source and target
    Reached {
        distance: Distance,
        path: Vec<String>,
    },
    /// No path exists from source to target
    Unreachable,
}

impl PathResult {
    /// Whether the target could be reached at all
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reached { .. })
    }

    /// The minimal total cost, if the target is reachable
    pub fn distance(&self) -> Option<Distance> {
        match self {
            Self::Reached { distance, .. } => Some(*distance),
            Self::Unreachable => None,
        }
    }

    /// The vertices of the path, source first; empty when unreachable
    pub fn path(&self) -> &[String] {
        match self {
            Self::Reached { path, .. } => path,
            Self::Unreachable => &[],
        }
    }

    /// Materialize the path into a FIFO route for step-by-step consumption
    pub fn into_route(self) -> Option<Route> {
        match self {
            Self::Reached { path, .. } => Some(path.into_iter().collect()),
            Self::Unreachable => None,
        }
    }
}
