//! Vertex representation in a transit graph

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Edge weight between two adjacent vertices.
///
/// Non-negative by construction; zero-cost edges are legal.
pub type Weight = u32;

/// A named vertex holding weighted edges to its neighbors
///
/// The name is fixed at creation; adjacency maps each neighbor name to a
/// single weight, so re-linking a neighbor overwrites rather than duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    name: String,
    neighbors: HashMap<String, Weight>,
}

impl Vertex {
    /// Create a vertex with no edges
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            neighbors: HashMap::new(),
        }
    }

    /// The vertex name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add or overwrite the edge from this vertex to `neighbor`
    pub(crate) fn link(&mut self, neighbor: impl Into<String>, weight: Weight) {
        self.neighbors.insert(neighbor.into(), weight);
    }

    /// Names of all direct neighbors
    pub fn neighbors(&self) -> impl Iterator<Item = &str> {
        self.neighbors.keys().map(String::as_str)
    }

    /// Neighbor names paired with their edge weights
    pub fn links(&self) -> impl Iterator<Item = (&str, Weight)> {
        self.neighbors.iter().map(|(name, weight)| (name.as_str(), *weight))
    }

    /// Whether `name` is a direct neighbor
    pub fn is_neighbor(&self, name: &str) -> bool {
        self.neighbors.contains_key(name)
    }

    /// Weight of the edge to `name`, if adjacent
    pub fn weight_to(&self, name: &str) -> Option<Weight> {
        self.neighbors.get(name).copied()
    }

    /// Number of outgoing edges
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
