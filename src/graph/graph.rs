//! Graph: exclusive owner of named vertices and their weighted adjacency

use super::vertex::{Vertex, Weight};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur in graph and solver operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(i64),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Edge direction semantics, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Edges are one-way; adjacency is asymmetric by default
    Directed,
    /// Every edge is mirrored on both endpoints (self-loops excepted)
    Undirected,
}

/// A weighted graph owning its vertices
///
/// Vertices are created on first reference, either directly through
/// [`Graph::add_vertex`] or implicitly through edge insertion, and live as
/// long as the graph. A vertex's adjacency never references a name absent
/// from the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    mode: Mode,
    vertices: HashMap<String, Vertex>,
}

impl Graph {
    /// Create an empty graph with the given edge semantics
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            vertices: HashMap::new(),
        }
    }

    /// Create an empty directed graph
    pub fn directed() -> Self {
        Self::new(Mode::Directed)
    }

    /// Create an empty undirected graph
    pub fn undirected() -> Self {
        Self::new(Mode::Undirected)
    }

    /// The edge semantics this graph was built with
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether edges are one-way
    pub fn is_directed(&self) -> bool {
        self.mode == Mode::Directed
    }

    /// Insert a vertex with empty adjacency
    ///
    /// A no-op if a vertex with this name already exists.
    pub fn add_vertex(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.vertices.contains_key(&name) {
            let vertex = Vertex::new(name.clone());
            self.vertices.insert(name, vertex);
        }
    }

    /// Connect two vertices with a weighted edge
    ///
    /// Missing endpoints are created; this is the primary vertex-creation
    /// path when populating a graph from a segment list. Re-inserting an
    /// existing edge overwrites its weight (last write wins). Under
    /// [`Mode::Undirected`] the mirrored edge is recorded as well, unless
    /// origin and destination coincide.
    pub fn add_edge(
        &mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight: Weight,
    ) {
        let origin = origin.into();
        let destination = destination.into();
        self.add_vertex(origin.clone());
        self.add_vertex(destination.clone());

        if let Some(vertex) = self.vertices.get_mut(&origin) {
            vertex.link(destination.clone(), weight);
        }
        if self.mode == Mode::Undirected && origin != destination {
            if let Some(vertex) = self.vertices.get_mut(&destination) {
                vertex.link(origin, weight);
            }
        }
    }

    /// Connect two vertices, validating a raw signed weight first
    ///
    /// Entry point for loaders ingesting external segment data that has not
    /// been range-checked yet. Negative (or oversized) weights are rejected
    /// before they can corrupt distance computations.
    pub fn add_edge_checked(
        &mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight: i64,
    ) -> GraphResult<()> {
        let checked = Weight::try_from(weight).map_err(|_| GraphError::InvalidWeight(weight))?;
        self.add_edge(origin, destination, checked);
        Ok(())
    }

    /// Get a vertex by name
    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertices.get(name)
    }

    /// Whether a vertex with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.vertices.contains_key(name)
    }

    /// All vertex handles
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// All vertex names
    pub fn vertex_names(&self) -> Vec<&str> {
        self.vertices.keys().map(String::as_str).collect()
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// All edges as `(origin, destination, weight)` name triples
    ///
    /// Under [`Mode::Undirected`] each unordered pair is reported exactly
    /// once, from the lexicographically smaller endpoint. The listing is
    /// sorted, so output is deterministic for a given graph.
    pub fn edges(&self) -> Vec<(&str, &str, Weight)> {
        let mut edges = Vec::new();
        for origin in self.vertices.values() {
            for (destination, weight) in origin.links() {
                if !self.is_directed() && origin.name() > destination {
                    continue;
                }
                edges.push((origin.name(), destination, weight));
            }
        }
        edges.sort_unstable();
        edges
    }

    /// Number of edges, counting each undirected pair once
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self
            .edges()
            .iter()
            .map(|(origin, destination, weight)| format!("{origin}-{destination}:{weight}"))
            .collect();
        write!(f, "{}", rendered.join(", "))
    }
}
