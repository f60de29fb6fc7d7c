//! Routage: Weighted Transit-Graph Engine
//!
//! An exact shortest-path core for transit-map scale graphs: named vertices
//! with weighted adjacency, directed or undirected edge semantics, a
//! Dijkstra solver, and the stack/queue containers a caller uses to consume
//! a solved route step by step.
//!
//! # Core Concepts
//!
//! - **Vertices**: named stations with weighted edges to their neighbors
//! - **Graphs**: exclusive owners of vertices; directed or undirected, fixed
//!   at construction
//! - **Routes**: solved paths materialized into a FIFO queue and consumed
//!   front to back
//!
//! # Example
//!
//! ```
//! use routage::{Graph, PathQuery};
//!
//! let mut graph = Graph::undirected();
//! graph.add_edge("Berri", "Jean-Drapeau", 2);
//! graph.add_edge("Jean-Drapeau", "Longueuil", 3);
//!
//! let result = PathQuery::between("Berri", "Longueuil")
//!     .execute(&graph)
//!     .unwrap();
//! assert_eq!(result.distance(), Some(5));
//! ```

mod graph;
pub mod query;
pub mod route;

pub use graph::{Graph, GraphError, GraphResult, Mode, Vertex, Weight};
pub use query::{shortest_path, Distance, PathQuery, PathResult};
pub use route::{EmptyError, Queue, Route, Stack};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
