//! Query system for routage graphs
//!
//! Provides exact shortest-path solving over a populated graph.

mod path;
mod types;

pub use path::{shortest_path, PathQuery};
pub use types::{Distance, PathResult};
