//! Core graph data structures

mod graph;
mod vertex;


pub use graph::{Graph, GraphError, GraphResult, Mode};
pub use vertex::{Vertex, Weight};
