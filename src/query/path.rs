//! Shortest-path solving (exact Dijkstra)

use super::types::{Distance, PathResult};
use crate::graph::{Graph, GraphError, GraphResult};
use std::collections::{HashMap, HashSet};
use tracing::debug;

const INFINITE: Distance = Distance::MAX;

/// Query for the minimum-cost path between two vertices
///
/// Runs Dijkstra's algorithm over the full vertex set with a linear-scan
/// minimum selection. That is O(V^2), which is comfortable at transit-map
/// scale (tens to low hundreds of vertices); a priority queue could be
/// substituted without changing any observable result.
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Source vertex name
    pub source: String,
    /// Target vertex name
    pub target: String,
}

impl PathQuery {
    /// Create a query between two vertices
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Execute the query against a graph
    ///
    /// Fails with [`GraphError::VertexNotFound`] if either endpoint is not
    /// in the graph. An unreachable target is a normal
    /// [`PathResult::Unreachable`] return, distinct from the error case.
    pub fn execute(&self, graph: &Graph) -> GraphResult<PathResult> {
        for name in [&self.source, &self.target] {
            if !graph.contains(name) {
                return Err(GraphError::VertexNotFound(name.clone()));
            }
        }
        debug!(source = %self.source, target = %self.target, "solving shortest path");

        let mut unsettled: HashSet<&str> = graph.vertex_names().into_iter().collect();
        let mut distance: HashMap<&str, Distance> =
            unsettled.iter().map(|&name| (name, INFINITE)).collect();
        let mut predecessor: HashMap<&str, &str> = HashMap::new();
        distance.insert(self.source.as_str(), 0);

        while !unsettled.is_empty() {
            let nearest = unsettled
                .iter()
                .copied()
                .min_by_key(|name| distance.get(name).copied().unwrap_or(INFINITE));
            let Some(nearest) = nearest else {
                break;
            };
            let settled_cost = distance.get(nearest).copied().unwrap_or(INFINITE);
            if settled_cost == INFINITE {
                // Everything left is unreachable; settled results are final.
                break;
            }
            unsettled.remove(nearest);

            let Some(vertex) = graph.vertex(nearest) else {
                break;
            };
            for (neighbor, weight) in vertex.links() {
                if !unsettled.contains(neighbor) {
                    continue;
                }
                let candidate = settled_cost + Distance::from(weight);
                if candidate < distance.get(neighbor).copied().unwrap_or(INFINITE) {
                    distance.insert(neighbor, candidate);
                    predecessor.insert(neighbor, nearest);
                }
            }
        }

        let total = distance.get(self.target.as_str()).copied().unwrap_or(INFINITE);
        if total == INFINITE {
            debug!(source = %self.source, target = %self.target, "target unreachable");
            return Ok(PathResult::Unreachable);
        }

        // Walk the predecessor chain back from the target, then flip it.
        let mut path = vec![self.target.clone()];
        let mut current = self.target.as_str();
        while let Some(&pred) = predecessor.get(current) {
            path.push(pred.to_string());
            current = pred;
        }
        path.reverse();

        debug!(distance = total, hops = path.len() - 1, "shortest path settled");
        Ok(PathResult::Reached {
            distance: total,
            path,
        })
    }
}

/// Solve the shortest path between two named vertices
///
/// Convenience wrapper over [`PathQuery`] for one-shot solves.
pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> GraphResult<PathResult> {
    PathQuery::between(source, target).execute(graph)
}
