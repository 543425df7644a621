//! Search results.

use serde::Serialize;

/// A path found by uniform-cost or A* search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<N, W> {
    /// Nodes along the path, start first and goal last.
    pub nodes: Vec<N>,
    /// Sum of the edge weights along the path.
    pub cost: W,
}

impl<N, W> Path<N, W> {
    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// First node of the path.
    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    /// Last node of the path.
    pub fn goal(&self) -> Option<&N> {
        self.nodes.last()
    }
}
