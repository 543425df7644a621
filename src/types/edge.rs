//! Edge values emitted by the algorithms.

use serde::Serialize;

use super::key::EdgeWeight;

/// One connection between two nodes.
///
/// Edges are not stored in this form; the graph keeps a weight matrix and
/// materializes `Edge` values for spanning trees, colorings and snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<N, W> {
    /// Source node (for undirected edges, the endpoint inserted first).
    pub source: N,
    /// Destination node.
    pub target: N,
    /// Weight of the connection.
    pub weight: W,
}

impl<N, W> Edge<N, W> {
    /// Create a new edge.
    pub fn new(source: N, target: N, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// An edge paired with the color assigned by edge coloring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColoredEdge<N, W> {
    /// The colored edge.
    pub edge: Edge<N, W>,
    /// Smallest color index not used by any adjacent edge at assignment time.
    pub color: usize,
}

/// Sum the weights of an edge list, clamped to the weight type's range.
pub fn total_weight<N, W: EdgeWeight>(edges: &[Edge<N, W>]) -> W {
    edges
        .iter()
        .fold(W::zero(), |acc, e| EdgeWeight::saturating_add(acc, e.weight))
}
