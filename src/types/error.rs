//! Error types for the slotgraph library.

use thiserror::Error;

/// All errors that can occur in the slotgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node with this identifier is already present.
    #[error("Node {0} already exists")]
    DuplicateNode(String),

    /// An operation referenced an identifier that is not in the graph.
    #[error("Node {0} not found")]
    UnknownNode(String),

    /// Edge from a node to itself.
    #[error("Self-loop not allowed on node {0}")]
    SelfLoop(String),

    /// Edges are set once; the pair already carries a weight.
    #[error("Edge {src} -> {dst} already exists")]
    EdgeExists { src: String, dst: String },

    /// Weight cannot be ordered against other weights (e.g. NaN).
    #[error("Invalid edge weight: {0}")]
    InvalidWeight(String),

    /// The search frontier emptied before reaching the goal.
    #[error("No path from {start} to {goal}")]
    NoPath { start: String, goal: String },

    /// A spanning tree could not reach every node.
    #[error("Graph is disconnected: selected {selected} of {required} spanning edges")]
    DisconnectedGraph { selected: usize, required: usize },

    /// The operation is only defined on undirected graphs.
    #[error("{0} requires an undirected graph")]
    DirectedGraph(&'static str),

    /// Katz iteration did not converge.
    #[error("Katz centrality diverged for alpha {alpha} after {iterations} iterations")]
    Divergence { alpha: f64, iterations: usize },

    /// Algorithm parameter outside its valid domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration could not be parsed or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for slotgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Render an identifier for an error payload.
pub(crate) fn describe<N: std::fmt::Debug>(id: &N) -> String {
    format!("{:?}", id)
}
