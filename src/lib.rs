//! slotgraph: an in-memory weighted graph engine.
//!
//! Keeps labeled nodes and weighted edges (directed or undirected) in a dense
//! slot-indexed matrix and runs classical algorithms over it: cycle
//! detection, connected components, uniform-cost and A* search, Prim and
//! Kruskal spanning trees, greedy coloring and Katz centrality.

pub mod config;
pub mod engine;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{EngineConfig, KatzConfig};
pub use graph::{EdgeStore, Graph, GraphBuilder, GraphSnapshot, Reach};
pub use index::{DisjointSet, NodeIndex};
pub use types::{
    total_weight, ColoredEdge, Edge, EdgeWeight, GraphError, GraphResult, NodeKey, Path,
};
