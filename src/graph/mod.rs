//! Graph storage, construction and traversal.

pub mod builder;
pub mod edge_store;
pub mod traversal;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use edge_store::EdgeStore;
pub use traversal::Reach;
pub use weighted_graph::{Graph, GraphSnapshot};
