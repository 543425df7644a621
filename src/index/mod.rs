//! Index structures backing the graph: identifier-to-slot mapping and union-find.

pub mod node_index;
pub mod union_find;

pub use node_index::NodeIndex;
pub use union_find::DisjointSet;
