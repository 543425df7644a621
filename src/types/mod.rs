//! All data types for the slotgraph library.

pub mod edge;
pub mod error;
pub mod key;
pub mod path;

pub use edge::{total_weight, ColoredEdge, Edge};
pub use error::{GraphError, GraphResult};
pub use key::{EdgeWeight, NodeKey};
pub use path::Path;
