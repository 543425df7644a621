//! Graph algorithms: path search, spanning trees, coloring and centrality.
//!
//! Every function borrows the graph immutably and returns a derived value.

pub mod centrality;
pub mod coloring;
mod frontier;
pub mod search;
pub mod spanning;

pub use centrality::katz_centrality;
pub use coloring::{edge_coloring, node_coloring};
pub use search::{a_star_search, uniform_cost_search};
pub use spanning::{kruskal_mst, prim_mst};
