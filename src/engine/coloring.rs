//! Greedy node and edge coloring.
//!
//! Both process their items in a fixed order and give each the smallest color
//! index not already used by a conflicting item. The result is always a valid
//! coloring; it is not guaranteed to use the minimum number of colors.

use crate::graph::Graph;
use crate::types::{ColoredEdge, EdgeWeight, GraphResult, NodeKey};

/// Smallest index not marked in `used`.
fn first_free(used: &[bool]) -> usize {
    used.iter().position(|&u| !u).unwrap_or(used.len())
}

/// Color per node, indexed by slot, assigned in insertion order.
pub fn node_coloring<N: NodeKey, W: EdgeWeight>(graph: &Graph<N, W>) -> GraphResult<Vec<usize>> {
    graph.require_undirected("node_coloring")?;

    let n = graph.node_count();
    let mut colors: Vec<Option<usize>> = vec![None; n];

    for slot in 0..n {
        // A node has at most n - 1 neighbors, so some color in 0..n is free.
        let mut used = vec![false; n];
        for (neighbor, _) in graph.edge_store().row(slot) {
            if let Some(c) = colors[neighbor] {
                used[c] = true;
            }
        }
        colors[slot] = Some(first_free(&used));
    }

    let colors: Vec<usize> = colors.into_iter().flatten().collect();
    log::debug!(
        "Node coloring uses {} colors",
        colors.iter().max().map_or(0, |&c| c + 1)
    );
    Ok(colors)
}

/// Color per edge, assigned in ascending `(lower slot, higher slot)` order.
pub fn edge_coloring<N: NodeKey, W: EdgeWeight>(
    graph: &Graph<N, W>,
) -> GraphResult<Vec<ColoredEdge<N, W>>> {
    graph.require_undirected("edge_coloring")?;

    let n = graph.node_count();
    // incident[v] holds the colors already on edges touching v
    let mut incident: Vec<Vec<bool>> = vec![Vec::new(); n];
    let mut colored = Vec::with_capacity(graph.edge_count());

    for (s, d, w) in graph.slot_edges() {
        let width = incident[s].len().max(incident[d].len()) + 1;
        let used: Vec<bool> = (0..width)
            .map(|c| {
                incident[s].get(c).copied().unwrap_or(false)
                    || incident[d].get(c).copied().unwrap_or(false)
            })
            .collect();
        let color = first_free(&used);

        for endpoint in [s, d] {
            let marks = &mut incident[endpoint];
            if marks.len() <= color {
                marks.resize(color + 1, false);
            }
            marks[color] = true;
        }

        colored.push(ColoredEdge {
            edge: graph.edge_at(s, d, w),
            color,
        });
    }

    Ok(colored)
}
