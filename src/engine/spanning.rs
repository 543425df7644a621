//! Spanning tree builders: Prim's frontier growth and Kruskal's sorted merge.
//!
//! Both are undirected-only and fail with `DisconnectedGraph` when fewer than
//! `node_count - 1` edges can be selected.

use std::cmp::Ordering;

use crate::graph::{EdgeStore, Graph};
use crate::index::DisjointSet;
use crate::types::{Edge, EdgeWeight, GraphError, GraphResult, NodeKey};

use super::frontier::Frontier;

/// Frontier payload: tree slot and the outside slot it would connect.
type Crossing = (usize, usize);

/// Minimum spanning tree grown from the first inserted node.
///
/// Edges are returned in selection order. Each outside node keeps its
/// cheapest known connecting weight; a frontier push happens only when that
/// weight improves, and stale entries are skipped on pop.
pub fn prim_mst<N: NodeKey, W: EdgeWeight>(graph: &Graph<N, W>) -> GraphResult<Vec<Edge<N, W>>> {
    graph.require_undirected("prim_mst")?;

    let n = graph.node_count();
    if n == 0 {
        return Ok(Vec::new());
    }

    let edges = graph.edge_store();
    let mut in_tree = vec![false; n];
    let mut key: Vec<Option<W>> = vec![None; n];
    let mut frontier: Frontier<W, Crossing> = Frontier::new();
    let mut tree = Vec::with_capacity(n - 1);

    absorb(edges, 0, &mut in_tree, &mut key, &mut frontier);

    while tree.len() < n - 1 {
        let Some((weight, (from, to))) = frontier.pop() else {
            break;
        };
        if in_tree[to] {
            continue;
        }
        log::trace!("Prim selects {} -> {}", from, to);
        tree.push(graph.edge_at(from, to, weight));
        absorb(edges, to, &mut in_tree, &mut key, &mut frontier);
    }

    finish(tree, n)
}

/// Minimum spanning tree from all edges sorted by weight.
///
/// Ties are broken by ascending `(lower slot, higher slot)` so the result is
/// deterministic.
pub fn kruskal_mst<N: NodeKey, W: EdgeWeight>(
    graph: &Graph<N, W>,
) -> GraphResult<Vec<Edge<N, W>>> {
    graph.require_undirected("kruskal_mst")?;

    let n = graph.node_count();
    if n == 0 {
        return Ok(Vec::new());
    }

    // slot_edges is already ascending by slot pair; the stable sort keeps
    // that order among equal weights.
    let mut candidates = graph.slot_edges();
    candidates.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal));

    let mut components = DisjointSet::new(n);
    let mut tree = Vec::with_capacity(n - 1);

    for (s, d, w) in candidates {
        if tree.len() == n - 1 {
            break;
        }
        if components.union(s, d) {
            log::trace!("Kruskal selects {} -- {}", s, d);
            tree.push(graph.edge_at(s, d, w));
        }
    }

    finish(tree, n)
}

/// Move `slot` into the tree and offer its outside neighbors to the frontier.
fn absorb<W: EdgeWeight>(
    edges: &EdgeStore<W>,
    slot: usize,
    in_tree: &mut [bool],
    key: &mut [Option<W>],
    frontier: &mut Frontier<W, Crossing>,
) {
    in_tree[slot] = true;
    for (v, w) in edges.row(slot) {
        if !in_tree[v] && key[v].map_or(true, |k| w < k) {
            key[v] = Some(w);
            frontier.push(w, (slot, v));
        }
    }
}

fn finish<N, W>(tree: Vec<Edge<N, W>>, n: usize) -> GraphResult<Vec<Edge<N, W>>> {
    if tree.len() < n - 1 {
        return Err(GraphError::DisconnectedGraph {
            selected: tree.len(),
            required: n - 1,
        });
    }
    log::debug!("Spanning tree complete with {} edges", tree.len());
    Ok(tree)
}
