//! Depth-first traversal core and the structural queries built on it.
//!
//! Every walk runs on an explicit stack of frames instead of the call stack,
//! so depth is bounded by heap memory rather than thread stack size. A frame
//! holds its slot and a cursor into that slot's matrix row; advancing the
//! cursor yields neighbors in ascending slot order, which reproduces the
//! visit order of the equivalent recursive walk.

use crate::types::{EdgeWeight, GraphResult, NodeKey};

use super::edge_store::EdgeStore;
use super::Graph;

/// Which edges a walk may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// Follow outgoing edges (source -> target).
    Outgoing,
    /// Follow edges in either direction (weak connectivity).
    Either,
}

/// One level of the explicit recursion stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    slot: usize,
    /// Next column of `slot`'s row to inspect.
    cursor: usize,
    /// Slot this frame was entered from.
    parent: Option<usize>,
}

impl Frame {
    fn new(slot: usize, parent: Option<usize>) -> Self {
        Self {
            slot,
            cursor: 0,
            parent,
        }
    }

    /// Advance to the next neighbor reachable under `reach`.
    fn next_neighbor<W: Copy>(&mut self, edges: &EdgeStore<W>, reach: Reach) -> Option<usize> {
        while self.cursor < edges.len() {
            let candidate = self.cursor;
            self.cursor += 1;
            let linked = match reach {
                Reach::Outgoing => edges.contains(self.slot, candidate),
                Reach::Either => {
                    edges.contains(self.slot, candidate) || edges.contains(candidate, self.slot)
                }
            };
            if linked {
                return Some(candidate);
            }
        }
        None
    }
}

/// Depth-first walk from `root`, calling `on_visit` for each newly visited slot.
///
/// Slots already marked in `visited` are skipped; the walk marks every slot
/// it reaches.
pub fn walk<W: Copy>(
    edges: &EdgeStore<W>,
    root: usize,
    reach: Reach,
    visited: &mut [bool],
    mut on_visit: impl FnMut(usize),
) {
    if root >= visited.len() || visited[root] {
        return;
    }

    visited[root] = true;
    on_visit(root);
    let mut stack = vec![Frame::new(root, None)];

    while let Some(frame) = stack.last_mut() {
        match frame.next_neighbor(edges, reach) {
            Some(next) if !visited[next] => {
                visited[next] = true;
                on_visit(next);
                let parent = frame.slot;
                stack.push(Frame::new(next, Some(parent)));
            }
            Some(_) => {}
            None => {
                stack.pop();
            }
        }
    }
}

/// Whether any walk revisits a node still on its own path.
///
/// `visited` marks nodes finished by any walk, `on_path` the nodes on the
/// current stack. On undirected graphs the edge back to the frame's parent is
/// the mirror of the edge just used and does not count.
pub fn has_cycle<N: NodeKey, W: EdgeWeight>(graph: &Graph<N, W>) -> bool {
    let edges = graph.edge_store();
    let n = graph.node_count();
    let directed = graph.is_directed();
    let mut visited = vec![false; n];
    let mut on_path = vec![false; n];

    for root in 0..n {
        if visited[root] {
            continue;
        }

        visited[root] = true;
        on_path[root] = true;
        let mut stack = vec![Frame::new(root, None)];

        while let Some(frame) = stack.last_mut() {
            let Some(next) = frame.next_neighbor(edges, Reach::Outgoing) else {
                on_path[frame.slot] = false;
                stack.pop();
                continue;
            };

            if !directed && frame.parent == Some(next) {
                continue;
            }
            if on_path[next] {
                log::debug!("Cycle found through slot {}", next);
                return true;
            }
            if !visited[next] {
                visited[next] = true;
                on_path[next] = true;
                let parent = frame.slot;
                stack.push(Frame::new(next, Some(parent)));
            }
        }
    }

    false
}

/// Maximal weakly connected sets, each listed in discovery order.
///
/// Components are ordered by their first node's slot, so the output is
/// deterministic for a given insertion sequence.
pub fn connected_components<N: NodeKey, W: EdgeWeight>(graph: &Graph<N, W>) -> Vec<Vec<N>> {
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        let mut members = Vec::new();
        walk(graph.edge_store(), root, Reach::Either, &mut visited, |slot| {
            members.push(graph.id_of(slot).clone());
        });
        components.push(members);
    }

    log::debug!("Found {} connected components", components.len());
    components
}

/// Nodes reachable from `start` along outgoing edges, in first-visit order.
pub fn iterative_dfs<N: NodeKey, W: EdgeWeight>(
    graph: &Graph<N, W>,
    start: &N,
) -> GraphResult<Vec<N>> {
    let root = graph.require_slot(start)?;
    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::new();

    walk(graph.edge_store(), root, Reach::Outgoing, &mut visited, |slot| {
        order.push(graph.id_of(slot).clone());
    });

    Ok(order)
}
