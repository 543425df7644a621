//! Uniform-cost and A* path search over a priority frontier.

use crate::graph::Graph;
use crate::types::error::describe;
use crate::types::{EdgeWeight, GraphError, GraphResult, NodeKey, Path};

use super::frontier::Frontier;

/// Frontier payload: slot and the accumulated cost it was pushed with.
type Reached<W> = (usize, W);

/// Least-cost path from `start` to `goal` by uniform-cost search.
///
/// Weights are assumed non-negative. A relaxation whose cost would overflow
/// `W` is skipped. Fails with `NoPath` if the frontier empties before `goal`
/// is expanded.
pub fn uniform_cost_search<N: NodeKey, W: EdgeWeight>(
    graph: &Graph<N, W>,
    start: &N,
    goal: &N,
) -> GraphResult<Path<N, W>> {
    best_first(graph, start, goal, |_, cost| Some(cost))
}

/// Least-cost path from `start` to `goal` by A* search.
///
/// Frontier priority is the accumulated cost as `f64` plus
/// `heuristic(node, goal)`, so estimates may be fractional whatever `W` is.
/// The result is optimal only if the heuristic never overestimates the
/// remaining cost; that is not checked. A NaN estimate drops that candidate.
pub fn a_star_search<N, W, H>(
    graph: &Graph<N, W>,
    start: &N,
    goal: &N,
    heuristic: H,
) -> GraphResult<Path<N, W>>
where
    N: NodeKey,
    W: EdgeWeight,
    H: Fn(&N, &N) -> f64,
{
    best_first(graph, start, goal, |slot, cost| {
        let estimate = cost.to_f64()? + heuristic(graph.id_of(slot), goal);
        (!estimate.is_nan()).then_some(estimate)
    })
}

/// Shared best-first loop. `priority(slot, cost)` orders the frontier;
/// `None` means the candidate cannot be ranked and is dropped.
///
/// Entries superseded by a cheaper push are skipped when popped, so a node
/// may be expanded again if a cheaper route to it turns up later.
fn best_first<N, W, Q, P>(
    graph: &Graph<N, W>,
    start: &N,
    goal: &N,
    priority: P,
) -> GraphResult<Path<N, W>>
where
    N: NodeKey,
    W: EdgeWeight,
    Q: EdgeWeight,
    P: Fn(usize, W) -> Option<Q>,
{
    let source = graph.require_slot(start)?;
    let target = graph.require_slot(goal)?;

    let n = graph.node_count();
    let mut best: Vec<Option<W>> = vec![None; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut frontier: Frontier<Q, Reached<W>> = Frontier::new();
    let mut expanded = 0usize;

    if let Some(rank) = priority(source, W::zero()) {
        best[source] = Some(W::zero());
        frontier.push(rank, (source, W::zero()));
    }

    while let Some((_, (u, cost))) = frontier.pop() {
        if let Some(current) = best[u] {
            if cost > current {
                continue;
            }
        }

        if u == target {
            log::debug!("Reached goal after expanding {} nodes", expanded);
            return Ok(Path {
                nodes: reconstruct(graph, &predecessor, source, target),
                cost,
            });
        }

        expanded += 1;
        log::trace!("Expanding slot {} at cost {:?}", u, cost);

        for (v, weight) in graph.edge_store().row(u) {
            let Some(next) = cost.checked_add(weight) else {
                log::trace!("Cost to slot {} overflows, skipping", v);
                continue;
            };
            if best[v].map_or(false, |known| next >= known) {
                continue;
            }
            let Some(rank) = priority(v, next) else {
                continue;
            };
            best[v] = Some(next);
            predecessor[v] = Some(u);
            frontier.push(rank, (v, next));
        }
    }

    Err(GraphError::NoPath {
        start: describe(start),
        goal: describe(goal),
    })
}

/// Walk predecessors back from `target` and return the path start-first.
fn reconstruct<N: NodeKey, W: EdgeWeight>(
    graph: &Graph<N, W>,
    predecessor: &[Option<usize>],
    source: usize,
    target: usize,
) -> Vec<N> {
    let mut slots = vec![target];
    let mut current = target;
    while current != source && slots.len() <= predecessor.len() {
        match predecessor[current] {
            Some(prev) => {
                slots.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    slots.reverse();
    slots.into_iter().map(|s| graph.id_of(s).clone()).collect()
}
