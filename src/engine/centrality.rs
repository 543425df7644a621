//! Katz centrality by fixed-point iteration.

use crate::config::KatzConfig;
use crate::graph::Graph;
use crate::types::{EdgeWeight, GraphError, GraphResult, NodeKey};

/// Katz score per node, indexed by slot.
///
/// Iterates `x[i] <- alpha * sum_j A[i][j] * x[j] + beta` from `x = beta`,
/// where `A[i][j]` is 1 when the edge `i -> j` exists. Weights do not scale
/// the iteration.
///
/// Stops once the largest per-node change drops below `config.tolerance`.
/// Fails with `Divergence` as soon as any score is non-finite or exceeds
/// `config.divergence_threshold`. When `config.max_iterations` runs out first,
/// the scores are returned only if `alpha * max_out_degree < 1`; otherwise
/// the run counts as divergent.
pub fn katz_centrality<N: NodeKey, W: EdgeWeight>(
    graph: &Graph<N, W>,
    alpha: f64,
    beta: f64,
    config: &KatzConfig,
) -> GraphResult<Vec<f64>> {
    if !alpha.is_finite() || !beta.is_finite() {
        return Err(GraphError::InvalidParameter(format!(
            "katz alpha and beta must be finite, got alpha={} beta={}",
            alpha, beta
        )));
    }
    config.validate()?;

    let n = graph.node_count();
    if n == 0 {
        return Ok(Vec::new());
    }

    let out_edges: Vec<Vec<usize>> = (0..n)
        .map(|i| graph.edge_store().row(i).map(|(j, _)| j).collect())
        .collect();
    let max_degree = out_edges.iter().map(Vec::len).max().unwrap_or(0);

    let mut scores = vec![beta; n];
    let mut next = vec![0.0; n];

    for iteration in 1..=config.max_iterations {
        for (i, neighbors) in out_edges.iter().enumerate() {
            let sum: f64 = neighbors.iter().map(|&j| scores[j]).sum();
            next[i] = alpha * sum + beta;
        }

        let diverged = next
            .iter()
            .any(|s| !s.is_finite() || s.abs() > config.divergence_threshold);
        if diverged {
            log::debug!("Katz scores exceeded threshold at iteration {}", iteration);
            return Err(GraphError::Divergence {
                alpha,
                iterations: iteration,
            });
        }

        let max_change = scores
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);

        std::mem::swap(&mut scores, &mut next);

        if max_change < config.tolerance {
            log::debug!("Katz converged after {} iterations", iteration);
            return Ok(scores);
        }
    }

    if alpha.abs() * max_degree as f64 >= 1.0 {
        return Err(GraphError::Divergence {
            alpha,
            iterations: config.max_iterations,
        });
    }

    log::warn!(
        "Katz centrality stopped at the iteration cap ({}) before reaching tolerance {}",
        config.max_iterations,
        config.tolerance
    );
    Ok(scores)
}
