//! Fluent API for building Graph instances.

use crate::config::EngineConfig;
use crate::types::{EdgeWeight, GraphResult, NodeKey};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Nodes and edges are recorded in call order and replayed through the
/// mutation API by `build`, which surfaces the first validation error.
pub struct GraphBuilder<N, W> {
    directed: bool,
    config: EngineConfig,
    nodes: Vec<N>,
    edges: Vec<(N, N, W)>,
}

impl<N: NodeKey, W: EdgeWeight> GraphBuilder<N, W> {
    /// Create a new builder.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            config: EngineConfig::default(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Builder for a directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Builder for an undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Use a specific engine configuration.
    pub fn config(&mut self, config: EngineConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Add a node.
    pub fn node(&mut self, id: N) -> &mut Self {
        self.nodes.push(id);
        self
    }

    /// Add several nodes in order.
    pub fn nodes<I: IntoIterator<Item = N>>(&mut self, ids: I) -> &mut Self {
        self.nodes.extend(ids);
        self
    }

    /// Add an edge between two nodes.
    pub fn edge(&mut self, src: N, dst: N, weight: W) -> &mut Self {
        self.edges.push((src, dst, weight));
        self
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph<N, W>> {
        let mut graph = Graph::with_config(self.directed, self.config.clone())?;
        for id in &self.nodes {
            graph.add_node(id.clone())?;
        }
        for (src, dst, weight) in &self.edges {
            graph.add_edge(src, dst, *weight)?;
        }
        Ok(graph)
    }
}
