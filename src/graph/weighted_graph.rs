//! Core graph structure: node index plus edge store behind the mutation API.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::{EngineConfig, KatzConfig};
use crate::engine::{centrality, coloring, search, spanning};
use crate::index::NodeIndex;
use crate::types::error::describe;
use crate::types::{ColoredEdge, Edge, EdgeWeight, GraphError, GraphResult, NodeKey, Path};

use super::edge_store::EdgeStore;
use super::traversal;

/// The aggregate root: labeled nodes and weighted edges, directed or not.
///
/// The mutation API (`add_node`, `add_edge` and friends) is the only writer
/// of the node index and edge store. Every algorithm borrows the graph
/// immutably and returns a derived value. Mutations are atomic: a failed call
/// leaves the graph exactly as it was.
#[derive(Debug, Clone)]
pub struct Graph<N, W> {
    /// Fixed at construction.
    directed: bool,
    /// Identifier <-> slot mapping.
    nodes: NodeIndex<N>,
    /// Weight matrix indexed by slot.
    edges: EdgeStore<W>,
    /// Distinct edges (an undirected edge counts once).
    edge_count: usize,
    /// Algorithm tuning.
    config: EngineConfig,
}

impl<N: NodeKey, W: EdgeWeight> Graph<N, W> {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: NodeIndex::new(),
            edges: EdgeStore::new(),
            edge_count: 0,
            config: EngineConfig::default(),
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Create a new empty graph with explicit engine configuration.
    ///
    /// Fails with `Config` if the configuration does not validate.
    pub fn with_config(directed: bool, config: EngineConfig) -> GraphResult<Self> {
        let mut graph = Self::new(directed);
        graph.set_config(config)?;
        Ok(graph)
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Engine configuration used by the algorithms.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the engine configuration.
    pub fn set_config(&mut self, config: EngineConfig) -> GraphResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Whether `id` is a node of this graph.
    pub fn contains_node(&self, id: &N) -> bool {
        self.nodes.contains(id)
    }

    /// Slot assigned to `id` at insertion.
    pub fn slot_of(&self, id: &N) -> Option<usize> {
        self.nodes.slot(id)
    }

    /// Identifier owning `slot`.
    pub fn node_at(&self, slot: usize) -> Option<&N> {
        self.nodes.id(slot)
    }

    /// All identifiers in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.ids().iter()
    }

    /// The identifier-to-slot index.
    pub fn node_index(&self) -> &NodeIndex<N> {
        &self.nodes
    }

    /// The slot-keyed weight matrix.
    pub fn edge_store(&self) -> &EdgeStore<W> {
        &self.edges
    }

    /// Weight of the edge `src -> dst`, if present.
    pub fn weight(&self, src: &N, dst: &N) -> Option<W> {
        let s = self.nodes.slot(src)?;
        let d = self.nodes.slot(dst)?;
        self.edges.get(s, d)
    }

    /// Whether the edge `src -> dst` exists.
    pub fn has_edge(&self, src: &N, dst: &N) -> bool {
        self.weight(src, dst).is_some()
    }

    /// Outgoing neighbors of `id` with edge weights, in slot order.
    pub fn neighbors(&self, id: &N) -> GraphResult<Vec<(N, W)>> {
        let slot = self.require_slot(id)?;
        Ok(self
            .edges
            .row(slot)
            .map(|(dst, w)| (self.id_of(dst).clone(), w))
            .collect())
    }

    /// Every distinct edge, ascending by slot pair.
    ///
    /// Undirected edges are reported once with the lower slot as source.
    pub fn edges(&self) -> Vec<Edge<N, W>> {
        self.slot_edges()
            .into_iter()
            .map(|(s, d, w)| self.edge_at(s, d, w))
            .collect()
    }

    /// Add a node at the next slot.
    pub fn add_node(&mut self, id: N) -> GraphResult<usize> {
        if self.nodes.contains(&id) {
            return Err(GraphError::DuplicateNode(describe(&id)));
        }

        self.edges.grow();
        let slot = self.nodes.push(id);
        log::debug!("Added node at slot {}", slot);

        Ok(slot)
    }

    /// Add several nodes. All-or-nothing: a duplicate anywhere inserts none.
    pub fn add_nodes<I>(&mut self, ids: I) -> GraphResult<Vec<usize>>
    where
        I: IntoIterator<Item = N>,
    {
        let ids: Vec<N> = ids.into_iter().collect();
        let mut seen = HashSet::with_capacity(ids.len());
        for id in &ids {
            if self.nodes.contains(id) || !seen.insert(id) {
                return Err(GraphError::DuplicateNode(describe(id)));
            }
        }

        let mut slots = Vec::with_capacity(ids.len());
        for id in ids {
            self.edges.grow();
            slots.push(self.nodes.push(id));
        }
        log::debug!("Added {} nodes, {} total", slots.len(), self.node_count());

        Ok(slots)
    }

    /// Add an edge between two existing, distinct nodes.
    ///
    /// Edges are set once: writing to a pair that already has a weight fails
    /// with `EdgeExists`. On undirected graphs the weight is mirrored.
    pub fn add_edge(&mut self, src: &N, dst: &N, weight: W) -> GraphResult<()> {
        let s = self.require_slot(src)?;
        let d = self.require_slot(dst)?;

        if s == d {
            return Err(GraphError::SelfLoop(describe(src)));
        }

        if !weight.is_comparable() {
            return Err(GraphError::InvalidWeight(describe(&weight)));
        }

        if self.edges.contains(s, d) {
            return Err(GraphError::EdgeExists {
                src: describe(src),
                dst: describe(dst),
            });
        }

        self.write_edge(s, d, weight);
        log::debug!("Added edge {} -> {}", s, d);

        Ok(())
    }

    /// Add an edge with the zero weight.
    pub fn add_unweighted_edge(&mut self, src: &N, dst: &N) -> GraphResult<()> {
        self.add_edge(src, dst, W::zero())
    }

    /// Connect every pair of distinct nodes that has no edge yet.
    ///
    /// Returns the number of edges inserted.
    pub fn complete_edges(&mut self, weight: W) -> GraphResult<usize> {
        if !weight.is_comparable() {
            return Err(GraphError::InvalidWeight(describe(&weight)));
        }

        let n = self.node_count();
        let mut added = 0;
        for s in 0..n {
            let first = if self.directed { 0 } else { s + 1 };
            for d in first..n {
                if s != d && !self.edges.contains(s, d) {
                    self.write_edge(s, d, weight);
                    added += 1;
                }
            }
        }

        log::debug!("Completed graph with {} new edges", added);
        Ok(added)
    }

    /// Serializable view of the whole graph.
    pub fn snapshot(&self) -> GraphSnapshot<N, W> {
        GraphSnapshot {
            directed: self.directed,
            nodes: self.nodes.ids().to_vec(),
            edges: self.edges(),
        }
    }

    // ==================== Structural queries ====================

    /// Whether the graph contains a cycle.
    ///
    /// Undirected graphs ignore the edge back to the parent, so a single
    /// mirrored edge is not a cycle.
    pub fn has_cycle(&self) -> bool {
        traversal::has_cycle(self)
    }

    /// Weakly connected components, each in discovery order.
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        traversal::connected_components(self)
    }

    /// Nodes reachable from `start` in depth-first first-visit order.
    pub fn iterative_dfs(&self, start: &N) -> GraphResult<Vec<N>> {
        traversal::iterative_dfs(self, start)
    }

    // ==================== Path search ====================

    /// Least-cost path from `start` to `goal`.
    pub fn uniform_cost_search(&self, start: &N, goal: &N) -> GraphResult<Path<N, W>> {
        search::uniform_cost_search(self, start, goal)
    }

    /// Least-cost path guided by an admissible `heuristic(node, goal)`.
    ///
    /// The estimate is an `f64` so it may be fractional for integer weights.
    pub fn a_star_search<H>(&self, start: &N, goal: &N, heuristic: H) -> GraphResult<Path<N, W>>
    where
        H: Fn(&N, &N) -> f64,
    {
        search::a_star_search(self, start, goal, heuristic)
    }

    // ==================== Spanning trees ====================

    /// Minimum spanning tree grown from the first inserted node.
    pub fn prim_mst(&self) -> GraphResult<Vec<Edge<N, W>>> {
        spanning::prim_mst(self)
    }

    /// Minimum spanning tree from globally sorted edges.
    pub fn kruskal_mst(&self) -> GraphResult<Vec<Edge<N, W>>> {
        spanning::kruskal_mst(self)
    }

    // ==================== Coloring ====================

    /// Greedy color per node, indexed by slot.
    pub fn node_coloring(&self) -> GraphResult<Vec<usize>> {
        coloring::node_coloring(self)
    }

    /// Greedy color per edge, ascending by slot pair.
    pub fn edge_coloring(&self) -> GraphResult<Vec<ColoredEdge<N, W>>> {
        coloring::edge_coloring(self)
    }

    // ==================== Centrality ====================

    /// Katz centrality per node (by slot) using the graph's configuration.
    pub fn katz_centrality(&self, alpha: f64, beta: f64) -> GraphResult<Vec<f64>> {
        centrality::katz_centrality(self, alpha, beta, &self.config.katz)
    }

    /// Katz centrality with explicit iteration bounds.
    pub fn katz_centrality_with(
        &self,
        alpha: f64,
        beta: f64,
        config: &KatzConfig,
    ) -> GraphResult<Vec<f64>> {
        centrality::katz_centrality(self, alpha, beta, config)
    }

    // ==================== Slot helpers ====================

    /// Slot for `id`, or `UnknownNode`.
    pub(crate) fn require_slot(&self, id: &N) -> GraphResult<usize> {
        self.nodes
            .slot(id)
            .ok_or_else(|| GraphError::UnknownNode(describe(id)))
    }

    /// Identifier at a slot known to be in range.
    pub(crate) fn id_of(&self, slot: usize) -> &N {
        &self.nodes.ids()[slot]
    }

    /// Materialize an `Edge` for a slot pair.
    pub(crate) fn edge_at(&self, src: usize, dst: usize, weight: W) -> Edge<N, W> {
        Edge::new(self.id_of(src).clone(), self.id_of(dst).clone(), weight)
    }

    /// Distinct edges as `(src, dst, weight)`, ascending by slot pair.
    pub(crate) fn slot_edges(&self) -> Vec<(usize, usize, W)> {
        let mut out = Vec::with_capacity(self.edge_count);
        for s in 0..self.node_count() {
            for (d, w) in self.edges.row(s) {
                if self.directed || s < d {
                    out.push((s, d, w));
                }
            }
        }
        out
    }

    /// Fail with `DirectedGraph` unless the graph is undirected.
    pub(crate) fn require_undirected(&self, operation: &'static str) -> GraphResult<()> {
        if self.directed {
            return Err(GraphError::DirectedGraph(operation));
        }
        Ok(())
    }

    fn write_edge(&mut self, s: usize, d: usize, weight: W) {
        self.edges.set(s, d, weight);
        if !self.directed {
            self.edges.set(d, s, weight);
        }
        self.edge_count += 1;
    }
}

/// Serializable view of a graph: identifiers in slot order plus every edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot<N, W> {
    /// Whether edges are one-way.
    pub directed: bool,
    /// Identifiers in insertion order.
    pub nodes: Vec<N>,
    /// Distinct edges, ascending by slot pair.
    pub edges: Vec<Edge<N, W>>,
}

impl<N: Serialize, W: Serialize> GraphSnapshot<N, W> {
    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
