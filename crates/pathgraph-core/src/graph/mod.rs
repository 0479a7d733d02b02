//! Weighted graph container and shortest-path operations
//!
//! Provides the in-memory graph and the algorithms that run over it:
//! - `Graph`: nodes keyed by identifier with directed, weighted edges
//! - Dijkstra shortest paths (linear scan or binary heap selection)
//! - Bellman-Ford shortest paths, with an opt-in negative-cycle check

pub mod algos;
pub mod node;
pub mod types;

use std::collections::HashMap;
use std::fmt::Display;

pub use algos::{bellman_ford, dijkstra, dijkstra_with, has_negative_cycle};
pub use node::Node;
pub use types::{
    compare_ids, Algorithm, DijkstraStrategy, Distance, Parent, PathEntry, PathTable, ReportRow,
    Weight, INFINITY_SENTINEL, MISSING_PARENT_SENTINEL,
};

/// In-memory weighted graph.
///
/// Edges are stored per direction; an undirected edge is two directed edges
/// of equal weight. Every operation keyed by identifier treats a missing node
/// as a non-event and reports it through its return value.
#[derive(Debug, Clone)]
pub struct Graph<P = ()> {
    nodes: HashMap<String, Node<P>>,
}

impl<P> Default for Graph<P> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }
}

impl<P> Graph<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node; returns false (and changes nothing) if `id` already exists
    pub fn add_node(&mut self, id: impl Into<String>, payload: Option<P>) -> bool {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(id.clone(), Node::new(id, payload));
        true
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Payload of `id`, or `None` if the node is absent or carries no payload
    pub fn node_value(&self, id: &str) -> Option<&P> {
        self.nodes.get(id).and_then(|n| n.payload())
    }

    pub fn change_node_value(&mut self, id: &str, value: Option<P>) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.set_payload(value);
                true
            }
            None => false,
        }
    }

    /// Insert or overwrite the directed edge `from -> to`.
    ///
    /// Returns true only when the edge did not exist before. An overwrite
    /// still replaces the weight but reports false.
    pub fn connect(&mut self, from: &str, to: &str, weight: Weight) -> bool {
        if !self.nodes.contains_key(to) {
            return false;
        }
        match self.nodes.get_mut(from) {
            Some(node) => node.connect(to, weight),
            None => false,
        }
    }

    pub fn disconnect(&mut self, from: &str, to: &str) -> bool {
        if !self.nodes.contains_key(to) {
            return false;
        }
        match self.nodes.get_mut(from) {
            Some(node) => node.disconnect(to),
            None => false,
        }
    }

    pub fn connected(&self, from: &str, to: &str) -> bool {
        self.has_node(to) && self.nodes.get(from).is_some_and(|n| n.connected(to))
    }

    pub fn edge_weight(&self, from: &str, to: &str) -> Option<Weight> {
        if !self.has_node(to) {
            return None;
        }
        self.nodes.get(from).and_then(|n| n.edge_weight(to))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node identifiers in numeric identifier order
    pub fn node_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        ids.sort_by(|a, b| compare_ids(a, b));
        ids
    }

    /// Outgoing edges of `id` in numeric identifier order (empty if absent)
    pub fn neighbors(&self, id: &str) -> Vec<(&str, Weight)> {
        self.nodes
            .get(id)
            .map(Node::sorted_edges)
            .unwrap_or_default()
    }

    /// Every directed edge `(from, to, weight)`, grouped by source node in
    /// numeric identifier order
    pub fn edges(&self) -> Vec<(&str, &str, Weight)> {
        self.node_ids()
            .into_iter()
            .flat_map(|from| {
                self.neighbors(from)
                    .into_iter()
                    .map(move |(to, w)| (from, to, w))
            })
            .collect()
    }
}

impl<P: Display> Graph<P> {
    /// Human-readable description of a node and its outgoing edges.
    ///
    /// A node without a payload is described with the value `null`.
    pub fn describe_node(&self, id: &str) -> Option<String> {
        let node = self.nodes.get(id)?;
        let value = node
            .payload()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "null".to_string());

        let mut out = format!("Node {} with value {}.\n", node.id(), value);
        for (to, weight) in node.sorted_edges() {
            out.push_str(&format!(" Connected to {} at weight {}.\n", to, weight));
        }
        Some(out)
    }
}
