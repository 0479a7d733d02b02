use std::collections::HashMap;

use super::types::{compare_ids, Weight};

/// A graph node: identifier, optional payload and outgoing edges.
///
/// Nodes are only created through [`Graph::add_node`](super::Graph::add_node),
/// which checks that edge targets exist before delegating here.
#[derive(Debug, Clone)]
pub struct Node<P = ()> {
    id: String,
    payload: Option<P>,
    edges: HashMap<String, Weight>,
}

impl<P> Node<P> {
    pub(crate) fn new(id: String, payload: Option<P>) -> Self {
        Self {
            id,
            payload,
            edges: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub(crate) fn set_payload(&mut self, value: Option<P>) {
        self.payload = value;
    }

    /// Returns true if the edge is new
    pub(crate) fn connect(&mut self, to: &str, weight: Weight) -> bool {
        self.edges.insert(to.to_string(), weight).is_none()
    }

    pub(crate) fn disconnect(&mut self, to: &str) -> bool {
        self.edges.remove(to).is_some()
    }

    pub fn connected(&self, to: &str) -> bool {
        self.edges.contains_key(to)
    }

    pub fn edge_weight(&self, to: &str) -> Option<Weight> {
        self.edges.get(to).copied()
    }

    /// Outgoing edges sorted by target identifier
    pub fn sorted_edges(&self) -> Vec<(&str, Weight)> {
        let mut edges: Vec<(&str, Weight)> =
            self.edges.iter().map(|(to, w)| (to.as_str(), *w)).collect();
        edges.sort_by(|a, b| compare_ids(a.0, b.0));
        edges
    }
}
