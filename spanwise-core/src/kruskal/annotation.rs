//! Observational state tags for vertices and edges.

use std::collections::BTreeMap;

use crate::element::{EdgeId, NodeId};

/// Display tag attached to a vertex or edge while the stepper runs.
///
/// The stepper only ever writes tags; no decision depends on them.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Annotation {
    /// Not touched yet.
    #[default]
    Unmarked,
    /// Edge rejected as cycle-forming, or never considered.
    Inactive,
    /// Edge that the next step will consider.
    Highlighted,
    /// Vertex left out of the spanning forest.
    Warning,
    /// Vertex or edge that belongs to the spanning forest.
    Selected,
}

/// Side-table mapping element identifiers to their current [`Annotation`].
///
/// Elements without an entry read as [`Annotation::Unmarked`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Annotations {
    nodes: BTreeMap<NodeId, Annotation>,
    edges: BTreeMap<EdgeId, Annotation>,
}

impl Annotations {
    /// Current tag of `node`.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Annotation {
        self.nodes.get(&node).copied().unwrap_or_default()
    }

    /// Current tag of `edge`.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Annotation {
        self.edges.get(&edge).copied().unwrap_or_default()
    }

    pub(crate) fn mark_node(&mut self, node: NodeId, annotation: Annotation) {
        self.nodes.insert(node, annotation);
    }

    pub(crate) fn mark_edge(&mut self, edge: EdgeId, annotation: Annotation) {
        self.edges.insert(edge, annotation);
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Vertices currently carrying `annotation`, in ascending order.
    pub fn nodes_with(&self, annotation: Annotation) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .filter(move |(_, tag)| **tag == annotation)
            .map(|(node, _)| *node)
    }

    /// Edges currently carrying `annotation`, in ascending order.
    pub fn edges_with(&self, annotation: Annotation) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .filter(move |(_, tag)| **tag == annotation)
            .map(|(edge, _)| *edge)
    }

    /// Returns `true` when no element carries a tag.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
