//! Edge-type handling and the directed-shaped query surface.
//!
//! No edge is ever directed here. In/out queries therefore collapse onto the
//! incidence queries, and source/destination lookups always come back empty.

use tracing::debug;

use crate::{
    element::{Edge, EdgeId, EdgeType, NodeId},
    error::{GraphError, GraphResult},
};

use super::Graph;

impl Graph {
    /// Adds `edge` with an explicit orientation.
    ///
    /// # Errors
    /// Returns [`GraphError::DirectedEdgeUnsupported`] for
    /// [`EdgeType::Directed`]; otherwise behaves like [`Graph::add_edge`].
    pub fn add_edge_typed(
        &mut self,
        edge: Edge,
        v1: NodeId,
        v2: NodeId,
        edge_type: EdgeType,
    ) -> GraphResult<bool> {
        match edge_type {
            EdgeType::Undirected => self.add_edge(edge, v1, v2),
            EdgeType::Directed => {
                debug!(edge = %edge.id(), "directed edge requested");
                Err(GraphError::DirectedEdgeUnsupported { edge: edge.id() })
            }
        }
    }

    /// Returns the orientation of `edge`, or `None` when it is not attached.
    #[must_use]
    pub fn edge_type(&self, edge: EdgeId) -> Option<EdgeType> {
        self.contains_edge(edge).then_some(EdgeType::Undirected)
    }

    /// The orientation applied when none is requested.
    #[must_use]
    pub const fn default_edge_type(&self) -> EdgeType {
        EdgeType::Undirected
    }

    /// Returns the edges of the given orientation, or `None` when the graph
    /// cannot hold edges of that orientation.
    #[must_use]
    pub fn edges_of_type(&self, edge_type: EdgeType) -> Option<Vec<Edge>> {
        match edge_type {
            EdgeType::Undirected => Some(self.edges().collect()),
            EdgeType::Directed => None,
        }
    }

    /// Counts the edges of the given orientation.
    #[must_use]
    pub fn edge_count_of_type(&self, edge_type: EdgeType) -> usize {
        match edge_type {
            EdgeType::Undirected => self.edge_count(),
            EdgeType::Directed => 0,
        }
    }

    /// Number of vertices incident to `edge`: always two for an attached edge.
    #[must_use]
    pub fn incident_count(&self, edge: EdgeId) -> Option<usize> {
        self.contains_edge(edge).then_some(2)
    }

    /// Same as [`Graph::incident_edges`].
    pub fn in_edges(&self, vertex: NodeId) -> Option<impl Iterator<Item = Edge> + '_> {
        self.incident_edges(vertex)
    }

    /// Same as [`Graph::incident_edges`].
    pub fn out_edges(&self, vertex: NodeId) -> Option<impl Iterator<Item = Edge> + '_> {
        self.incident_edges(vertex)
    }

    /// Same as [`Graph::degree`].
    #[must_use]
    pub fn in_degree(&self, vertex: NodeId) -> Option<usize> {
        self.degree(vertex)
    }

    /// Same as [`Graph::degree`].
    #[must_use]
    pub fn out_degree(&self, vertex: NodeId) -> Option<usize> {
        self.degree(vertex)
    }

    /// Same as [`Graph::neighbors`].
    pub fn predecessors(&self, vertex: NodeId) -> Option<impl Iterator<Item = NodeId> + '_> {
        self.neighbors(vertex)
    }

    /// Same as [`Graph::neighbors`].
    pub fn successors(&self, vertex: NodeId) -> Option<impl Iterator<Item = NodeId> + '_> {
        self.neighbors(vertex)
    }

    /// Same as [`Graph::degree`].
    #[must_use]
    pub fn predecessor_count(&self, vertex: NodeId) -> Option<usize> {
        self.degree(vertex)
    }

    /// Same as [`Graph::degree`].
    #[must_use]
    pub fn successor_count(&self, vertex: NodeId) -> Option<usize> {
        self.degree(vertex)
    }

    /// Same as [`Graph::is_neighbor`].
    #[must_use]
    pub fn is_predecessor(&self, v1: NodeId, v2: NodeId) -> bool {
        self.is_neighbor(v1, v2)
    }

    /// Same as [`Graph::is_neighbor`].
    #[must_use]
    pub fn is_successor(&self, v1: NodeId, v2: NodeId) -> bool {
        self.is_neighbor(v1, v2)
    }

    /// Source of a directed edge. Always `None`.
    #[must_use]
    pub const fn source(&self, _edge: EdgeId) -> Option<NodeId> {
        None
    }

    /// Destination of a directed edge. Always `None`.
    #[must_use]
    pub const fn dest(&self, _edge: EdgeId) -> Option<NodeId> {
        None
    }

    /// Whether `vertex` is the source of `edge`. Always `false`.
    #[must_use]
    pub fn is_source(&self, vertex: NodeId, edge: EdgeId) -> bool {
        self.source(edge) == Some(vertex)
    }

    /// Whether `vertex` is the destination of `edge`. Always `false`.
    #[must_use]
    pub fn is_dest(&self, vertex: NodeId, edge: EdgeId) -> bool {
        self.dest(edge) == Some(vertex)
    }
}
