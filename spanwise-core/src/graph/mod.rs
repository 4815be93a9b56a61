//! Undirected simple graph keyed by caller-assigned identifiers.
//!
//! [`Graph`] stores a symmetric adjacency map (`node -> neighbour -> edge`)
//! plus an edge index, both ordered by identifier so that every iteration
//! order is deterministic. Parallel edges and self-loops are rejected.
//!
//! Routine "cannot do this" outcomes such as adding a vertex twice are
//! reported as `false`. Hard failures (capacity, non-finite weights, directed
//! requests) surface as [`GraphError`].

mod config;
mod directed;
mod reachability;

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    element::{Edge, EdgeId, Endpoints, NodeId},
    error::{GraphError, GraphResult},
};

pub use self::config::{DEFAULT_MAX_VERTICES, GraphBuilder, GraphConfig};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Incidence {
    edge: Edge,
    endpoints: Endpoints,
}

/// An undirected graph without parallel edges or self-loops.
///
/// # Examples
/// ```
/// use spanwise_core::{Edge, EdgeId, Graph, NodeId};
///
/// let mut graph = Graph::new();
/// let (a, b) = (NodeId::new(2), NodeId::new(0));
/// assert!(graph.add_edge(Edge::new(EdgeId::new(0), 7.0), a, b)?);
///
/// let ends = graph.endpoints(EdgeId::new(0)).expect("edge is attached");
/// assert_eq!((ends.first(), ends.second()), (b, a));
/// assert_eq!(graph.find_edge(b, a).map(|edge| edge.id()), Some(EdgeId::new(0)));
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    config: GraphConfig,
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, Edge>>,
    edges: BTreeMap<EdgeId, Incidence>,
}

impl Graph {
    /// Creates an empty graph with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph sharing `config`.
    #[must_use]
    pub const fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            adjacency: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }

    /// Returns the configuration this graph was built with.
    #[must_use]
    #[rustfmt::skip]
    pub const fn config(&self) -> GraphConfig { self.config }

    /// Iterates over every vertex in ascending identifier order.
    pub fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterates over every edge in ascending identifier order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.values().map(|incidence| incidence.edge)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the graph holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` when `vertex` belongs to the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: NodeId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Returns `true` when an edge with identifier `edge` is attached.
    #[must_use]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains_key(&edge)
    }

    /// Looks up the stored edge with identifier `edge`.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<Edge> {
        self.edges.get(&edge).map(|incidence| incidence.edge)
    }

    /// Adds `vertex` when absent.
    ///
    /// Returns `Ok(false)` without mutation when the vertex is already present.
    ///
    /// # Errors
    /// Returns [`GraphError::CapacityExceeded`] when the graph already holds
    /// its configured maximum of vertices.
    pub fn add_vertex(&mut self, vertex: NodeId) -> GraphResult<bool> {
        if self.contains_vertex(vertex) {
            debug!(vertex = %vertex, "vertex already present");
            return Ok(false);
        }
        self.ensure_capacity(1)?;
        self.adjacency.insert(vertex, BTreeMap::new());
        Ok(true)
    }

    /// Connects `v1` and `v2` with `edge`, adding either vertex when absent.
    ///
    /// Returns `Ok(false)` without mutation when `v1 == v2`, when `v1` and
    /// `v2` are already connected, or when an edge with the same identifier is
    /// attached anywhere in the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] for a NaN or infinite weight
    /// and [`GraphError::CapacityExceeded`] when inserting the missing
    /// endpoints would exceed the vertex ceiling. Neither leaves a trace.
    pub fn add_edge(&mut self, edge: Edge, v1: NodeId, v2: NodeId) -> GraphResult<bool> {
        if !edge.weight().is_finite() {
            return Err(GraphError::NonFiniteWeight { edge: edge.id() });
        }
        if v1 == v2 {
            debug!(edge = %edge.id(), vertex = %v1, reason = "self_loop", "edge rejected");
            return Ok(false);
        }
        if self.contains_edge(edge.id()) {
            debug!(edge = %edge.id(), reason = "duplicate_edge", "edge rejected");
            return Ok(false);
        }
        if let Some(existing) = self.find_edge(v1, v2) {
            debug!(
                edge = %edge.id(),
                existing = %existing.id(),
                reason = "parallel_edge",
                "edge rejected",
            );
            return Ok(false);
        }

        let missing = usize::from(!self.contains_vertex(v1)) + usize::from(!self.contains_vertex(v2));
        self.ensure_capacity(missing)?;

        self.adjacency.entry(v1).or_default().insert(v2, edge);
        self.adjacency.entry(v2).or_default().insert(v1, edge);
        self.edges.insert(
            edge.id(),
            Incidence {
                edge,
                endpoints: Endpoints::new(v1, v2),
            },
        );
        Ok(true)
    }

    /// Adds `edge` between the two vertices of `vertices`.
    ///
    /// Any slice that does not hold exactly two vertices is a soft failure.
    ///
    /// # Errors
    /// Propagates the hard failures of [`Graph::add_edge`].
    pub fn add_edge_with_vertices(&mut self, edge: Edge, vertices: &[NodeId]) -> GraphResult<bool> {
        let [v1, v2] = vertices else {
            debug!(edge = %edge.id(), given = vertices.len(), reason = "arity", "edge rejected");
            return Ok(false);
        };
        self.add_edge(edge, *v1, *v2)
    }

    /// Detaches `edge` from both of its endpoints.
    ///
    /// Returns `false` when no such edge is attached.
    pub fn remove_edge(&mut self, edge: EdgeId) -> bool {
        let Some(incidence) = self.edges.remove(&edge) else {
            debug!(edge = %edge, "edge not present");
            return false;
        };
        let (first, second) = (incidence.endpoints.first(), incidence.endpoints.second());
        if let Some(row) = self.adjacency.get_mut(&first) {
            row.remove(&second);
        }
        if let Some(row) = self.adjacency.get_mut(&second) {
            row.remove(&first);
        }
        true
    }

    /// Removes `vertex` together with every edge incident to it.
    ///
    /// Returns `false` when the vertex is absent.
    pub fn remove_vertex(&mut self, vertex: NodeId) -> bool {
        let Some(row) = self.adjacency.remove(&vertex) else {
            debug!(vertex = %vertex, "vertex not present");
            return false;
        };
        for (neighbour, edge) in row {
            if let Some(back) = self.adjacency.get_mut(&neighbour) {
                back.remove(&vertex);
            }
            self.edges.remove(&edge.id());
        }
        true
    }

    /// Iterates over the neighbours of `vertex` in ascending order.
    ///
    /// Returns `None` when `vertex` is absent; a present vertex without edges
    /// yields an empty iterator.
    pub fn neighbors(&self, vertex: NodeId) -> Option<impl Iterator<Item = NodeId> + '_> {
        self.adjacency.get(&vertex).map(|row| row.keys().copied())
    }

    /// Iterates over the edges incident to `vertex`, ordered by neighbour.
    ///
    /// Returns `None` when `vertex` is absent.
    pub fn incident_edges(&self, vertex: NodeId) -> Option<impl Iterator<Item = Edge> + '_> {
        self.adjacency.get(&vertex).map(|row| row.values().copied())
    }

    /// Returns the number of edges incident to `vertex`, or `None` when the
    /// vertex is absent.
    #[must_use]
    pub fn degree(&self, vertex: NodeId) -> Option<usize> {
        self.adjacency.get(&vertex).map(BTreeMap::len)
    }

    /// Returns the edge connecting `v1` and `v2` in either order.
    #[must_use]
    pub fn find_edge(&self, v1: NodeId, v2: NodeId) -> Option<Edge> {
        self.adjacency.get(&v1)?.get(&v2).copied()
    }

    /// Returns every edge connecting `v1` and `v2`.
    ///
    /// Returns `None` when either vertex is absent. Simple graphs hold at
    /// most one such edge.
    #[must_use]
    pub fn find_edge_set(&self, v1: NodeId, v2: NodeId) -> Option<Vec<Edge>> {
        if !self.contains_vertex(v2) {
            return None;
        }
        let row = self.adjacency.get(&v1)?;
        Some(row.get(&v2).copied().into_iter().collect())
    }

    /// Returns `true` when `v1` and `v2` share an edge.
    #[must_use]
    pub fn is_neighbor(&self, v1: NodeId, v2: NodeId) -> bool {
        self.find_edge(v1, v2).is_some()
    }

    /// Returns `true` when `vertex` is an endpoint of `edge`.
    #[must_use]
    pub fn is_incident(&self, vertex: NodeId, edge: EdgeId) -> bool {
        self.endpoints(edge)
            .is_some_and(|endpoints| endpoints.contains(vertex))
    }

    /// Returns the endpoints of `edge` in ascending identifier order, or
    /// `None` when the edge is not attached.
    #[must_use]
    pub fn endpoints(&self, edge: EdgeId) -> Option<Endpoints> {
        self.edges.get(&edge).map(|incidence| incidence.endpoints)
    }

    /// Returns both endpoints of `edge` as an array in ascending order.
    #[must_use]
    pub fn incident_vertices(&self, edge: EdgeId) -> Option<[NodeId; 2]> {
        self.endpoints(edge)
            .map(|endpoints| [endpoints.first(), endpoints.second()])
    }

    /// Returns the endpoint of `edge` that is not `vertex`.
    ///
    /// Returns `None` when the edge is not attached or `vertex` is not one of
    /// its endpoints.
    #[must_use]
    pub fn opposite(&self, vertex: NodeId, edge: EdgeId) -> Option<NodeId> {
        self.endpoints(edge)?.opposite(vertex)
    }

    fn ensure_capacity(&self, additional: usize) -> GraphResult<()> {
        let max_vertices = self.config.max_vertices();
        if self.adjacency.len().saturating_add(additional) > max_vertices {
            return Err(GraphError::CapacityExceeded { max_vertices });
        }
        Ok(())
    }
}
