//! Identity-bearing graph elements.
//!
//! Nodes and edges are plain `Copy` values keyed by caller-assigned
//! identifiers. They carry no mutable state: observational annotations live in
//! the side-table owned by [`crate::KruskalStepper`].

use std::{cmp::Ordering, fmt};

/// Caller-assigned vertex identifier.
///
/// Identifiers are ordered numerically; [`crate::Graph::endpoints`] relies on
/// that order to return endpoints canonically.
///
/// # Examples
/// ```
/// use spanwise_core::NodeId;
///
/// assert!(NodeId::new(1) < NodeId::new(2));
/// assert_eq!(NodeId::new(7).get(), 7);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(u32);

impl NodeId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> u32 { self.0 }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Caller-assigned edge identifier, unique within a graph.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(u32);

impl EdgeId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> u32 { self.0 }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A weighted undirected connector.
///
/// Edges order by weight (lower first) and then by identifier, so two distinct
/// edges never compare equal even when their weights tie. The priority queue
/// of the stepper depends on this total order.
///
/// # Examples
/// ```
/// use spanwise_core::{Edge, EdgeId};
///
/// let light = Edge::new(EdgeId::new(9), 1.0);
/// let heavy = Edge::new(EdgeId::new(0), 4.0);
/// let tie = Edge::new(EdgeId::new(3), 1.0);
/// assert!(light < heavy);
/// assert!(tie < light);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    id: EdgeId,
    weight: f32,
}

impl Edge {
    /// Creates an edge with the given identity and weight.
    #[must_use]
    pub const fn new(id: EdgeId, weight: f32) -> Self {
        Self { id, weight }
    }

    /// Creates an edge with unit weight.
    #[must_use]
    pub const fn unweighted(id: EdgeId) -> Self {
        Self::new(id, 1.0)
    }

    /// Returns the edge identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> EdgeId { self.id }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f32 { self.weight }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Edge {}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.weight)
    }
}

/// The two vertices an edge connects, sorted by ascending identifier.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Endpoints {
    first: NodeId,
    second: NodeId,
}

impl Endpoints {
    /// Builds a canonical pair regardless of argument order.
    #[must_use]
    pub fn new(left: NodeId, right: NodeId) -> Self {
        if left <= right {
            Self {
                first: left,
                second: right,
            }
        } else {
            Self {
                first: right,
                second: left,
            }
        }
    }

    /// Returns the endpoint with the smaller identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn first(&self) -> NodeId { self.first }

    /// Returns the endpoint with the larger identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn second(&self) -> NodeId { self.second }

    /// Returns `true` when `node` is one of the endpoints.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.first == node || self.second == node
    }

    /// Returns the endpoint opposite `node`, or `None` when `node` is not an
    /// endpoint.
    #[must_use]
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if node == self.first {
            Some(self.second)
        } else if node == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}

/// Edge orientation requested by a caller.
///
/// Graphs in this crate only store undirected edges; `Directed` exists so the
/// request can be named and rejected.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EdgeType {
    /// An edge without orientation.
    #[default]
    Undirected,
    /// An oriented edge. Always rejected.
    Directed,
}
