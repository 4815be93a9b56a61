//! Shared helpers for stepper property tests.

use crate::{Edge, NodeId};

/// Path-halving find over a parent table.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Converts a fixture vertex into a parent-table index.
pub(super) fn index(node: NodeId) -> usize {
    usize::try_from(node.get()).expect("fixture node ids fit in usize")
}

/// Sums edge weights as `f64` for lossless accumulation.
pub(super) fn total_weight_f64<I: IntoIterator<Item = Edge>>(edges: I) -> f64 {
    edges.into_iter().map(|edge| f64::from(edge.weight())).sum()
}
