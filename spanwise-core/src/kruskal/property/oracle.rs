//! Sequential union-find Kruskal used as a reference.
//!
//! Edges are sorted with [`Edge`]'s own ordering (weight, then identifier),
//! so the oracle selects exactly the same edges as the stepper.

use std::collections::BTreeSet;

use crate::{Edge, EdgeId, NodeId};

use super::helpers::{find_root, index};

/// Result of the sequential oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    /// Identifiers of the selected edges.
    pub selected: BTreeSet<EdgeId>,
    /// Total weight of the forest, accumulated as `f64`.
    pub total_weight: f64,
    /// Connected components of the input graph.
    pub component_count: usize,
}

/// Computes a minimum spanning forest over vertices `0..node_count`.
pub(super) fn sequential_kruskal(
    node_count: usize,
    edges: &[(Edge, NodeId, NodeId)],
) -> OracleForest {
    let mut sorted = edges.to_vec();
    sorted.sort_unstable_by(|left, right| left.0.cmp(&right.0));

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut components = node_count;
    let mut selected = BTreeSet::new();
    let mut total_weight = 0.0_f64;

    for (edge, a, b) in sorted {
        let ra = find_root(&mut parent, index(a));
        let rb = find_root(&mut parent, index(b));
        if ra == rb {
            continue;
        }
        let (root, child) = if ra <= rb { (ra, rb) } else { (rb, ra) };
        parent[child] = root;
        components -= 1;
        total_weight += f64::from(edge.weight());
        selected.insert(edge.id());
    }

    OracleForest {
        selected,
        total_weight,
        component_count: components,
    }
}
