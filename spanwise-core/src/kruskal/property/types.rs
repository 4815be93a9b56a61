//! Fixture and distribution types for stepper property tests.

use test_strategy::Arbitrary;

use crate::{Edge, Graph, GraphBuilder, NodeId};

/// Weight and topology family used when generating a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Each edge has a weight drawn from a continuous range.
    #[weight(2)]
    Unique,
    /// Large groups of edges share identical weights, stressing the
    /// identifier tie-break.
    #[weight(3)]
    ManyIdentical,
    /// Random spanning tree plus roughly `0.5n` to `n` extra edges.
    #[weight(2)]
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    #[weight(1)]
    Dense,
    /// Several components with no cross-component edges, plus isolated
    /// vertices.
    #[weight(2)]
    Disconnected,
}

/// A generated input graph in raw form.
///
/// Vertices are `0..node_count`; every pair in `edges` is distinct and
/// canonical, and every identifier is unique.
#[derive(Clone, Debug)]
pub(super) struct StepperFixture {
    /// Number of vertices, including isolated ones.
    pub node_count: usize,
    /// Edges with their endpoints.
    pub edges: Vec<(Edge, NodeId, NodeId)>,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl StepperFixture {
    /// Materialises the fixture as a [`Graph`] sized to hold every vertex.
    pub(super) fn to_graph(&self) -> Graph {
        let mut graph = GraphBuilder::new()
            .with_max_vertices(self.node_count.max(1))
            .build()
            .expect("fixture ceiling is positive");
        for id in 0..self.node_count {
            let id = u32::try_from(id).expect("fixture node ids fit in u32");
            graph
                .add_vertex(NodeId::new(id))
                .expect("ceiling covers every fixture vertex");
        }
        for &(edge, a, b) in &self.edges {
            let added = graph
                .add_edge(edge, a, b)
                .expect("fixture edges are finite and within the ceiling");
            assert!(added, "fixture edge {edge} was rejected");
        }
        graph
    }

    /// Short description for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.node_count,
            self.edges.len(),
        )
    }
}
