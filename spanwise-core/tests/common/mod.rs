//! Shared fixtures for spanwise-core integration tests.

use spanwise_core::{Edge, EdgeId, Graph, NodeId};

/// Six vertices and seven weighted edges; vertex 4 has no edges.
///
/// The minimum spanning forest is `{e1, e3, e5, e6}` with weight 15.
pub fn six_vertex_graph() -> Graph {
    let mut graph = Graph::new();
    for id in 0..6 {
        graph
            .add_vertex(NodeId::new(id))
            .expect("default capacity fits six vertices");
    }
    for (id, weight, a, b) in [
        (0, 7.0, 2, 0),
        (1, 1.0, 3, 1),
        (2, 19.0, 1, 5),
        (3, 3.0, 3, 2),
        (4, 16.0, 2, 5),
        (5, 2.0, 3, 0),
        (6, 9.0, 0, 5),
    ] {
        let added = graph
            .add_edge(Edge::new(EdgeId::new(id), weight), NodeId::new(a), NodeId::new(b))
            .expect("fixture edges are valid");
        assert!(added, "fixture edge e{id} must be new");
    }
    graph
}
