//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning path is laid down
//! first, then extra edges join random vertex pairs. Extras that would be
//! self-loops or parallel edges are redrawn.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanwise_core::{Edge, EdgeId, Graph, GraphBuilder, GraphError, NodeId};

use crate::params::GraphBenchParams;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested vertex count does not fit the identifier space.
    #[error("vertex count {count} exceeds the identifier range")]
    TooManyVertices {
        /// The rejected vertex count.
        count: usize,
    },
    /// More extra edges were requested than the vertex count can hold.
    #[error("{requested} extra edges requested but only {available} vertex pairs remain")]
    TooManyEdges {
        /// The requested number of extra edges.
        requested: usize,
        /// Pairs left after the spanning path.
        available: usize,
    },
    /// The graph rejected a generated element.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Vertex count and extra edge count.
    pub params: GraphBenchParams,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected weighted graph from `config`.
///
/// Weights are drawn uniformly from `[1, 1000)`. Edge identifiers are
/// assigned in generation order. The vertex ceiling equals the vertex count.
///
/// # Errors
/// Returns [`SyntheticError`] for a zero or oversized vertex count, or when
/// more extra edges are requested than free vertex pairs exist.
///
/// # Examples
///
/// ```
/// use spanwise_benches::params::GraphBenchParams;
/// use spanwise_benches::source::{SyntheticConfig, generate_graph};
///
/// let config = SyntheticConfig {
///     params: GraphBenchParams { vertex_count: 10, extra_edges: 5 },
///     seed: 42,
/// };
/// let graph = generate_graph(&config).expect("valid config");
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 14);
/// ```
pub fn generate_graph(config: &SyntheticConfig) -> Result<Graph, SyntheticError> {
    let GraphBenchParams {
        vertex_count,
        extra_edges,
    } = config.params;
    if vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    let last = u32::try_from(vertex_count)
        .map_err(|_| SyntheticError::TooManyVertices {
            count: vertex_count,
        })?;
    let pairs = vertex_count.saturating_mul(vertex_count - 1) / 2;
    let available = pairs - (vertex_count - 1);
    if extra_edges > available {
        return Err(SyntheticError::TooManyEdges {
            requested: extra_edges,
            available,
        });
    }

    let mut graph = GraphBuilder::new()
        .with_max_vertices(vertex_count)
        .build()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut next_id = 0_u32;
    let mut push = |graph: &mut Graph, rng: &mut SmallRng, a: u32, b: u32| {
        let edge = Edge::new(EdgeId::new(next_id), rng.gen_range(1.0_f32..1000.0));
        let added = graph.add_edge(edge, NodeId::new(a), NodeId::new(b))?;
        if added {
            next_id += 1;
        }
        Ok::<bool, GraphError>(added)
    };

    let mut order: Vec<u32> = (0..last).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }
    for window in order.windows(2) {
        if let [a, b] = *window {
            push(&mut graph, &mut rng, a, b)?;
        }
    }
    if vertex_count == 1 {
        graph.add_vertex(NodeId::new(0))?;
    }

    let mut added = 0;
    while added < extra_edges {
        let a = rng.gen_range(0..last);
        let b = rng.gen_range(0..last);
        if push(&mut graph, &mut rng, a, b)? {
            added += 1;
        }
    }
    Ok(graph)
}
