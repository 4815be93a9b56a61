//! Benchmark parameter types.

use std::fmt;

/// Parameters for a synthetic graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Number of edges beyond the spanning path.
    pub extra_edges: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v={},extra={}", self.vertex_count, self.extra_edges)
    }
}
