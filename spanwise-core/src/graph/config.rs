//! Builder and validated configuration for [`Graph`] instances.

use std::num::NonZeroUsize;

use crate::error::{GraphError, GraphResult};

use super::Graph;

/// Default vertex ceiling applied by [`Graph::new`] and [`GraphBuilder::new`].
pub const DEFAULT_MAX_VERTICES: usize = 200;

/// Validated settings shared by a graph and any subgraph derived from it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphConfig {
    max_vertices: NonZeroUsize,
}

impl GraphConfig {
    /// Returns the vertex ceiling.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_vertices(&self) -> usize { self.max_vertices.get() }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_vertices: NonZeroUsize::MIN.saturating_add(DEFAULT_MAX_VERTICES - 1),
        }
    }
}

/// Configures and constructs [`Graph`] instances.
///
/// # Examples
/// ```
/// use spanwise_core::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .with_max_vertices(16)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(graph.config().max_vertices(), 16);
/// assert_eq!(graph.vertex_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    max_vertices: usize,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl GraphBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::{DEFAULT_MAX_VERTICES, GraphBuilder};
    ///
    /// assert_eq!(GraphBuilder::new().max_vertices(), DEFAULT_MAX_VERTICES);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex ceiling.
    #[must_use]
    pub const fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Returns the configured vertex ceiling.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_vertices(&self) -> usize { self.max_vertices }

    /// Validates the configuration and constructs an empty [`Graph`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidCapacity`] when the vertex ceiling is zero.
    pub fn build(self) -> GraphResult<Graph> {
        let max_vertices = NonZeroUsize::new(self.max_vertices).ok_or(
            GraphError::InvalidCapacity {
                got: self.max_vertices,
            },
        )?;
        Ok(Graph::with_config(GraphConfig { max_vertices }))
    }
}
