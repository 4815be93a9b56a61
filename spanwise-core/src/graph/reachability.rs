use std::collections::BTreeSet;

use crate::element::NodeId;

use super::Graph;

impl Graph {
    /// Returns every vertex reachable from `vertex` along any path,
    /// excluding `vertex` itself.
    ///
    /// Returns `None` when `vertex` is absent. Each call walks the whole
    /// component depth-first, costing `O(V + E)`; nothing is cached between
    /// calls.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::{Edge, EdgeId, Graph, NodeId};
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge(Edge::unweighted(EdgeId::new(0)), NodeId::new(0), NodeId::new(1))?;
    /// graph.add_vertex(NodeId::new(2))?;
    ///
    /// let reachable = graph.reachable_set(NodeId::new(0)).expect("vertex is present");
    /// assert_eq!(reachable.into_iter().collect::<Vec<_>>(), [NodeId::new(1)]);
    /// assert!(graph.reachable_set(NodeId::new(2)).is_some_and(|set| set.is_empty()));
    /// assert!(graph.reachable_set(NodeId::new(9)).is_none());
    /// # Ok::<(), spanwise_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn reachable_set(&self, vertex: NodeId) -> Option<BTreeSet<NodeId>> {
        let start = self.adjacency.get(&vertex)?;
        let mut visited = BTreeSet::from([vertex]);
        let mut stack: Vec<NodeId> = start.keys().copied().collect();
        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            if let Some(row) = self.adjacency.get(&node) {
                stack.extend(row.keys().copied().filter(|next| !visited.contains(next)));
            }
        }
        visited.remove(&vertex);
        Some(visited)
    }
}
