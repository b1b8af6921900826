//! Pipeline graph built from node and edge records
//!
//! Adjacency map plus cycle detection. Everything here is scoped to a
//! single analysis call; nothing is shared across requests.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::pipeline::{Edge, Node};

/// Directed graph over node ids, borrowing from the request payload.
pub struct PipelineGraph<'a> {
    /// node id -> successor ids, in edge input order
    adjacency: FxHashMap<&'a str, Vec<&'a str>>,
    /// node ids in input order, fixing traversal start order
    node_order: Vec<&'a str>,
}

impl<'a> PipelineGraph<'a> {
    /// Build the adjacency map from node and edge records.
    ///
    /// Every node id gets an entry before any edge is appended, so duplicate
    /// node records collapse to a single key without losing neighbors. Edges
    /// whose `source` is not a known node id are dropped. Unknown targets
    /// are kept and traversed as leaves.
    pub fn build(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let mut adjacency: FxHashMap<&str, Vec<&str>> =
            FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());
        let mut node_order: Vec<&str> = Vec::with_capacity(nodes.len());

        for node in nodes {
            adjacency.entry(node.id.as_str()).or_default();
            node_order.push(node.id.as_str());
        }

        for edge in edges {
            if let Some(successors) = adjacency.get_mut(edge.source.as_str()) {
                successors.push(edge.target.as_str());
            }
        }

        Self {
            adjacency,
            node_order,
        }
    }

    /// Successors of a node. Ids without an adjacency entry (unknown edge
    /// targets) have none.
    #[inline]
    fn successors(&self, id: &str) -> &[&'a str] {
        self.adjacency
            .get(id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Check that the graph contains no directed cycle.
    ///
    /// Iterative white/gray/black DFS with an explicit frame stack.
    /// `on_path` is the gray set: a successor already on the active path is
    /// a back-edge and short-circuits the traversal. A successor that is
    /// only in `visited` (black) is re-convergence, not a cycle.
    pub fn is_acyclic(&self) -> bool {
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut on_path: FxHashSet<&str> = FxHashSet::default();
        // (node, index of the next successor to explore)
        let mut stack: Vec<(&str, usize)> = Vec::new();

        for &start in &self.node_order {
            if visited.contains(start) {
                continue;
            }
            visited.insert(start);
            on_path.insert(start);
            stack.push((start, 0));

            while let Some(frame) = stack.last_mut() {
                let (node, next) = *frame;
                match self.successors(node).get(next) {
                    Some(&succ) => {
                        frame.1 += 1;
                        if on_path.contains(succ) {
                            return false;
                        }
                        if visited.insert(succ) {
                            on_path.insert(succ);
                            stack.push((succ, 0));
                        }
                    }
                    None => {
                        on_path.remove(node);
                        stack.pop();
                    }
                }
            }
        }

        true
    }
}
