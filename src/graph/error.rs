use std::fmt;

/// Errors reported by graph traversals.
///
/// None of these leave the graph modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The traversal start node is not a key of the graph.
    #[error("node {node} is not in the graph")]
    NodeNotFound {
        /// The requested node, rendered with `Debug`.
        node: String,
    },
}

impl GraphError {
    pub(crate) fn node_not_found<N: fmt::Debug>(node: &N) -> Self {
        Self::NodeNotFound {
            node: format!("{node:?}"),
        }
    }
}
