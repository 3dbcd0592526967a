//! Canonical undirected edges.

use serde::Serialize;

/// An unordered pair of nodes stored as `(min, max)`.
///
/// `Edge::new(u, v) == Edge::new(v, u)`, so a set of edges never holds both
/// orientations of the same connection.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge<N> {
    source: N,
    target: N,
}

impl<N: Ord> Edge<N> {
    /// Creates the canonical edge between `u` and `v`.
    pub fn new(u: N, v: N) -> Self {
        if u <= v {
            Self {
                source: u,
                target: v,
            }
        } else {
            Self {
                source: v,
                target: u,
            }
        }
    }

    /// Returns `true` if `node` is one of the endpoints.
    pub fn contains(&self, node: &N) -> bool {
        &self.source == node || &self.target == node
    }
}

impl<N> Edge<N> {
    /// The smaller endpoint.
    pub fn source(&self) -> &N {
        &self.source
    }

    /// The larger endpoint.
    pub fn target(&self) -> &N {
        &self.target
    }

    /// Both endpoints, smaller first.
    pub fn into_pair(self) -> (N, N) {
        (self.source, self.target)
    }
}

impl<N: Ord> From<(N, N)> for Edge<N> {
    fn from((u, v): (N, N)) -> Self {
        Self::new(u, v)
    }
}
