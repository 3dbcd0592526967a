//! An undirected adjacency-list graph keyed by arbitrary node labels.
//!
//! Storage is an insertion-ordered map from each node to the sequence of its
//! neighbors. Every edge is recorded on both endpoints, so the map is always
//! symmetric: `v` is in `adjacency[u]` iff `u` is in `adjacency[v]`.
//!
//! Memory layout:
//! - `adjacency`: `IndexMap<N, Vec<N>>`, keys in first-seen order, neighbors in
//!   `add_edge` order (never sorted in storage)
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` | \(O(\deg u + \deg v)\) | Duplicate check is a linear scan |
//! | `neighbors` | \(O(1)\) | Borrowed slice in storage order |
//! | `has_edge` | \(O(\deg u)\) | Linear scan of neighbors |
//! | `edges` | \(O(m \log m)\) | Canonicalized into a `BTreeSet` |
//! | `bfs` / `dfs` | \(O(n + m \log d)\) | Neighbors sorted per expansion |

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::graph::{Edge, Node};

mod traversal;

pub use traversal::{Bfs, Dfs};


/// An undirected graph without weights or parallel edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndirectedGraph<N: Node> {
    adjacency: IndexMap<N, Vec<N>>,
}

impl<N: Node> Default for UndirectedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> UndirectedGraph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }

    /// Creates an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(nodes),
        }
    }

    /// Builds a graph by inserting each pair in order, as if by [`add_edge`].
    ///
    /// [`add_edge`]: UndirectedGraph::add_edge
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Registers `node` without connecting it. Returns `true` if it was new.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Connects `node` and `neighbor`.
    ///
    /// Both endpoints are registered even if the edge already exists. Inserting
    /// an existing edge again changes nothing. A self-loop registers the node
    /// but records no adjacency.
    pub fn add_edge(&mut self, node: N, neighbor: N) {
        if node == neighbor {
            debug!(node = ?node, "ignoring self-loop");
            self.add_node(node);
            return;
        }

        trace!(node = ?node, neighbor = ?neighbor, "add_edge");

        let forward = self.adjacency.entry(node.clone()).or_default();
        if !forward.contains(&neighbor) {
            forward.push(neighbor.clone());
        }

        let backward = self.adjacency.entry(neighbor).or_default();
        if !backward.contains(&node) {
            backward.push(node);
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        // Each edge is stored once per endpoint.
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` if `node` is a key of the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Returns `true` if `u` and `v` are adjacent. Symmetric in its arguments.
    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.contains(v))
    }

    /// Neighbors of `node` in storage order, or `None` for an unknown node.
    pub fn neighbors(&self, node: &N) -> Option<&[N]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    /// Degree of `node`, or `None` for an unknown node.
    pub fn degree(&self, node: &N) -> Option<usize> {
        self.adjacency.get(node).map(Vec::len)
    }

    /// All nodes, in the order they were first seen.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Every undirected edge exactly once, in canonical form.
    pub fn edges(&self) -> BTreeSet<Edge<N>> {
        self.adjacency
            .iter()
            .flat_map(|(node, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |neighbor| node < *neighbor)
                    .map(move |neighbor| Edge::new(node.clone(), neighbor.clone()))
            })
            .collect()
    }

    /// Walks the adjacency structure: each node with its neighbors in storage order.
    ///
    /// The iterator reads the graph as it is when called; call again to restart.
    pub fn dump(&self) -> impl ExactSizeIterator<Item = (&N, &[N])> + '_ {
        self.adjacency
            .iter()
            .map(|(node, neighbors)| (node, neighbors.as_slice()))
    }

    /// Partitions the nodes into connected components.
    ///
    /// Components are listed by their first node in insertion order and each is
    /// given in BFS order from that node.
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        let mut assigned = std::collections::HashSet::with_capacity(self.node_count());
        let mut components = Vec::new();

        for root in self.adjacency.keys() {
            if assigned.contains(root) {
                continue;
            }
            let component: Vec<N> = Bfs::new(self, root).cloned().collect();
            for node in &component {
                assigned.insert(node.clone());
            }
            components.push(component);
        }

        debug!(components = components.len(), "connected_components");
        components
    }

    pub(crate) fn sorted_neighbors(&self, node: &N) -> Vec<&N> {
        let mut neighbors: Vec<&N> = self
            .adjacency
            .get(node)
            .map(|ns| ns.iter().collect())
            .unwrap_or_default();
        neighbors.sort_unstable();
        neighbors
    }

    pub(crate) fn key_of(&self, node: &N) -> Option<&N> {
        self.adjacency.get_key_value(node).map(|(key, _)| key)
    }
}

impl<N: Node> FromIterator<(N, N)> for UndirectedGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<N: Node> Extend<(N, N)> for UndirectedGraph<N> {
    fn extend<I: IntoIterator<Item = (N, N)>>(&mut self, iter: I) {
        for (u, v) in iter {
            self.add_edge(u, v);
        }
    }
}

impl<N: Node + fmt::Display> fmt::Display for UndirectedGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, neighbors) in self.dump() {
            write!(f, "{node} -> [")?;
            for (i, neighbor) in neighbors.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{neighbor}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
