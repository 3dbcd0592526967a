//! Deterministic BFS and DFS over an [`UndirectedGraph`].
//!
//! Both traversals expand neighbors in ascending node order, independent of
//! the order edges were inserted in. The iterators hold a shared borrow of the
//! graph, so the graph cannot change underneath a traversal.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace, warn};

use crate::graph::{GraphError, Node, UndirectedGraph};

/// An iterator for Breadth-First Search (BFS).
///
/// Yields nodes in visitation order. Nodes are marked visited when enqueued,
/// so no node is ever queued twice.
pub struct Bfs<'a, N: Node> {
    graph: &'a UndirectedGraph<N>,
    visited: HashSet<&'a N>,
    queue: VecDeque<&'a N>,
}

impl<'a, N: Node> Bfs<'a, N> {
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// An unknown `start` produces an empty traversal; use
    /// [`UndirectedGraph::bfs_iter`] to have that reported as an error.
    pub fn new(graph: &'a UndirectedGraph<N>, start: &N) -> Self {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        if let Some(start) = graph.key_of(start) {
            visited.insert(start);
            queue.push_back(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'a, N: Node> Iterator for Bfs<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        trace!(node = ?u, "bfs visit");

        for v in self.graph.sorted_neighbors(u) {
            if self.visited.insert(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

/// An iterator for Depth-First Search (DFS).
///
/// Nodes are marked visited when popped. A node can sit on the stack more than
/// once; stale copies are skipped. Neighbors are pushed in descending order so
/// they come off the stack in ascending order.
pub struct Dfs<'a, N: Node> {
    graph: &'a UndirectedGraph<N>,
    visited: HashSet<&'a N>,
    stack: Vec<&'a N>,
}

impl<'a, N: Node> Dfs<'a, N> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// An unknown `start` produces an empty traversal; use
    /// [`UndirectedGraph::dfs_iter`] to have that reported as an error.
    pub fn new(graph: &'a UndirectedGraph<N>, start: &N) -> Self {
        let stack = graph.key_of(start).into_iter().collect();

        Self {
            graph,
            visited: HashSet::new(),
            stack,
        }
    }
}

impl<'a, N: Node> Iterator for Dfs<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.stack.pop()?;
            if !self.visited.insert(u) {
                continue;
            }
            trace!(node = ?u, "dfs visit");

            for v in self.graph.sorted_neighbors(u).into_iter().rev() {
                if !self.visited.contains(v) {
                    self.stack.push(v);
                }
            }

            return Some(u);
        }
    }
}

impl<N: Node> UndirectedGraph<N> {
    /// Lazy breadth-first traversal from `start`.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `start` is not in the graph.
    pub fn bfs_iter(&self, start: &N) -> Result<Bfs<'_, N>, GraphError> {
        self.require(start)?;
        Ok(Bfs::new(self, start))
    }

    /// Lazy depth-first traversal from `start`.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `start` is not in the graph.
    pub fn dfs_iter(&self, start: &N) -> Result<Dfs<'_, N>, GraphError> {
        self.require(start)?;
        Ok(Dfs::new(self, start))
    }

    /// Breadth-first visitation order of the component containing `start`.
    ///
    /// Neighbors are expanded in ascending order, so the result does not depend
    /// on edge insertion order. Callers that treat a missing start as an empty
    /// traversal can use `unwrap_or_default()`.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `start` is not in the graph.
    pub fn bfs(&self, start: &N) -> Result<Vec<N>, GraphError> {
        let order: Vec<N> = self.bfs_iter(start)?.cloned().collect();
        debug!(start = ?start, visited = order.len(), "bfs complete");
        Ok(order)
    }

    /// Depth-first (pop order) visitation of the component containing `start`.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `start` is not in the graph.
    pub fn dfs(&self, start: &N) -> Result<Vec<N>, GraphError> {
        let order: Vec<N> = self.dfs_iter(start)?.cloned().collect();
        debug!(start = ?start, visited = order.len(), "dfs complete");
        Ok(order)
    }

    fn require(&self, start: &N) -> Result<(), GraphError> {
        if self.contains_node(start) {
            Ok(())
        } else {
            warn!(node = ?start, "traversal start is not in the graph");
            Err(GraphError::node_not_found(start))
        }
    }
}
