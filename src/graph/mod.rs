//! Undirected graph storage and traversals.
//!
//! - `undirected`: the adjacency-list graph and its BFS/DFS iterators
//! - `edge`: canonical unordered edge pairs used by the query surface
//! - `error`: traversal errors

use std::fmt;
use std::hash::Hash;

pub mod edge;
pub mod error;
pub mod undirected;

pub use edge::Edge;
pub use error::GraphError;
pub use undirected::{Bfs, Dfs, UndirectedGraph};

/// A node label.
///
/// Any type with equality, hashing and a total order qualifies. `Clone` lets
/// traversals hand back owned sequences and `Debug` names nodes in errors.
pub trait Node: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Node for T {}
