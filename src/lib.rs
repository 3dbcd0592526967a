//! # `ungraph` - Undirected Graphs with Deterministic Traversals
//!
//! An undirected graph over arbitrary hashable, ordered labels, with
//! breadth-first and depth-first traversals whose output does not depend on the
//! order edges were inserted in.
//!
//! ## Guarantees
//!
//! - **Symmetry**: `v` is a neighbor of `u` iff `u` is a neighbor of `v`.
//! - **No parallel edges**: inserting an existing edge again is a no-op.
//! - **Deterministic traversal**: BFS expands neighbors in ascending order; DFS
//!   pushes them in descending order so they are popped in ascending order.
//! - **No mutation during traversal**: traversal iterators borrow the graph.
//!
//! ## Layout
//!
//! - [`graph`]: storage, queries, traversals
//! - [`render`]: the contract handed to a rendering collaborator, plus JSON and
//!   Graphviz writers
//! - [`report`]: human-readable formatting of dumps and traversal orders
//! - [`input`]: edge-list text parsing
//!
//! ## Example
//!
//! ```
//! use ungraph::UndirectedGraph;
//!
//! let graph: UndirectedGraph<&str> =
//!     [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")]
//!         .into_iter()
//!         .collect();
//!
//! assert_eq!(graph.bfs(&"A").unwrap(), ["A", "B", "C", "D", "E"]);
//! assert_eq!(graph.dfs(&"A").unwrap(), ["A", "B", "D", "C", "E"]);
//! assert!(graph.bfs(&"Z").unwrap_or_default().is_empty());
//! ```

pub mod graph;
pub mod input;
pub mod render;
pub mod report;

pub use graph::{Bfs, Dfs, Edge, GraphError, Node, UndirectedGraph};
pub use input::{parse_edge_list, read_edge_list, InputError};
pub use render::{render_graph, DotRenderer, JsonRenderer, RenderError, RenderScene, Renderer};
