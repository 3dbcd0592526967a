//! Human-readable formatting of graph dumps and traversal orders.
//!
//! Traversals return data only; everything that ends up on a terminal goes
//! through here.

use std::fmt;

use crate::graph::{Node, UndirectedGraph};

const BANNER_WIDTH: usize = 50;

/// One `node -> [neighbors]` line per node, in dump order.
pub fn format_dump<N: Node + fmt::Display>(graph: &UndirectedGraph<N>) -> String {
    graph.to_string()
}

/// Joins a visitation order with ` -> `.
pub fn format_path<N: fmt::Display>(order: &[N]) -> String {
    order
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// A titled banner block.
pub fn section(title: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{title}\n{rule}")
}
