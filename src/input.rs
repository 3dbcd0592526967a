//! Edge-list text input.
//!
//! ```text
//! # comment
//! A B     # edge A-B
//! C       # isolated node C
//! ```
//!
//! Labels are whitespace separated. Anything after `#` is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::graph::UndirectedGraph;

/// Errors produced while reading an edge list.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("line {line}: expected `NODE` or `NODE NEIGHBOR`, found {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("failed to read edge list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parses an edge list into a graph, inserting edges in line order.
pub fn parse_edge_list(text: &str) -> Result<UndirectedGraph<String>, InputError> {
    let mut graph = UndirectedGraph::new();

    for (idx, raw) in text.lines().enumerate() {
        let body = raw.split('#').next().unwrap_or_default();
        let mut labels = body.split_whitespace();

        match (labels.next(), labels.next(), labels.next()) {
            (None, _, _) => {}
            (Some(node), None, _) => {
                graph.add_node(node.to_owned());
            }
            (Some(node), Some(neighbor), None) => {
                graph.add_edge(node.to_owned(), neighbor.to_owned());
            }
            (Some(_), Some(_), Some(_)) => {
                return Err(InputError::MalformedLine {
                    line: idx + 1,
                    content: raw.to_owned(),
                });
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed edge list"
    );
    Ok(graph)
}

/// Reads and parses the edge list at `path`.
pub fn read_edge_list(path: impl AsRef<Path>) -> Result<UndirectedGraph<String>, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_edge_list(&text)
}
