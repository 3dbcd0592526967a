//! The hand-off to a rendering collaborator.
//!
//! The graph does not draw itself. It produces a [`RenderScene`] (nodes,
//! canonical edges, a highlight set, a title) and a [`Renderer`] turns that into
//! something viewable. Layout is always the renderer's concern; the writers here
//! emit text formats that leave layout to downstream tools.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::io::{self, Write};

use serde::Serialize;
use tracing::{debug, info};

use crate::graph::{Edge, Node, UndirectedGraph};

const HIGHLIGHT_COLOR: &str = "lightcoral";
const NODE_COLOR: &str = "skyblue";
const EDGE_COLOR: &str = "gray";

/// Errors produced while writing a rendered scene.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write rendered graph")]
    Io(#[from] io::Error),
    #[error("failed to encode scene as JSON")]
    Json(#[from] serde_json::Error),
}

/// Everything a renderer needs to draw a graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderScene<N> {
    pub title: String,
    /// Nodes in graph insertion order.
    pub nodes: Vec<N>,
    /// Each undirected edge once, in canonical order.
    pub edges: Vec<Edge<N>>,
    /// Nodes to draw distinguished from the rest. Always a subset of `nodes`.
    pub highlight: BTreeSet<N>,
}

impl<N: Node> RenderScene<N> {
    /// Snapshots `graph` with nothing highlighted.
    pub fn from_graph(graph: &UndirectedGraph<N>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: graph.nodes().cloned().collect(),
            edges: graph.edges().into_iter().collect(),
            highlight: BTreeSet::new(),
        }
    }

    /// Marks `nodes` as highlighted. Labels that are not in the scene are dropped.
    pub fn with_highlight<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let known: HashSet<&N> = self.nodes.iter().collect();
        let highlight: BTreeSet<N> = nodes.into_iter().filter(|n| known.contains(n)).collect();
        self.highlight = highlight;
        self
    }

    pub fn is_highlighted(&self, node: &N) -> bool {
        self.highlight.contains(node)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A rendering collaborator.
pub trait Renderer<N> {
    /// Draws or emits `scene`.
    fn render(&mut self, scene: &RenderScene<N>) -> Result<(), RenderError>;
}

/// Hands `scene` to `renderer` unless there is nothing to draw.
///
/// Returns `Ok(false)` for a scene without nodes.
pub fn render_graph<N, R>(renderer: &mut R, scene: &RenderScene<N>) -> Result<bool, RenderError>
where
    R: Renderer<N> + ?Sized,
{
    if scene.nodes.is_empty() {
        info!(title = %scene.title, "graph is empty, nothing to draw");
        return Ok(false);
    }
    debug!(
        title = %scene.title,
        nodes = scene.nodes.len(),
        edges = scene.edges.len(),
        highlighted = scene.highlight.len(),
        "rendering scene"
    );
    renderer.render(scene)?;
    Ok(true)
}

/// Writes the scene as pretty-printed JSON.
pub struct JsonRenderer<W> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<N: Serialize, W: Write> Renderer<N> for JsonRenderer<W> {
    fn render(&mut self, scene: &RenderScene<N>) -> Result<(), RenderError> {
        serde_json::to_writer_pretty(&mut self.writer, scene)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the scene as a Graphviz `graph` document.
///
/// Highlighted nodes are filled `lightcoral`, the rest `skyblue`.
pub struct DotRenderer<W> {
    writer: W,
}

impl<W: Write> DotRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<N: Ord + fmt::Display, W: Write> Renderer<N> for DotRenderer<W> {
    fn render(&mut self, scene: &RenderScene<N>) -> Result<(), RenderError> {
        let w = &mut self.writer;
        writeln!(w, "graph {{")?;
        writeln!(w, "  label={};", quote(&scene.title))?;
        writeln!(w, "  labelloc=\"t\";")?;
        writeln!(w, "  node [style=filled, fontsize=12];")?;
        writeln!(w, "  edge [color={EDGE_COLOR}];")?;

        for node in &scene.nodes {
            let color = if scene.highlight.contains(node) {
                HIGHLIGHT_COLOR
            } else {
                NODE_COLOR
            };
            writeln!(
                w,
                "  {} [fillcolor={color}];",
                quote(&node.to_string())
            )?;
        }

        for edge in &scene.edges {
            writeln!(
                w,
                "  {} -- {};",
                quote(&edge.source().to_string()),
                quote(&edge.target().to_string())
            )?;
        }

        writeln!(w, "}}")?;
        w.flush()?;
        Ok(())
    }
}

fn quote(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 2);
    out.push('"');
    for c in label.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
