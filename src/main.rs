use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use ungraph::report::{format_dump, format_path, section};
use ungraph::{
    read_edge_list, render_graph, DotRenderer, JsonRenderer, RenderScene, Renderer,
    UndirectedGraph,
};

const REFERENCE_EDGES: &[(&str, &str)] = &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")];

#[derive(Parser)]
#[command(name = "ungraph")]
#[command(about = "Dump an undirected graph and walk it breadth- and depth-first", long_about = None)]
struct Cli {
    /// Edge-list file (`NODE NEIGHBOR` per line); defaults to a built-in sample graph
    #[arg(long)]
    edges: Option<PathBuf>,

    /// Node to start both traversals from
    #[arg(long, default_value = "A")]
    start: String,

    /// Emit a render scene with the BFS order highlighted
    #[arg(long, value_enum)]
    render: Option<RenderFormat>,

    /// Title passed to the renderer
    #[arg(long, default_value = "Graph Structure")]
    title: String,

    /// Where to write the rendered scene (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RenderFormat {
    Json,
    Dot,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph = match &cli.edges {
        Some(path) => read_edge_list(path)
            .with_context(|| format!("Failed to load graph from {}", path.display()))?,
        None => reference_graph(),
    };
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    // A scene written to stdout must be the only thing there.
    let bfs_order = if cli.render.is_some() && cli.output.is_none() {
        write_report(&mut io::stderr().lock(), &graph, &cli.start)?
    } else {
        write_report(&mut io::stdout().lock(), &graph, &cli.start)?
    };

    if let Some(format) = cli.render {
        let scene = RenderScene::from_graph(&graph, cli.title.as_str()).with_highlight(bfs_order);
        emit_scene(format, cli.output.as_ref(), &scene)?;
    }

    Ok(())
}

fn reference_graph() -> UndirectedGraph<String> {
    REFERENCE_EDGES
        .iter()
        .map(|&(u, v)| (u.to_owned(), v.to_owned()))
        .collect()
}

/// Prints the dump and both traversals, returning the BFS order.
fn write_report<W: Write>(
    out: &mut W,
    graph: &UndirectedGraph<String>,
    start: &String,
) -> Result<Vec<String>> {
    writeln!(out, "{}", section("Graph structure:"))?;
    write!(out, "{}", format_dump(graph))?;

    // A missing start is reported by the traversal and shown as an empty order.
    writeln!(out, "\n{}", section(&format!("BFS from node '{start}':")))?;
    let bfs_order = graph.bfs(start).unwrap_or_default();
    writeln!(out, "Visit order: {}", format_path(&bfs_order))?;

    writeln!(out, "\n{}", section(&format!("DFS (iterative) from node '{start}':")))?;
    let dfs_order = graph.dfs(start).unwrap_or_default();
    writeln!(out, "Visit order: {}", format_path(&dfs_order))?;
    out.flush()?;

    Ok(bfs_order)
}

fn emit_scene(
    format: RenderFormat,
    output: Option<&PathBuf>,
    scene: &RenderScene<String>,
) -> Result<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout()),
    };

    let mut renderer: Box<dyn Renderer<String>> = match format {
        RenderFormat::Dot => Box::new(DotRenderer::new(writer)),
        RenderFormat::Json => Box::new(JsonRenderer::new(writer)),
    };

    render_graph(renderer.as_mut(), scene).context("Failed to render graph")?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}
