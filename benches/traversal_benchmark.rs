use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ungraph::UndirectedGraph;

fn chain(size: u32) -> UndirectedGraph<u32> {
    (0..size - 1).map(|i| (i, i + 1)).collect()
}

fn grid(side: u32) -> UndirectedGraph<u32> {
    let mut graph = UndirectedGraph::with_capacity((side * side) as usize);
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            if col + 1 < side {
                graph.add_edge(id, id + 1);
            }
            if row + 1 < side {
                graph.add_edge(id, id + side);
            }
        }
    }
    graph
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("grid_build_32x32", |b| {
        b.iter(|| black_box(grid(32)));
    });
}

fn bench_graph_bfs(c: &mut Criterion) {
    let size = 1000;
    let line = chain(size);
    let mesh = grid(32);

    c.bench_function("chain_bfs", |b| {
        b.iter(|| black_box(line.bfs(&0).map(|order| order.len())));
    });

    c.bench_function("grid_bfs", |b| {
        b.iter(|| black_box(mesh.bfs(&0).map(|order| order.len())));
    });
}

fn bench_graph_dfs(c: &mut Criterion) {
    let size = 1000;
    let line = chain(size);
    let mesh = grid(32);

    c.bench_function("chain_dfs", |b| {
        b.iter(|| black_box(line.dfs(&0).map(|order| order.len())));
    });

    c.bench_function("grid_dfs", |b| {
        b.iter(|| black_box(mesh.dfs(&0).map(|order| order.len())));
    });

    // Lazy form, stopping early.
    c.bench_function("grid_dfs_first_100", |b| {
        b.iter(|| {
            let visited = mesh
                .dfs_iter(&0)
                .map(|walk| walk.take(100).count())
                .unwrap_or_default();
            black_box(visited)
        });
    });
}

fn bench_edges(c: &mut Criterion) {
    let mesh = grid(32);
    c.bench_function("grid_edges", |b| {
        b.iter(|| black_box(mesh.edges().len()));
    });
}

criterion_group!(benches, bench_build, bench_graph_bfs, bench_graph_dfs, bench_edges);
criterion_main!(benches);
