use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use wgraph::algo;
use wgraph::graph::GraphStore;

/// Square grid with weights that vary by position
fn grid(side: usize) -> GraphStore {
    let mut store = GraphStore::undirected();
    let label = |r: usize, c: usize| format!("r{:04}c{:04}", r, c);
    for r in 0..side {
        for c in 0..side {
            store.add_node(label(r, c));
        }
    }
    for r in 0..side {
        for c in 0..side {
            let w = ((r * 31 + c * 17) % 9 + 1) as f64;
            if c + 1 < side {
                store.add_edge(&label(r, c), &label(r, c + 1), w).unwrap();
            }
            if r + 1 < side {
                store.add_edge(&label(r, c), &label(r + 1, c), w + 0.5).unwrap();
            }
        }
    }
    store
}

/// Benchmark store mutation throughput
fn bench_store_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_building");

    for side in [10, 30, 60].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, &side| {
            b.iter(|| criterion::black_box(grid(side)));
        });
    }
    group.finish();
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");

    for side in [10, 30].iter() {
        let store = grid(*side);
        group.bench_with_input(BenchmarkId::new("dijkstra", side), side, |b, _| {
            b.iter(|| algo::shortest_paths_dijkstra_to_all(&store, "r0000c0000").unwrap());
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", side), side, |b, _| {
            b.iter(|| algo::shortest_paths_bellman_ford_to_all(&store, "r0000c0000").unwrap());
        });
    }
    group.finish();
}

fn bench_spanning_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree");

    for side in [10, 30, 60].iter() {
        let store = grid(*side);
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| algo::minimum_spanning_tree(&store).unwrap());
        });
    }
    group.finish();
}

fn bench_connectivity(c: &mut Criterion) {
    let mut group = c.benchmark_group("connectivity");

    for side in [10, 30, 60].iter() {
        let store = grid(*side);
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| criterion::black_box(algo::is_connected(&store)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_store_building,
    bench_shortest_paths,
    bench_spanning_tree,
    bench_connectivity
);
criterion_main!(benches);
