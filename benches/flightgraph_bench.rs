// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Benchmarks for graph construction and queries

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flightgraph::types::{Edge, Vertex};
use flightgraph::RouteGraph;

/// Ring of `size` airports with a few deterministic shortcuts per airport
fn make_graph(size: usize) -> RouteGraph {
    let vertices: Vec<Vertex> = (0..size).map(|i| Vertex::new(format!("AP{i}"))).collect();
    let mut edges = Vec::new();
    for i in 0..size {
        for step in [1, 7, 31] {
            let j = (i + step) % size;
            if i != j {
                let weight = ((i * 37 + step * 11) % 500 + 50) as i64;
                edges.push(Edge::new(vertices[i].clone(), vertices[j].clone(), weight));
            }
        }
    }
    RouteGraph::new(vertices, edges).unwrap()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [100, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("build", size), size, |b, &size| {
            b.iter(|| black_box(make_graph(size)));
        });
    }

    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for size in [100, 500, 1000].iter() {
        let graph = make_graph(*size);
        let from = Vertex::new("AP0");
        let to = Vertex::new(format!("AP{}", size / 2));

        group.bench_with_input(BenchmarkId::new("dijkstra", size), size, |b, _| {
            b.iter(|| black_box(graph.shortest_path(&from, &to).unwrap()));
        });
    }

    group.finish();
}

fn bench_spanning_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree");

    for size in [100, 500, 1000].iter() {
        let graph = make_graph(*size);

        group.bench_with_input(BenchmarkId::new("prim", size), size, |b, _| {
            b.iter(|| black_box(graph.minimum_spanning_tree()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_shortest_path,
    bench_spanning_tree
);
criterion_main!(benches);
