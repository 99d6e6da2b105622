//! Criterion micro-benchmarks for graph construction and traversal.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use magnon_core::SiteId;
use magnon_lattice::GraphBuilder;
use magnon_test_utils::ring_graph;

/// Benchmark: build a 10K-site ring graph from scratch.
fn bench_build_ring_10k(c: &mut Criterion) {
    c.bench_function("build_ring_10k", |b| {
        b.iter(|| {
            let mut builder = GraphBuilder::new(10_000).unwrap();
            for i in 0..10_000u64 {
                builder
                    .add_symmetric_edge(SiteId(i), SiteId((i + 1) % 10_000), 1.0)
                    .unwrap();
            }
            black_box(builder.build());
        });
    });
}

/// Benchmark: traverse every neighbor slice of a 10K-site ring.
fn bench_traverse_ring_10k(c: &mut Criterion) {
    let graph = ring_graph(10_000, 1.0);

    c.bench_function("traverse_ring_10k", |b| {
        b.iter(|| {
            let mut total = 0.0f64;
            for i in 0..10_000u64 {
                for (_, coupling) in graph.neighbors_of(SiteId(i)) {
                    total += coupling;
                }
            }
            black_box(total);
        });
    });
}

criterion_group!(benches, bench_build_ring_10k, bench_traverse_ring_10k);
criterion_main!(benches);
