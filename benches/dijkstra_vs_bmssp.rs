use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use bmssp::algorithm::dijkstra::dijkstra;
use bmssp::algorithm::driver::{BmsspSssp, SsspOptions};
use bmssp::graph::generators::generate_random;
use bmssp::CsrGraph;

fn graph(n: usize, edge_factor: f64) -> CsrGraph {
    let mut rng = StdRng::seed_from_u64(42);
    generate_random(n, edge_factor, &mut rng)
}

fn bench_dijkstra(c: &mut Criterion) {
    let g = graph(2_000, 4.0);
    c.bench_function("dijkstra_2000v", |b| {
        b.iter(|| dijkstra(black_box(&g), black_box(0), black_box(false)))
    });
}

fn bench_bmssp(c: &mut Criterion) {
    let g = graph(2_000, 4.0);
    let opts = SsspOptions::new(0);
    c.bench_function("bmssp_2000v", |b| {
        b.iter(|| BmsspSssp::run_always(black_box(&g), black_box(&opts)))
    });
}

fn bench_bmssp_large(c: &mut Criterion) {
    let g = graph(50_000, 4.0);
    let opts = SsspOptions::new(0);
    c.bench_function("bmssp_50000v", |b| {
        b.iter(|| BmsspSssp::run(black_box(&g), black_box(&opts)))
    });
}

criterion_group!(benches, bench_dijkstra, bench_bmssp, bench_bmssp_large);
criterion_main!(benches);
