//! Criterion benchmarks for the sampling estimators and lattice generators.
//! Focus sizes: sample density in {50, 100, 200}; radii in {50, 95, 200}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use uvcov::network::{
    estimate_area_coverage_fraction, estimate_area_coverage_fraction_mc, grid_network,
    minimum_node_grid,
};

fn bench_estimators(c: &mut Criterion) {
    let mut group = c.benchmark_group("coverage_fraction");
    let net = grid_network(1000.0, 1000.0, 95.0).expect("grid");
    for &density in &[50usize, 100, 200] {
        group.bench_with_input(BenchmarkId::new("grid", density), &density, |b, &d| {
            b.iter(|| estimate_area_coverage_fraction(&net.nodes, &net.bounds, d).unwrap())
        });
        group.bench_with_input(
            BenchmarkId::new("monte_carlo", density * density),
            &density,
            |b, &d| {
                b.iter(|| {
                    estimate_area_coverage_fraction_mc(&net.nodes, &net.bounds, d * d, 43).unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("deploy");
    for &l in &[50.0f64, 95.0, 200.0] {
        group.bench_with_input(BenchmarkId::new("grid_network", l), &l, |b, &l| {
            b.iter_batched(
                || (5000.0, 5000.0),
                |(w, h)| {
                    let _net = grid_network(w, h, l).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("minimum_node_grid", l), &l, |b, &l| {
            b.iter(|| minimum_node_grid(2.5e7, l).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_estimators, bench_generators);
criterion_main!(benches);
