//! Benchmarks for tessellation construction over random point clouds.

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use voronoi::prelude::*;

fn bench_tessellation_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tessellation_creation");

    for &size in &[100_usize, 500, 1_000, 5_000] {
        let points = generate_random_points::<f64>(size, 1_000.0);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("voronoi_only", size), &points, |b, pts| {
            b.iter(|| {
                let tessellation =
                    Tessellation::<f64, (), ()>::from_points(black_box(pts)).unwrap();
                black_box(tessellation.number_of_edges())
            });
        });

        group.bench_with_input(
            BenchmarkId::new("with_triangles", size),
            &points,
            |b, pts| {
                let sites: Vec<Site<f64, ()>> =
                    pts.iter().map(|&p| Site::from_point(p)).collect();
                b.iter(|| {
                    let tessellation: Tessellation<f64, (), ()> =
                        Tessellation::with_triangles(black_box(&sites)).unwrap();
                    black_box(tessellation.triangles().len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tessellation_creation);
criterion_main!(benches);
