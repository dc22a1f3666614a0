// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Size};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use starfield_index::GridIndex;
use starfield_view::{Camera, filter};

/// Points grouped in constellation‑sized clumps spread over a square world of
/// edge `extent` centered on the origin.
fn gen_clustered_points(n_clusters: usize, per_cluster: usize, extent: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = (rng.random::<f64>() - 0.5) * extent;
        let cy = (rng.random::<f64>() - 0.5) * extent;
        for _ in 0..per_cluster {
            let dx = (rng.random::<f64>() - 0.5) * 1200.0;
            let dy = (rng.random::<f64>() - 0.5) * 1200.0;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn build_grid(points: &[Point], cell: f64) -> GridIndex<u32> {
    let mut grid = GridIndex::new(cell);
    for (i, p) in points.iter().enumerate() {
        grid.insert(i as u32, *p);
    }
    grid
}

/// The buffered visible rect of a 1280 × 720 view at `zoom`.
fn view_rect(zoom: f64) -> Rect {
    let mut camera = Camera::new();
    camera.set_zoom(zoom);
    camera.visible_rect(Size::new(1280.0, 720.0), 1000.0)
}

fn bench_query_by_world_size(c: &mut Criterion) {
    let rect = view_rect(1.0);
    let mut group = c.benchmark_group("cull_by_world_size");
    for &clusters in &[100_usize, 1_000, 10_000] {
        let extent = (clusters as f64).sqrt() * 2000.0;
        let points = gen_clustered_points(clusters, 8, extent);
        let grid = build_grid(&points, 512.0);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(BenchmarkId::new("Linear", points.len()), |b| {
            b.iter(|| black_box(filter(&points, black_box(rect)).len()));
        });
        group.bench_function(BenchmarkId::new("Grid(512.)", points.len()), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                grid.visit_rect(black_box(rect), |_, _| hits += 1);
                black_box(hits)
            });
        });
    }
    group.finish();
}

fn bench_query_by_zoom(c: &mut Criterion) {
    let points = gen_clustered_points(2_000, 8, 90_000.0);
    let grid = build_grid(&points, 512.0);
    let mut group = c.benchmark_group("cull_by_zoom");
    for &zoom in &[0.1_f64, 0.5, 1.0, 4.0] {
        let rect = view_rect(zoom);
        group.bench_function(BenchmarkId::new("Linear", zoom), |b| {
            b.iter(|| black_box(filter(&points, black_box(rect)).len()));
        });
        group.bench_function(BenchmarkId::new("Grid(512.)", zoom), |b| {
            b.iter(|| black_box(grid.query_rect(black_box(rect)).len()));
        });
    }
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_insert");
    for &cell in &[128.0_f64, 512.0, 2048.0] {
        let points = gen_clustered_points(1_000, 8, 60_000.0);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(BenchmarkId::new("Grid", cell), |b| {
            b.iter_batched(
                || GridIndex::<u32>::new(cell),
                |mut grid| {
                    for (i, p) in points.iter().enumerate() {
                        grid.insert(i as u32, *p);
                    }
                    grid
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_query_by_world_size, bench_query_by_zoom, bench_insert);
criterion_main!(benches);
