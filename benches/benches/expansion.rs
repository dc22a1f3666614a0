// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use rand::SeedableRng;
use rand::rngs::StdRng;
use starfield_world::{
    ClusterParams, Engine, MediaItem, PatternLibrary, SeedRings, World, WorldConfig, seed_rings,
};

fn items(n: usize) -> Vec<MediaItem> {
    (0..n)
        .map(|i| MediaItem::new(format!("v{i}"), format!("thumbs/{i}.jpg"), format!("Video {i}")))
        .collect()
}

fn bench_seed(c: &mut Criterion) {
    let source = items(500);
    let library = PatternLibrary::builtin();
    let params = ClusterParams::default();
    c.bench_function("seed_rings_default", |b| {
        b.iter_batched(
            || (World::default(), StdRng::seed_from_u64(7)),
            |(mut world, mut rng)| {
                seed_rings(
                    &mut world,
                    &library,
                    &params,
                    &SeedRings::default(),
                    &source,
                    &mut rng,
                )
                .ok();
                world
            },
            BatchSize::SmallInput,
        );
    });
}

/// Pans steadily to the right, ticking like a 60 Hz host, and builds a frame
/// each step.
fn bench_pan_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_session");
    for &steps in &[60_u64, 600] {
        group.bench_function(BenchmarkId::new("frames", steps), |b| {
            b.iter_batched(
                || {
                    let mut engine =
                        Engine::new(WorldConfig::default(), items(200), StdRng::seed_from_u64(3))
                            .ok()?;
                    engine.set_view_size(Size::new(1280.0, 720.0), 0);
                    Some(engine)
                },
                |engine| {
                    let Some(mut engine) = engine else {
                        return 0;
                    };
                    let mut drawn = 0;
                    for step in 0..steps {
                        let now = step * 16;
                        let x = step as f64 * 40.0;
                        engine.set_camera_center(Point::new(x, 0.0), now);
                        engine.tick(now);
                        drawn += black_box(engine.frame()).stars.len();
                    }
                    drawn
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_seed, bench_pan_session);
criterion_main!(benches);
