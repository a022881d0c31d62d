// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use understory_motion::{FlingBounds, FlingPhysics, FlingTrajectory, SplineFlingPhysics};

fn bench_fling(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_motion");
    group.sample_size(50);

    let physics = SplineFlingPhysics::default();
    let bounds = FlingBounds::new(Point::ZERO, Point::new(10_000.0, 10_000.0));

    group.bench_function("spline_fling_build", |b| {
        b.iter(|| {
            black_box(physics.fling(
                black_box(Point::new(5_000.0, 5_000.0)),
                black_box(Vec2::new(3_200.0, -1_800.0)),
                bounds,
            ))
        });
    });

    let fling = physics.fling(Point::new(5_000.0, 5_000.0), Vec2::new(3_200.0, -1_800.0), bounds);
    group.bench_function("spline_sample_per_frame", |b| {
        b.iter(|| {
            let mut t = 0;
            while !fling.is_finished_at(t) {
                black_box(fling.position_at(t));
                t += 16;
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fling);
criterion_main!(benches);
