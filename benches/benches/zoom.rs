// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_zoom::{GestureEvent, ZoomController, ZoomViewConfig};

const FRAME_MS: u64 = 16;

fn laid_out(content: Size, screen: Size) -> ZoomController {
    let mut zoom = ZoomController::new(ZoomViewConfig::default()).unwrap();
    zoom.layout(content, screen).unwrap();
    zoom
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_zoom");
    group.sample_size(50);

    let content = Size::new(8000.0, 6000.0);
    let screen = Size::new(1920.0, 1080.0);

    for updates in [16_usize, 256] {
        group.bench_function(format!("pinch(updates={updates})"), |b| {
            b.iter_batched(
                || laid_out(content, screen),
                |mut zoom| {
                    zoom.handle(GestureEvent::ScaleBegin {
                        focus: Point::new(700.0, 400.0),
                    })
                    .unwrap();
                    for i in 0..updates {
                        let factor = if i % 2 == 0 { 1.05 } else { 0.97 };
                        black_box(zoom.handle(GestureEvent::ScaleUpdate { factor }).unwrap());
                    }
                    zoom.handle(GestureEvent::ScaleEnd).unwrap();
                    black_box(zoom);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("drag(updates={updates})"), |b| {
            b.iter_batched(
                || {
                    let mut zoom = laid_out(content, screen);
                    zoom.set_zoom(1.0, true).unwrap();
                    zoom
                },
                |mut zoom| {
                    for i in 0..updates {
                        let dx = if i % 3 == 0 { -7.0 } else { 5.0 };
                        black_box(
                            zoom.handle(GestureEvent::Drag {
                                distance: Vec2::new(dx, 3.0),
                            })
                            .unwrap(),
                        );
                    }
                    black_box(zoom);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("double_tap_animation", |b| {
        b.iter_batched(
            || laid_out(content, screen),
            |mut zoom| {
                zoom.handle(GestureEvent::DoubleTap {
                    position: Point::new(960.0, 540.0),
                })
                .unwrap();
                let mut now = 0;
                while zoom.tick(now).unwrap().active {
                    black_box(zoom.frame());
                    now += FRAME_MS;
                }
                black_box(zoom);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("fling_to_rest", |b| {
        b.iter_batched(
            || {
                let mut zoom = laid_out(content, screen);
                zoom.set_zoom(1.0, true).unwrap();
                zoom
            },
            |mut zoom| {
                zoom.handle(GestureEvent::Fling {
                    velocity: Vec2::new(-4000.0, 2500.0),
                })
                .unwrap();
                let mut now = 0;
                while zoom.tick(now).unwrap().active {
                    now += FRAME_MS;
                }
                black_box(zoom);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
