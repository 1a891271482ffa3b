// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{BezPath, Line, Point, Rect};
use understory_ar_clip::{PolylineClipper, clip_segment};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);

/// A zig-zag that keeps leaving and re-entering the viewport.
fn zig_zag(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let x = (i % 64) as f64 * 40.0 - 200.0;
            let y = if i % 2 == 0 { -100.0 } else { 1200.0 };
            Point::new(x, y)
        })
        .collect()
}

/// A circle that stays inside the viewport.
fn inside(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64 / len as f64 * core::f64::consts::TAU;
            Point::new(960.0 + 400.0 * t.cos(), 540.0 + 400.0 * t.sin())
        })
        .collect()
}

fn bench_polyline(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip/polyline");

    for len in [256usize, 4_096] {
        group.throughput(Throughput::Elements(len as u64));
        for (name, pixels) in [("inside", inside(len)), ("crossing", zig_zag(len))] {
            group.bench_with_input(BenchmarkId::new(name, len), &pixels, |b, pixels| {
                b.iter_batched(
                    BezPath::new,
                    |mut path| {
                        let mut clipper = PolylineClipper::new(BOUNDS, Point::ZERO);
                        for &pixel in pixels {
                            clipper.push(pixel, &mut path);
                        }
                        black_box(path);
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_segment(c: &mut Criterion) {
    let pixels = zig_zag(1_024);
    c.bench_function("clip/segment", |b| {
        b.iter(|| {
            for pair in pixels.windows(2) {
                black_box(clip_segment(Line::new(pair[0], pair[1]), BOUNDS));
            }
        });
    });
}

criterion_group!(benches, bench_polyline, bench_segment);
criterion_main!(benches);
