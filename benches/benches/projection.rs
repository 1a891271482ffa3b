// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_ar_projection::{Projector, ViewState, WorldDirection, delta_angle};

fn directions(len: usize) -> Vec<WorldDirection> {
    (0..len)
        .map(|i| {
            let t = i as f64 / len as f64;
            WorldDirection::new(t * 720.0 - 360.0, t * 180.0 - 90.0)
        })
        .collect()
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection/project");
    let view = ViewState::new(37.0, 5.0, Size::new(1920.0, 1080.0), Size::new(66.0, 40.0));

    for len in [256usize, 4_096, 65_536] {
        let dirs = directions(len);
        group.throughput(Throughput::Elements(len as u64));

        // Building the projector once per frame is the intended use.
        group.bench_with_input(BenchmarkId::new("cached_projector", len), &dirs, |b, dirs| {
            b.iter(|| {
                let projector = Projector::new(&view);
                for &dir in dirs {
                    black_box(projector.project(dir));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("free_function", len), &dirs, |b, dirs| {
            b.iter(|| {
                for &dir in dirs {
                    black_box(understory_ar_projection::project(dir, &view));
                }
            });
        });
    }

    group.finish();
}

fn bench_delta_angle(c: &mut Criterion) {
    let dirs = directions(4_096);
    c.bench_function("projection/delta_angle", |b| {
        b.iter(|| {
            for dir in &dirs {
                black_box(delta_angle(37.0, dir.bearing));
            }
        });
    });
}

criterion_group!(benches, bench_project, bench_delta_angle);
criterion_main!(benches);
