// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_ar_layer::{LineLayer, LineStyle, RecordingRenderer, grid, horizon_line};
use understory_ar_projection::ViewState;

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer/draw");
    let view = ViewState::new(37.0, 5.0, Size::new(1920.0, 1080.0), Size::new(66.0, 40.0));

    for spacing in [30.0, 10.0, 5.0] {
        let layer = LineLayer::new();
        let mut lines = grid(spacing, LineStyle::default());
        lines.push(horizon_line(LineStyle::default()));
        layer.set_lines(lines);

        group.bench_with_input(BenchmarkId::new("grid", spacing), &layer, |b, layer| {
            let mut renderer = RecordingRenderer::new();
            b.iter(|| {
                renderer.clear_events();
                layer.draw(&mut renderer, &view);
                black_box(renderer.events().len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
