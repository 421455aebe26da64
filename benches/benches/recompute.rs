// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_anchor_transform`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_anchor_transform::{
    MatrixMode, PreviousDimensions, TransformSession, TransformState, recompute,
};

fn sample_state(mode: MatrixMode, lock: bool) -> TransformState {
    TransformState {
        size: Size::new(180.0, 120.0),
        translate: Vec2::new(12.0, -8.0),
        rotate_deg: 37.0,
        scale: Vec2::new(1.25, -0.75),
        anchor: Point::new(60.0, 40.0),
        mode,
        lock_anchor_on_resize: lock,
        ..TransformState::default()
    }
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("anchor_transform/recompute");
    let previous = PreviousDimensions::new(160.0, 100.0);

    for (name, mode, lock) in [
        ("2d", MatrixMode::TwoD, false),
        ("2d_locked", MatrixMode::TwoD, true),
        ("3d_locked", MatrixMode::ThreeD, true),
    ] {
        let state = sample_state(mode, lock);
        group.bench_with_input(BenchmarkId::new("pass", name), &state, |b, state| {
            b.iter(|| black_box(recompute(black_box(state), previous)));
        });
        group.bench_with_input(BenchmarkId::new("pass_and_css", name), &state, |b, state| {
            b.iter(|| {
                let out = recompute(black_box(state), previous);
                black_box((out.matrix.to_string(), out.trace.lines()))
            });
        });
    }

    group.finish();
}

fn bench_session_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("anchor_transform/session");

    // A resize drag: one pass per intermediate size, in order.
    for steps in [16usize, 256] {
        group.bench_with_input(BenchmarkId::new("resize_drag", steps), &steps, |b, &steps| {
            b.iter_batched(
                || TransformSession::new(sample_state(MatrixMode::TwoD, true)),
                |mut session| {
                    for i in 0..steps {
                        let w = 180.0 + (i % 64) as f64;
                        session.set_size(Size::new(w, 120.0));
                    }
                    black_box(session.state().translate);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recompute, bench_session_drag);
criterion_main!(benches);
