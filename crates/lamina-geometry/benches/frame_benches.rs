//! Benchmarks for frame computation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use lamina_geometry::{compute_frame, compute_frame_with, ViewTransform};

fn bench_compute_frame(c: &mut Criterion) {
    c.bench_function("compute_frame", |b| {
        b.iter(|| {
            compute_frame(
                black_box(Vec2::new(150.0, 150.0)),
                black_box(Vec2::new(150.0, 150.0)),
                black_box(Vec2::splat(0.5)),
                black_box(1.3),
                black_box(0.7),
            )
        })
    });
}

fn bench_compute_frame_with_matrix(c: &mut Criterion) {
    let m = ViewTransform::new(1.3, 0.7).to_matrix();
    c.bench_function("compute_frame_with_matrix", |b| {
        b.iter(|| {
            compute_frame_with(
                black_box(Vec2::new(150.0, 150.0)),
                black_box(Vec2::new(150.0, 150.0)),
                black_box(Vec2::splat(0.5)),
                black_box(m),
            )
        })
    });
}

fn bench_compute_frame_sweep(c: &mut Criterion) {
    c.bench_function("compute_frame_sweep_360", |b| {
        b.iter(|| {
            let mut acc = Vec2::ZERO;
            for deg in 0..360 {
                let frame = compute_frame(
                    Vec2::new(150.0, 150.0),
                    Vec2::new(150.0, 150.0),
                    Vec2::splat(0.5),
                    1.0,
                    (deg as f32).to_radians(),
                );
                acc += frame.size;
            }
            black_box(acc)
        })
    });
}

criterion_group!(
    benches,
    bench_compute_frame,
    bench_compute_frame_with_matrix,
    bench_compute_frame_sweep
);
criterion_main!(benches);
