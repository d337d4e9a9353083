//! Spline evaluation throughput.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::{DQuat, DVec3};
use vista::spline;
use vista::ViewState;

fn knots(count: usize) -> Vec<ViewState> {
    (0..count)
        .map(|i| {
            let a = i as f64 * 0.3;
            ViewState::new()
                .with_orientation(DQuat::from_rotation_y(a))
                .with_position(DVec3::new(a.cos(), a.sin(), 1.0))
                .with_distance(1.0 + i as f64)
        })
        .collect()
}

fn erp_benchmark(c: &mut Criterion) {
    let states = knots(8);
    let _ = c.bench_function("erp_mid_segment", |b| {
        b.iter(|| black_box(spline::erp(black_box(&states), black_box(3.5))));
    });
}

fn sample_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for count in [4, 16, 64] {
        let states = knots(count);
        let _ = group.bench_function(format!("{count}_knots"), |b| {
            b.iter(|| black_box(spline::sample(&states, 0.05)));
        });
    }
    group.finish();
}

criterion_group!(benches, erp_benchmark, sample_benchmark);
criterion_main!(benches);
