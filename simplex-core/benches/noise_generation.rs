#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glam::{DVec3, DVec4};
use simplex_core::{FractalNoise3, FractalNoise4, NoiseGenerator};
use simplex_utils::random::lehmer::LehmerRandom;
use std::hint::black_box;

/// Sample a `size x size` grid on the `z = 0.5` plane.
fn sample_grid_3d(noise: &FractalNoise3, size: u32) -> f64 {
    let mut acc = 0.0;
    for x in 0..size {
        for y in 0..size {
            acc += noise.evaluate(DVec3::new(f64::from(x) * 0.05, f64::from(y) * 0.05, 0.5));
        }
    }
    acc
}

// ── Raw kernels ─────────────────────────────────────────────────────────────

fn bench_single_sample(c: &mut Criterion) {
    let noise3 = FractalNoise3::new(&mut LehmerRandom::from_seed(0), 1, 0.5);
    let noise4 = FractalNoise4::new(&mut LehmerRandom::from_seed(0), 1, 0.5);

    c.bench_function("simplex_3d_single_octave", |b| {
        b.iter(|| black_box(noise3.evaluate(black_box(DVec3::new(1.3, -2.7, 0.4)))));
    });
    c.bench_function("simplex_4d_single_octave", |b| {
        b.iter(|| black_box(noise4.evaluate(black_box(DVec4::new(1.3, -2.7, 0.4, 3.1)))));
    });
}

// ── Octaves ─────────────────────────────────────────────────────────────────

fn bench_octave_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplex_3d_grid_64x64");
    for octaves in [1, 4, 8] {
        let noise = FractalNoise3::new(&mut LehmerRandom::from_seed(0), octaves, 0.5);
        group.bench_with_input(BenchmarkId::from_parameter(octaves), &noise, |b, noise| {
            b.iter(|| black_box(sample_grid_3d(noise, 64)));
        });
    }
    group.finish();
}

// ── Construction ────────────────────────────────────────────────────────────

fn bench_construction(c: &mut Criterion) {
    c.bench_function("generator_construction", |b| {
        b.iter(|| {
            let mut rng = LehmerRandom::from_seed(black_box(42));
            black_box(NoiseGenerator::new(4, &mut rng, Some(6), Some(0.5)))
        });
    });
}

criterion_group!(
    benches,
    bench_single_sample,
    bench_octave_grid,
    bench_construction,
);
criterion_main!(benches);
