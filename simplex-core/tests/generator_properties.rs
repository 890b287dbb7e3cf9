//! Behavioural tests for the public generator API.
//!
//! Reference values were computed once from the algorithm with an identity
//! permutation table (`[0, 1, .., 255]`).

use std::thread;

use glam::{DVec3, DVec4};
use simplex_core::{
    FractalNoise3, FractalNoise4, NoiseGenerator, NoiseSettings, RandomSource, SharedFractalNoise,
};
use simplex_utils::random::lehmer::LehmerRandom;

/// Produces `0, 1/256, 2/256, ..` cyclically, giving an identity permutation table.
fn counting_source() -> impl FnMut() -> f64 {
    let mut n = 0u32;
    move || {
        let v = f64::from(n) / 256.0;
        n = (n + 1) % 256;
        v
    }
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn identity_table_reference_values_3d() {
    let mut source = counting_source();
    let generator = NoiseGenerator::new(3, &mut source, None, None).expect("3D is supported");

    for i in 0..256 {
        assert_eq!(generator.noise().permutation().get(i), i);
    }

    let single = [
        ([0.0, 0.0, 0.0], 0.5),
        ([0.5, 0.25, 0.125], 0.703_557_618_732_216_9),
        ([1.3, -2.7, 0.4], 0.5),
        ([10.1, 20.2, -5.5], 0.728_372_345_679_011_2),
    ];
    for (point, expected) in single {
        let v = generator.evaluate(&point).expect("3D point");
        assert_close(v, expected, &format!("{point:?}, 1 octave"));
    }

    let mut generator = generator;
    generator.configure(Some(4), Some(0.5));
    let fractal = [
        ([0.0, 0.0, 0.0], 0.5),
        ([0.5, 0.25, 0.125], 0.512_074_608_377_004),
        ([1.3, -2.7, 0.4], 0.448_074_749_998_353_84),
        ([10.1, 20.2, -5.5], 0.600_848_230_452_674_7),
    ];
    for (point, expected) in fractal {
        let v = generator.evaluate(&point).expect("3D point");
        assert_close(v, expected, &format!("{point:?}, 4 octaves"));
    }
}

#[test]
fn identity_table_reference_values_4d() {
    let mut source = counting_source();
    let mut generator = NoiseGenerator::new(4, &mut source, None, None).expect("4D is supported");

    let single = [
        ([0.0, 0.0, 0.0, 0.0], 0.5),
        ([0.5, 0.25, 0.125, 0.75], 0.544_460_680_028_809_8),
        ([1.3, -2.7, 0.4, 3.1], 0.878_617_289_800_317_7),
    ];
    for (point, expected) in single {
        let v = generator.evaluate(&point).expect("4D point");
        assert_close(v, expected, &format!("{point:?}, 1 octave"));
    }

    generator.configure(Some(3), None);
    let fractal = [
        ([0.5, 0.25, 0.125, 0.75], 0.514_069_547_166_698_6),
        ([1.3, -2.7, 0.4, 3.1], 0.624_731_750_064_731_1),
    ];
    for (point, expected) in fractal {
        let v = generator.evaluate(&point).expect("4D point");
        assert_close(v, expected, &format!("{point:?}, 3 octaves"));
    }
}

#[test]
fn seeded_reference_values() {
    let settings = NoiseSettings {
        seed: 12_345,
        ..NoiseSettings::default()
    };
    let generator = settings.build().expect("valid settings");
    let v = generator.evaluate(&[0.5, 0.25, 0.125]).expect("3D point");
    assert_close(v, 0.531_522_059_109_377_8, "seeded 3D");

    let generator = NoiseSettings {
        dimension: 4,
        ..settings
    }
    .build()
    .expect("valid settings");
    let v = generator.evaluate(&[0.5, 0.25, 0.125, 0.75]).expect("4D point");
    assert_close(v, 0.594_187_300_154_076_5, "seeded 4D");
}

#[test]
fn output_always_in_unit_range() {
    let mut coords = LehmerRandom::from_seed(2024);
    for (octaves, persistence) in [(1, 0.5), (3, 0.5), (6, 0.8), (12, 1.0)] {
        let noise3 = FractalNoise3::new(&mut LehmerRandom::from_seed(1), octaves, persistence);
        let noise4 = FractalNoise4::new(&mut LehmerRandom::from_seed(1), octaves, persistence);
        for _ in 0..2_000 {
            let mut c = || coords.next_f64().mul_add(400.0, -200.0);
            let p3 = DVec3::new(c(), c(), c());
            let p4 = DVec4::new(c(), c(), c(), c());
            let v3 = noise3.evaluate(p3);
            let v4 = noise4.evaluate(p4);
            assert!((0.0..=1.0).contains(&v3), "{v3} at {p3}");
            assert!((0.0..=1.0).contains(&v4), "{v4} at {p4}");
        }
    }
}

#[test]
fn same_seed_is_bit_identical() {
    let a = FractalNoise4::new(&mut LehmerRandom::from_seed(77), 5, 0.45);
    let b = FractalNoise4::new(&mut LehmerRandom::from_seed(77), 5, 0.45);
    assert_eq!(a.noise().permutation(), b.noise().permutation());

    for i in 0..100 {
        let t = f64::from(i);
        let p = DVec4::new(t * 0.31, -t * 0.17, t * 1.3, 2.0);
        assert_eq!(a.evaluate(p).to_bits(), b.evaluate(p).to_bits());
    }
}

#[test]
fn repeated_evaluation_is_idempotent() {
    let noise = FractalNoise3::new(&mut LehmerRandom::from_seed(3), 4, 0.5);
    let p = DVec3::new(12.5, -3.25, 0.75);
    let first = noise.evaluate(p);
    for _ in 0..10 {
        assert_eq!(noise.evaluate(p).to_bits(), first.to_bits());
    }
}

#[test]
fn continuous_across_cell_edges() {
    let noise3 = FractalNoise3::new(&mut LehmerRandom::from_seed(10), 3, 0.5);
    let noise4 = FractalNoise4::new(&mut LehmerRandom::from_seed(10), 3, 0.5);
    let eps = 1e-8;

    // Lattice planes and skewed cell diagonals in both dimensions.
    for i in -4..=4 {
        let c = f64::from(i);
        let p3 = DVec3::new(c, c * 0.5, 1.0 / 3.0);
        for axis in [DVec3::X, DVec3::Y, DVec3::Z, DVec3::ONE] {
            let d = (noise3.evaluate(p3 + axis * eps) - noise3.evaluate(p3 - axis * eps)).abs();
            assert!(d < 1e-5, "3D jump of {d} at {p3}");
        }

        let p4 = DVec4::new(c, 0.5, c * 0.25, 1.0);
        for axis in [DVec4::X, DVec4::Y, DVec4::Z, DVec4::W, DVec4::ONE] {
            let d = (noise4.evaluate(p4 + axis * eps) - noise4.evaluate(p4 - axis * eps)).abs();
            assert!(d < 1e-5, "4D jump of {d} at {p4}");
        }
    }
}

#[test]
fn single_octave_ignores_persistence() {
    let mut a = FractalNoise3::new(&mut LehmerRandom::from_seed(21), 1, 0.5);
    let b = FractalNoise3::new(&mut LehmerRandom::from_seed(21), 1, 0.9);
    let p = DVec3::new(4.4, 0.1, -9.9);
    assert_eq!(a.evaluate(p).to_bits(), b.evaluate(p).to_bits());
    assert_eq!(a.evaluate(p).to_bits(), ((a.raw(p) + 1.0) * 0.5).to_bits());

    a.configure(None, Some(0.1));
    assert_eq!(a.evaluate(p).to_bits(), b.evaluate(p).to_bits());
}

#[test]
fn reconfiguration_changes_output_but_not_tables() {
    let mut generator = NoiseGenerator::new(3, &mut LehmerRandom::from_seed(5), Some(1), None)
        .expect("3D is supported");
    let table = generator.noise().permutation().clone();
    let points = [[0.3, 0.7, 1.9], [5.5, -2.1, 0.2], [9.75, 3.5, -7.25]];

    let before: Vec<f64> = points
        .iter()
        .map(|p| generator.evaluate(p).expect("3D point"))
        .collect();

    generator.configure(Some(4), Some(0.5));
    let changed = points
        .iter()
        .zip(&before)
        .filter(|(p, b)| (generator.evaluate(*p).expect("3D point") - **b).abs() > 1e-12)
        .count();
    assert!(changed > 0, "four octaves should change the field");
    assert_eq!(generator.noise().permutation(), &table);

    // Non-positive values are ignored.
    generator.configure(Some(0), Some(-1.0));
    assert_eq!(generator.config().octaves(), 4);

    generator.configure(Some(1), None);
    for (p, b) in points.iter().zip(&before) {
        let v = generator.evaluate(p).expect("3D point");
        assert_eq!(v.to_bits(), b.to_bits(), "restored config must reproduce {p:?}");
    }
}

#[test]
fn generators_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NoiseGenerator>();
    assert_send_sync::<FractalNoise3>();
    assert_send_sync::<SharedFractalNoise<DVec4>>();

    let noise = FractalNoise3::new(&mut LehmerRandom::from_seed(12), 3, 0.5);
    let expected: Vec<u64> = (0..64)
        .map(|i| noise.evaluate(DVec3::splat(f64::from(i) * 0.25)).to_bits())
        .collect();

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for (i, bits) in expected.iter().enumerate() {
                    let v = noise.evaluate(DVec3::splat(i as f64 * 0.25));
                    assert_eq!(v.to_bits(), *bits);
                }
            });
        }
    });
}
