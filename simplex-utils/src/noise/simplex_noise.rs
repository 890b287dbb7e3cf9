//! Raw single-octave simplex noise in 3 and 4 dimensions.
//!
//! Each sample locates the simplex containing the point (skew, floor, unskew),
//! orders its corners by the magnitudes of the local offsets and sums the
//! radially attenuated gradient contributions of the N+1 corners.

use super::{GRADIENT_3D, GRADIENT_4D, PermutationTable, SIMPLEX_ORDER};
use crate::random::RandomSource;

/// Skewing factor for 3D simplex: `1/3`
const F3: f64 = 1.0 / 3.0;
/// Unskewing factor for 3D simplex: `1/6`
const G3: f64 = 1.0 / 6.0;

#[allow(clippy::unreadable_literal)]
const SQRT_5: f64 = 2.23606797749979;
/// Skewing factor for 4D simplex: `(sqrt(5) - 1) / 4`
const F4: f64 = (SQRT_5 - 1.0) / 4.0;
/// Unskewing factor for 4D simplex: `(5 - sqrt(5)) / 20`
const G4: f64 = (5.0 - SQRT_5) / 20.0;

/// Squared radius of each corner's kernel.
const RADIUS_SQ: f64 = 0.6;
/// Brings the 3D sum to roughly `[-1, 1]`.
const SCALE_3D: f64 = 32.0;
/// Brings the 4D sum to roughly `[-1, 1]`.
const SCALE_4D: f64 = 27.0;

/// Simplex noise generator over a single randomized permutation table.
///
/// Evaluation is a pure function of the point and the table, so one instance can
/// be sampled from many threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplexNoise {
    perm: PermutationTable,
}

impl SimplexNoise {
    /// Create a new simplex noise generator, drawing its permutation table from `random`.
    pub fn new<R: RandomSource + ?Sized>(random: &mut R) -> Self {
        Self::from_table(PermutationTable::new(random))
    }

    /// Wrap an existing permutation table.
    #[must_use]
    pub const fn from_table(perm: PermutationTable) -> Self {
        Self { perm }
    }

    /// The permutation table used for gradient hashing.
    #[must_use]
    pub const fn permutation(&self) -> &PermutationTable {
        &self.perm
    }

    #[inline]
    fn hash_3d(&self, i: usize, j: usize, k: usize) -> usize {
        let p = &self.perm;
        p.get(i + p.get(j + p.get(k))) % GRADIENT_3D.len()
    }

    #[inline]
    fn hash_4d(&self, i: usize, j: usize, k: usize, l: usize) -> usize {
        let p = &self.perm;
        p.get(i + p.get(j + p.get(k + p.get(l)))) % GRADIENT_4D.len()
    }

    /// Compute corner noise contribution for a 3D simplex vertex.
    #[inline]
    fn corner_3d(gradient: usize, x: f64, y: f64, z: f64) -> f64 {
        let t = RADIUS_SQ - x * x - y * y - z * z;
        if t < 0.0 {
            0.0
        } else {
            let g = &GRADIENT_3D[gradient];
            let t = t * t;
            t * t * (f64::from(g[0]) * x + f64::from(g[1]) * y + f64::from(g[2]) * z)
        }
    }

    /// Compute corner noise contribution for a 4D simplex vertex.
    #[inline]
    fn corner_4d(gradient: usize, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let t = RADIUS_SQ - x * x - y * y - z * z - w * w;
        if t < 0.0 {
            0.0
        } else {
            let g = &GRADIENT_4D[gradient];
            let t = t * t;
            t * t
                * (f64::from(g[0]) * x
                    + f64::from(g[1]) * y
                    + f64::from(g[2]) * z
                    + f64::from(g[3]) * w)
        }
    }

    /// Sample 3D simplex noise at the given coordinates.
    ///
    /// Returns a value in approximately `[-1, 1]` (scaled by 32).
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn get_value_3d(&self, xin: f64, yin: f64, zin: f64) -> f64 {
        let s = (xin + yin + zin) * F3;
        let i = (xin + s).floor();
        let j = (yin + s).floor();
        let k = (zin + s).floor();
        let t = (i + j + k) * G3;
        let x0 = xin - (i - t);
        let y0 = yin - (j - t);
        let z0 = zin - (k - t);

        // Determine which simplex tetrahedron we're in
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + F3;
        let y2 = y0 - j2 as f64 + F3;
        let z2 = z0 - k2 as f64 + F3;
        let x3 = x0 - 1.0 + 0.5;
        let y3 = y0 - 1.0 + 0.5;
        let z3 = z0 - 1.0 + 0.5;

        let ii = lattice_index(i);
        let jj = lattice_index(j);
        let kk = lattice_index(k);
        let gi0 = self.hash_3d(ii, jj, kk);
        let gi1 = self.hash_3d(ii + i1, jj + j1, kk + k1);
        let gi2 = self.hash_3d(ii + i2, jj + j2, kk + k2);
        let gi3 = self.hash_3d(ii + 1, jj + 1, kk + 1);

        let n0 = Self::corner_3d(gi0, x0, y0, z0);
        let n1 = Self::corner_3d(gi1, x1, y1, z1);
        let n2 = Self::corner_3d(gi2, x2, y2, z2);
        let n3 = Self::corner_3d(gi3, x3, y3, z3);

        SCALE_3D * (n0 + n1 + n2 + n3)
    }

    /// Sample 4D simplex noise at the given coordinates.
    ///
    /// Returns a value in approximately `[-1, 1]` (scaled by 27).
    #[must_use]
    #[allow(clippy::many_single_char_names, clippy::similar_names)]
    pub fn get_value_4d(&self, xin: f64, yin: f64, zin: f64, win: f64) -> f64 {
        let s = (xin + yin + zin + win) * F4;
        let i = (xin + s).floor();
        let j = (yin + s).floor();
        let k = (zin + s).floor();
        let l = (win + s).floor();
        let t = (i + j + k + l) * G4;
        let x0 = xin - (i - t);
        let y0 = yin - (j - t);
        let z0 = zin - (k - t);
        let w0 = win - (l - t);

        let rank = SIMPLEX_ORDER[ranking_code(x0, y0, z0, w0)];

        // Corner `c` (1..=3) steps along every axis whose rank is at least `4 - c`.
        let step = |threshold: u8| rank.map(|r| usize::from(r >= threshold));
        let [i1, j1, k1, l1] = step(3);
        let [i2, j2, k2, l2] = step(2);
        let [i3, j3, k3, l3] = step(1);

        let x1 = x0 - i1 as f64 + G4;
        let y1 = y0 - j1 as f64 + G4;
        let z1 = z0 - k1 as f64 + G4;
        let w1 = w0 - l1 as f64 + G4;
        let x2 = x0 - i2 as f64 + 2.0 * G4;
        let y2 = y0 - j2 as f64 + 2.0 * G4;
        let z2 = z0 - k2 as f64 + 2.0 * G4;
        let w2 = w0 - l2 as f64 + 2.0 * G4;
        let x3 = x0 - i3 as f64 + 3.0 * G4;
        let y3 = y0 - j3 as f64 + 3.0 * G4;
        let z3 = z0 - k3 as f64 + 3.0 * G4;
        let w3 = w0 - l3 as f64 + 3.0 * G4;
        let x4 = x0 - 1.0 + 4.0 * G4;
        let y4 = y0 - 1.0 + 4.0 * G4;
        let z4 = z0 - 1.0 + 4.0 * G4;
        let w4 = w0 - 1.0 + 4.0 * G4;

        let ii = lattice_index(i);
        let jj = lattice_index(j);
        let kk = lattice_index(k);
        let ll = lattice_index(l);
        let gi0 = self.hash_4d(ii, jj, kk, ll);
        let gi1 = self.hash_4d(ii + i1, jj + j1, kk + k1, ll + l1);
        let gi2 = self.hash_4d(ii + i2, jj + j2, kk + k2, ll + l2);
        let gi3 = self.hash_4d(ii + i3, jj + j3, kk + k3, ll + l3);
        let gi4 = self.hash_4d(ii + 1, jj + 1, kk + 1, ll + 1);

        let n0 = Self::corner_4d(gi0, x0, y0, z0, w0);
        let n1 = Self::corner_4d(gi1, x1, y1, z1, w1);
        let n2 = Self::corner_4d(gi2, x2, y2, z2, w2);
        let n3 = Self::corner_4d(gi3, x3, y3, z3, w3);
        let n4 = Self::corner_4d(gi4, x4, y4, z4, w4);

        SCALE_4D * (n0 + n1 + n2 + n3 + n4)
    }
}

/// Wrap a floored lattice coordinate into `[0, 255]`.
///
/// Works on the `f64` value directly; `as` saturates, so huge coordinates
/// cannot overflow.
#[inline]
fn lattice_index(lattice: f64) -> usize {
    (lattice as i64 & 0xFF) as usize
}

/// Pack the six pairwise comparisons of the local offsets into a [`SIMPLEX_ORDER`] index.
#[inline]
fn ranking_code(x0: f64, y0: f64, z0: f64, w0: f64) -> usize {
    (usize::from(x0 > y0) << 5)
        | (usize::from(x0 > z0) << 4)
        | (usize::from(y0 > z0) << 3)
        | (usize::from(x0 > w0) << 2)
        | (usize::from(y0 > w0) << 1)
        | usize::from(z0 > w0)
}
