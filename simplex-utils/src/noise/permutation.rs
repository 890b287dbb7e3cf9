//! Randomized lattice hashing table.

use std::fmt;

use crate::random::RandomSource;

/// Number of distinct entries in the table.
const SIZE: usize = 256;

/// A 512-entry permutation table.
///
/// The first 256 entries are drawn from a [`RandomSource`]; the second half is an
/// exact copy of the first, so any `base + offset` lookup with `base <= 255` and
/// `offset <= 256` stays in bounds without explicit wraparound.
///
/// Entries are sampled independently rather than shuffled, so the first half is
/// not guaranteed to be a permutation of `0..256`.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    p: [u8; SIZE * 2],
}

impl PermutationTable {
    /// Build a table by drawing 256 samples from `random`.
    ///
    /// Each sample is mapped to `floor(sample * 256)` and clamped into `[0, 255]`,
    /// so a misbehaving source can never produce an out-of-range index.
    pub fn new<R: RandomSource + ?Sized>(random: &mut R) -> Self {
        let mut p = [0u8; SIZE * 2];
        let mut clamped = 0usize;

        for val in p.iter_mut().take(SIZE) {
            let scaled = (random.next_f64() * SIZE as f64).floor();
            if !(0.0..SIZE as f64).contains(&scaled) {
                clamped += 1;
            }
            // `as` saturates and maps NaN to 0.
            *val = scaled.clamp(0.0, 255.0) as u8;
        }

        if clamped > 0 {
            log::warn!("{clamped} random samples fell outside [0, 1) and were clamped");
        }

        p.copy_within(..SIZE, SIZE);
        Self { p }
    }

    /// Build a table from 256 explicit entries.
    #[must_use]
    pub fn from_entries(entries: [u8; SIZE]) -> Self {
        let mut p = [0u8; SIZE * 2];
        p[..SIZE].copy_from_slice(&entries);
        p[SIZE..].copy_from_slice(&entries);
        Self { p }
    }

    /// All 512 entries, including the mirrored half.
    #[must_use]
    pub const fn entries(&self) -> &[u8; SIZE * 2] {
        &self.p
    }

    /// Look up a single entry.
    ///
    /// # Panics
    /// Panics if `index >= 512`.
    #[inline]
    #[must_use]
    pub const fn get(&self, index: usize) -> usize {
        self.p[index] as usize
    }
}

impl fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.p[..8])
            .finish_non_exhaustive()
    }
}
