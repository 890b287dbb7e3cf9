//! Park-Miller "minimal standard" Lehmer generator.
//!
//! `state = state * 16807 mod (2^31 - 1)`, yielding `state / (2^31 - 1)`.
//! Small, seedable and fully deterministic, which is all a permutation table needs.

use super::RandomSource;

/// Modulus `2^31 - 1` (a Mersenne prime).
const MODULUS: u64 = 2_147_483_647;
/// Multiplier, a primitive root modulo [`MODULUS`].
const MULTIPLIER: u64 = 16_807;

/// Seedable Lehmer random number generator.
///
/// The state is always in `[1, MODULUS)`, so every sample lies in the open
/// interval `(0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LehmerRandom {
    state: u64,
}

impl LehmerRandom {
    /// Create a generator from a seed.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            state: Self::sanitize(seed),
        }
    }

    /// Reset the generator to a new seed.
    pub const fn set_seed(&mut self, seed: u64) {
        self.state = Self::sanitize(seed);
    }

    /// Current internal state.
    #[must_use]
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Advance the state and return it.
    #[inline]
    pub const fn next_u31(&mut self) -> u32 {
        self.state = self.state * MULTIPLIER % MODULUS;
        self.state as u32
    }

    // Zero is a fixed point of the recurrence.
    const fn sanitize(seed: u64) -> u64 {
        match seed % MODULUS {
            0 => 1,
            s => s,
        }
    }
}

impl RandomSource for LehmerRandom {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u31()) / MODULUS as f64
    }
}
