//! Octave count, persistence and the per-octave factors derived from them.

use smallvec::SmallVec;

/// Octave count used when none is given.
pub const DEFAULT_OCTAVES: u32 = 1;
/// Persistence used when none is given.
pub const DEFAULT_PERSISTENCE: f64 = 0.5;
/// Largest supported octave count.
///
/// Octave `g` samples at frequency `2^g`; past 64 layers the scaled coordinates
/// lose all sub-lattice precision.
pub const MAX_OCTAVES: u32 = 64;

type OctaveFactors = SmallVec<[f64; 8]>;

/// Immutable octave configuration.
///
/// Holds `frequencies[g] = 2^g`, `amplitudes[g] = persistence^g` and the inverse of
/// the amplitude sum. These are computed once here so the evaluation path never
/// allocates. Reconfiguring produces a new value through [`reconfigured`](Self::reconfigured).
#[derive(Debug, Clone, PartialEq)]
pub struct OctaveConfig {
    octaves: u32,
    persistence: f64,
    frequencies: OctaveFactors,
    amplitudes: OctaveFactors,
    inv_amplitude_sum: f64,
}

impl OctaveConfig {
    /// Create a configuration.
    ///
    /// An octave count of 0 falls back to [`DEFAULT_OCTAVES`]; a persistence that
    /// is not positive (or is NaN) falls back to [`DEFAULT_PERSISTENCE`]. Counts
    /// above [`MAX_OCTAVES`] and persistence above 1 are clamped.
    #[must_use]
    pub fn new(octaves: u32, persistence: f64) -> Self {
        Self::default().reconfigured(Some(octaves), Some(persistence))
    }

    /// A copy of this configuration with new settings applied.
    ///
    /// `None`, zero octaves and non-positive or NaN persistence keep the current value.
    #[must_use]
    pub fn reconfigured(&self, octaves: Option<u32>, persistence: Option<f64>) -> Self {
        let octaves = octaves.filter(|&o| o > 0).unwrap_or(self.octaves);
        let persistence = persistence
            .filter(|&p| p > 0.0)
            .unwrap_or(self.persistence);
        Self::compute(octaves, persistence)
    }

    fn compute(octaves: u32, persistence: f64) -> Self {
        let octaves = if octaves > MAX_OCTAVES {
            log::warn!("Octave count {octaves} exceeds {MAX_OCTAVES}, clamping");
            MAX_OCTAVES
        } else {
            octaves
        };
        let persistence = if persistence > 1.0 {
            log::warn!("Persistence {persistence} exceeds 1, clamping");
            1.0
        } else {
            persistence
        };

        let frequencies: OctaveFactors = (0..octaves).map(|g| 2.0_f64.powi(g as i32)).collect();
        let amplitudes: OctaveFactors = (0..octaves)
            .map(|g| persistence.powi(g as i32))
            .collect();
        let inv_amplitude_sum = 1.0 / amplitudes.iter().sum::<f64>();

        log::debug!("Octave config: {octaves} octaves, persistence {persistence}");

        Self {
            octaves,
            persistence,
            frequencies,
            amplitudes,
            inv_amplitude_sum,
        }
    }

    /// Number of octaves summed per evaluation.
    #[must_use]
    pub const fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Amplitude decay factor between consecutive octaves.
    #[must_use]
    pub const fn persistence(&self) -> f64 {
        self.persistence
    }

    /// Sampling frequency of each octave.
    #[must_use]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Amplitude of each octave.
    #[must_use]
    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    /// `1 / sum(amplitudes)`.
    #[must_use]
    pub const fn inv_amplitude_sum(&self) -> f64 {
        self.inv_amplitude_sum
    }

    /// Sum `amplitude * sample(frequency)` over all octaves, normalized by the
    /// total amplitude.
    #[inline]
    pub fn accumulate(&self, mut sample: impl FnMut(f64) -> f64) -> f64 {
        let mut total = 0.0;
        for (&frequency, &amplitude) in self.frequencies.iter().zip(&self.amplitudes) {
            total += amplitude * sample(frequency);
        }
        total * self.inv_amplitude_sum
    }
}

impl Default for OctaveConfig {
    fn default() -> Self {
        Self::compute(DEFAULT_OCTAVES, DEFAULT_PERSISTENCE)
    }
}

/// Remap a normalized `[-1, 1]` noise sum onto `[0, 1]`.
#[inline]
pub(super) fn remap_unit(value: f64) -> f64 {
    ((value + 1.0) * 0.5).clamp(0.0, 1.0)
}
