//! Replays a fixed list of samples.

use super::RandomSource;

/// Random source that cycles through a fixed slice of samples.
///
/// Useful for reproducing a permutation table from recorded samples, or for
/// building a known table in tests. An empty sequence yields `0.0` forever.
#[derive(Debug, Clone)]
pub struct SequenceRandom<'a> {
    samples: &'a [f64],
    cursor: usize,
}

impl<'a> SequenceRandom<'a> {
    /// Create a source replaying `samples` from the start.
    #[must_use]
    pub const fn new(samples: &'a [f64]) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom<'_> {
    fn next_f64(&mut self) -> f64 {
        let Some(&value) = self.samples.get(self.cursor) else {
            return 0.0;
        };
        self.cursor = (self.cursor + 1) % self.samples.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around() {
        let samples = [0.1, 0.2];
        let mut source = SequenceRandom::new(&samples);
        let drawn: Vec<f64> = (0..5).map(|_| source.next_f64()).collect();
        assert_eq!(drawn, vec![0.1, 0.2, 0.1, 0.2, 0.1]);
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut source = SequenceRandom::new(&[]);
        assert!(source.next_f64().abs() < f64::EPSILON);
    }
}
