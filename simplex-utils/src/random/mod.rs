//! Uniform random sources.
//!
//! Noise generators only ever ask for samples in `[0, 1)`, so the contract is a
//! single method. Any `FnMut() -> f64` closure is a valid source, which lets
//! callers plug in whatever generator they already have.

pub mod lehmer;
pub mod sequence;

/// A source of uniformly distributed samples in `[0, 1)`.
pub trait RandomSource {
    /// Draw the next sample.
    ///
    /// Implementations should return values in `[0, 1)`. Consumers clamp
    /// anything outside that range instead of trusting it.
    fn next_f64(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self()
    }
}
