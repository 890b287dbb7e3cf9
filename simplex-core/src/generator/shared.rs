//! Fractal noise that can be reconfigured while being sampled.

use std::marker::PhantomData;
use std::sync::Arc;

use arc_swap::ArcSwap;
use simplex_utils::noise::SimplexNoise;
use simplex_utils::random::RandomSource;

use super::fractal::{FractalNoise, evaluate_with};
use super::{OctaveConfig, SimplexPoint};

/// Fractal simplex noise with an atomically swappable [`OctaveConfig`].
///
/// Each evaluation loads one immutable config snapshot, so a concurrent
/// [`configure`](Self::configure) is seen either entirely or not at all.
#[derive(Debug)]
pub struct SharedFractalNoise<P> {
    noise: SimplexNoise,
    config: ArcSwap<OctaveConfig>,
    _point: PhantomData<fn(P) -> f64>,
}

impl<P: SimplexPoint> SharedFractalNoise<P> {
    /// Create a generator, drawing its permutation table from `random`.
    pub fn new<R: RandomSource + ?Sized>(random: &mut R, octaves: u32, persistence: f64) -> Self {
        Self::from(FractalNoise::<P>::new(random, octaves, persistence))
    }

    /// Evaluate fractal noise at `point`, returning a value in `[0, 1]`.
    #[must_use]
    pub fn evaluate(&self, point: P) -> f64 {
        let config = self.config.load();
        evaluate_with(&self.noise, &config, point)
    }

    /// Publish a new octave configuration.
    ///
    /// `None` or non-positive values keep the current setting. Concurrent calls
    /// are applied one after another, none is lost.
    pub fn configure(&self, octaves: Option<u32>, persistence: Option<f64>) {
        self.config
            .rcu(|current| current.reconfigured(octaves, persistence));
    }

    /// The configuration currently in effect.
    #[must_use]
    pub fn config(&self) -> Arc<OctaveConfig> {
        self.config.load_full()
    }

    /// The underlying raw noise source.
    #[must_use]
    pub const fn noise(&self) -> &SimplexNoise {
        &self.noise
    }

    /// Copy the current state into a plain [`FractalNoise`].
    #[must_use]
    pub fn snapshot(&self) -> FractalNoise<P> {
        FractalNoise::from_parts(self.noise.clone(), OctaveConfig::clone(&self.config.load()))
    }
}

impl<P: SimplexPoint> From<FractalNoise<P>> for SharedFractalNoise<P> {
    fn from(noise: FractalNoise<P>) -> Self {
        let (noise, config) = noise.into_parts();
        Self {
            noise,
            config: ArcSwap::from_pointee(config),
            _point: PhantomData,
        }
    }
}
