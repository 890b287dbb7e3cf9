//! Typed fractal noise generator.

use std::marker::PhantomData;

use glam::{DVec3, DVec4};
use simplex_utils::noise::SimplexNoise;
use simplex_utils::random::RandomSource;

use super::octave::{OctaveConfig, remap_unit};
use super::SimplexPoint;

/// 3D fractal simplex noise.
pub type FractalNoise3 = FractalNoise<DVec3>;
/// 4D fractal simplex noise.
pub type FractalNoise4 = FractalNoise<DVec4>;

/// Fractal simplex noise over points of type `P`.
///
/// Evaluation only reads the permutation table and the current [`OctaveConfig`],
/// so a shared reference can be sampled from any number of threads.
/// [`configure`](Self::configure) takes `&mut self`; use
/// [`SharedFractalNoise`](super::SharedFractalNoise) to reconfigure while others sample.
#[derive(Debug, Clone)]
pub struct FractalNoise<P> {
    noise: SimplexNoise,
    config: OctaveConfig,
    _point: PhantomData<fn(P) -> f64>,
}

impl<P: SimplexPoint> FractalNoise<P> {
    /// Create a generator, drawing its permutation table from `random`.
    ///
    /// Invalid `octaves`/`persistence` fall back to the defaults, see [`OctaveConfig::new`].
    pub fn new<R: RandomSource + ?Sized>(random: &mut R, octaves: u32, persistence: f64) -> Self {
        Self::from_parts(SimplexNoise::new(random), OctaveConfig::new(octaves, persistence))
    }

    /// Assemble a generator from an existing noise source and configuration.
    #[must_use]
    pub const fn from_parts(noise: SimplexNoise, config: OctaveConfig) -> Self {
        Self {
            noise,
            config,
            _point: PhantomData,
        }
    }

    /// Evaluate fractal noise at `point`, returning a value in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, point: P) -> f64 {
        evaluate_with(&self.noise, &self.config, point)
    }

    /// Raw single-octave noise at `point`, in approximately `[-1, 1]`.
    #[inline]
    #[must_use]
    pub fn raw(&self, point: P) -> f64 {
        point.sample(&self.noise)
    }

    /// Change the octave count and/or persistence.
    ///
    /// `None` or non-positive values keep the current setting.
    pub fn configure(&mut self, octaves: Option<u32>, persistence: Option<f64>) {
        self.config = self.config.reconfigured(octaves, persistence);
    }

    /// Current octave configuration.
    #[must_use]
    pub const fn config(&self) -> &OctaveConfig {
        &self.config
    }

    /// The underlying raw noise source.
    #[must_use]
    pub const fn noise(&self) -> &SimplexNoise {
        &self.noise
    }

    pub(super) fn into_parts(self) -> (SimplexNoise, OctaveConfig) {
        (self.noise, self.config)
    }
}

#[inline]
pub(super) fn evaluate_with<P: SimplexPoint>(
    noise: &SimplexNoise,
    config: &OctaveConfig,
    point: P,
) -> f64 {
    remap_unit(config.accumulate(|frequency| (point * frequency).sample(noise)))
}
