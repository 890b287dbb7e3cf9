//! Fractal simplex noise generators.
//!
//! A generator owns one permutation table and one [`OctaveConfig`]. Evaluation
//! sums `octaves` layers of raw simplex noise, layer `g` sampled at frequency
//! `2^g` with amplitude `persistence^g`, normalizes by the total amplitude and
//! remaps the result from `[-1, 1]` to `[0, 1]`.

mod fractal;
mod octave;
mod shared;

use std::fmt;
use std::ops::Mul;

use glam::{DVec3, DVec4};
use simplex_utils::noise::SimplexNoise;
use simplex_utils::random::RandomSource;

use crate::{ConfigurationError, SampleError};

pub use fractal::{FractalNoise, FractalNoise3, FractalNoise4};
pub use octave::{DEFAULT_OCTAVES, DEFAULT_PERSISTENCE, MAX_OCTAVES, OctaveConfig};
pub use shared::SharedFractalNoise;

/// Number of axes a generator samples over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// 3D simplex noise (tetrahedral cells).
    Three,
    /// 4D simplex noise (pentachoron cells).
    Four,
}

impl Dimension {
    /// Number of coordinates in a point of this dimension.
    #[must_use]
    pub const fn axes(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl TryFrom<u32> for Dimension {
    type Error = ConfigurationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(ConfigurationError::UnsupportedDimension(other)),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.axes())
    }
}

/// A point type that simplex noise can be sampled at.
pub trait SimplexPoint: Copy + Mul<f64, Output = Self> {
    /// Dimension of the point.
    const DIMENSION: Dimension;

    /// Sample raw single-octave noise at this point.
    fn sample(self, noise: &SimplexNoise) -> f64;

    /// Build a point from a coordinate slice of exactly the right length.
    fn from_slice(coords: &[f64]) -> Option<Self>;
}

impl SimplexPoint for DVec3 {
    const DIMENSION: Dimension = Dimension::Three;

    #[inline]
    fn sample(self, noise: &SimplexNoise) -> f64 {
        noise.get_value_3d(self.x, self.y, self.z)
    }

    fn from_slice(coords: &[f64]) -> Option<Self> {
        <[f64; 3]>::try_from(coords).ok().map(Self::from_array)
    }
}

impl SimplexPoint for DVec4 {
    const DIMENSION: Dimension = Dimension::Four;

    #[inline]
    fn sample(self, noise: &SimplexNoise) -> f64 {
        noise.get_value_4d(self.x, self.y, self.z, self.w)
    }

    fn from_slice(coords: &[f64]) -> Option<Self> {
        <[f64; 4]>::try_from(coords).ok().map(Self::from_array)
    }
}

/// Generator whose dimension is picked at runtime.
///
/// Wraps a [`FractalNoise`] of the matching point type. Use the typed generator
/// directly when the dimension is known at compile time; sampling it cannot fail.
#[derive(Debug, Clone)]
pub enum NoiseGenerator {
    /// 3D generator.
    Three(FractalNoise3),
    /// 4D generator.
    Four(FractalNoise4),
}

impl NoiseGenerator {
    /// Create a generator of the given dimension.
    ///
    /// Draws 256 samples from `random` for the permutation table. `octaves` and
    /// `persistence` default to 1 and 0.5 when `None` or non-positive.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::UnsupportedDimension`] unless `dimension` is 3 or 4.
    pub fn new<R: RandomSource + ?Sized>(
        dimension: u32,
        random: &mut R,
        octaves: Option<u32>,
        persistence: Option<f64>,
    ) -> Result<Self, ConfigurationError> {
        let dimension = Dimension::try_from(dimension)?;
        let config = OctaveConfig::default().reconfigured(octaves, persistence);
        let noise = SimplexNoise::new(random);

        log::debug!(
            "Created {dimension} noise generator with {} octaves, persistence {}",
            config.octaves(),
            config.persistence()
        );

        Ok(match dimension {
            Dimension::Three => Self::Three(FractalNoise::from_parts(noise, config)),
            Dimension::Four => Self::Four(FractalNoise::from_parts(noise, config)),
        })
    }

    /// Evaluate fractal noise at `point`, returning a value in `[0, 1]`.
    ///
    /// # Errors
    /// Returns [`SampleError::DimensionMismatch`] if `point` does not have exactly
    /// one coordinate per axis.
    pub fn evaluate(&self, point: &[f64]) -> Result<f64, SampleError> {
        match self {
            Self::Three(noise) => Self::evaluate_typed(noise, point),
            Self::Four(noise) => Self::evaluate_typed(noise, point),
        }
    }

    fn evaluate_typed<P: SimplexPoint>(
        noise: &FractalNoise<P>,
        point: &[f64],
    ) -> Result<f64, SampleError> {
        let point = P::from_slice(point).ok_or(SampleError::DimensionMismatch {
            expected: P::DIMENSION.axes(),
            actual: point.len(),
        })?;
        Ok(noise.evaluate(point))
    }

    /// Change the octave count and/or persistence.
    ///
    /// `None` or non-positive values keep the current setting. The permutation
    /// table is never rebuilt.
    pub fn configure(&mut self, octaves: Option<u32>, persistence: Option<f64>) {
        match self {
            Self::Three(noise) => noise.configure(octaves, persistence),
            Self::Four(noise) => noise.configure(octaves, persistence),
        }
    }

    /// Dimension of the generator.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::Three(_) => Dimension::Three,
            Self::Four(_) => Dimension::Four,
        }
    }

    /// Current octave configuration.
    #[must_use]
    pub const fn config(&self) -> &OctaveConfig {
        match self {
            Self::Three(noise) => noise.config(),
            Self::Four(noise) => noise.config(),
        }
    }

    /// The underlying raw noise source.
    #[must_use]
    pub const fn noise(&self) -> &SimplexNoise {
        match self {
            Self::Three(noise) => noise.noise(),
            Self::Four(noise) => noise.noise(),
        }
    }
}
