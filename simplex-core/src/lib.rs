//! Multi-octave simplex noise generators.
//!
//! Built on the raw kernels in `simplex-utils`, this crate adds octave
//! summation, runtime dimension selection and serializable settings.
//!
//! # Key Types
//!
//! - [`FractalNoise`] - Typed generator over [`glam::DVec3`] or [`glam::DVec4`] points
//! - [`NoiseGenerator`] - Generator whose dimension is chosen at runtime
//! - [`SharedFractalNoise`] - Generator that can be reconfigured while other threads sample it
//! - [`OctaveConfig`] - Octave count, persistence and their cached per-octave factors
//! - [`NoiseSettings`] - Serializable description of a generator

mod error;
pub mod generator;
mod settings;

pub use error::{ConfigurationError, SampleError};
pub use generator::{
    Dimension, FractalNoise, FractalNoise3, FractalNoise4, NoiseGenerator, OctaveConfig,
    SharedFractalNoise, SimplexPoint,
};
pub use settings::NoiseSettings;
pub use simplex_utils::random::RandomSource;
