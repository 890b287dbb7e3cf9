use thiserror::Error;

/// An error raised while constructing a generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Only 3D and 4D simplex noise are supported.
    #[error("Unsupported noise dimension {0}, expected 3 or 4")]
    UnsupportedDimension(u32),
}

/// An error raised while sampling a [`NoiseGenerator`](crate::NoiseGenerator).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// The point does not have one coordinate per generator axis.
    #[error("Point has {actual} coordinates but the generator is {expected}-dimensional")]
    DimensionMismatch {
        /// Number of axes of the generator.
        expected: usize,
        /// Number of coordinates supplied.
        actual: usize,
    },
}
