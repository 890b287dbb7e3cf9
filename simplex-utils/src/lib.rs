//! Low-level building blocks for simplex noise generation.
//!
//! - [`random`] - Uniform random sources used to seed permutation tables
//! - [`noise`] - Permutation table, gradient constants and the raw 3D/4D simplex kernels

pub mod noise;
pub mod random;
