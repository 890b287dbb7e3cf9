//! Serializable generator settings.

use serde::{Deserialize, Serialize};
use simplex_utils::random::lehmer::LehmerRandom;

use crate::generator::{DEFAULT_OCTAVES, DEFAULT_PERSISTENCE};
use crate::{ConfigurationError, NoiseGenerator};

/// Everything needed to reproduce a [`NoiseGenerator`].
///
/// The permutation table is drawn from a [`LehmerRandom`] seeded with `seed`, so
/// equal settings always build generators with identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    /// Number of axes, 3 or 4.
    pub dimension: u32,
    /// Seed for the permutation table.
    pub seed: u64,
    /// Number of octaves.
    pub octaves: u32,
    /// Amplitude decay between octaves.
    pub persistence: f64,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            dimension: 3,
            seed: 1,
            octaves: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
        }
    }
}

impl NoiseSettings {
    /// Build the generator these settings describe.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::UnsupportedDimension`] unless `dimension` is 3 or 4.
    pub fn build(&self) -> Result<NoiseGenerator, ConfigurationError> {
        let mut rng = LehmerRandom::from_seed(self.seed);
        NoiseGenerator::new(
            self.dimension,
            &mut rng,
            Some(self.octaves),
            Some(self.persistence),
        )
    }
}
