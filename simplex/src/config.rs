use std::path::Path;
use std::{fs, io};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use simplex_core::NoiseSettings;

/// Preview options read from a JSON5 file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Generator settings.
    pub noise: NoiseSettings,
    /// Columns of output.
    pub width: usize,
    /// Rows of output.
    pub height: usize,
    /// World units between neighbouring cells.
    pub scale: f64,
    /// Value of every coordinate past the first two.
    pub slice: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            noise: NoiseSettings::default(),
            width: 72,
            height: 24,
            scale: 0.08,
            slice: 0.0,
        }
    }
}

impl PreviewConfig {
    /// Load the config at `path`, falling back to defaults if the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => serde_json5::from_str(&text)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!("{} not found, using default settings", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err).with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}
