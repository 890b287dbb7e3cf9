use simplex_core::{NoiseGenerator, SampleError};

use crate::config::PreviewConfig;

/// Shades from low to high noise values.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Render the generator as rows of [`RAMP`] characters.
///
/// Cell `(col, row)` samples `(col * scale, row * scale, slice, slice)`, cut to the
/// generator's dimension.
pub fn render(generator: &NoiseGenerator, config: &PreviewConfig) -> Result<String, SampleError> {
    let axes = generator.dimension().axes();
    let mut out = String::with_capacity((config.width + 1) * config.height);
    let mut point = [config.slice; 4];

    for row in 0..config.height {
        point[1] = row as f64 * config.scale;
        for col in 0..config.width {
            point[0] = col as f64 * config.scale;
            let value = generator.evaluate(&point[..axes])?;
            out.push(shade(value));
        }
        out.push('\n');
    }
    Ok(out)
}

fn shade(value: f64) -> char {
    let last = RAMP.len() - 1;
    let index = (value * last as f64).round() as usize;
    char::from(RAMP[index.min(last)])
}
