//! Prints an ASCII preview of a fractal simplex noise field.
//!
//! Usage: `simplex [config.json5]` (defaults to `simplex.json5` in the working directory).
//! Log verbosity follows `RUST_LOG`.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use tracing_subscriber::EnvFilter;

mod config;
mod preview;

use config::PreviewConfig;

const DEFAULT_CONFIG_PATH: &str = "simplex.json5";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let path = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = PreviewConfig::load(&path)?;

    let generator = config.noise.build()?;
    tracing::info!(
        dimension = %generator.dimension(),
        seed = config.noise.seed,
        octaves = generator.config().octaves(),
        persistence = generator.config().persistence(),
        "Generator ready"
    );

    let start = Instant::now();
    let frame = preview::render(&generator, &config)?;
    tracing::debug!(
        "Rendered {}x{} preview in {:?}",
        config.width,
        config.height,
        start.elapsed()
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
