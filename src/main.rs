// In src/main.rs

use anyhow::Context;
use log::info;
use pixfn::{Argb, Config, ParallelMap};
use std::path::PathBuf;

// Demo resolution
const WIDTH: usize = 320;
const HEIGHT: usize = 200;

/// Runs the configured pipeline over a blank frame and prints the first pixel.
///
/// Usage: `pixfn [config.json]`
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Config::load(&path)?
        }
        None => {
            info!("No configuration file given, using defaults.");
            Config::default()
        }
    };

    let engine = ParallelMap::from_config(&config.engine).context("Invalid engine configuration")?;
    info!(
        "Engine: {} workers, row pitch {:?}; pipeline: {:?}",
        engine.workers(),
        engine.row_pitch(),
        config.pipeline.steps
    );

    let mut pixels = vec![0u32; WIDTH * HEIGHT];
    let transform = config.pipeline.build();
    engine
        .apply(transform, &mut pixels)
        .context("Failed to map pipeline over frame")?;

    println!("{}", Argb(pixels[0]));
    Ok(())
}
