extern crate clap;
#[macro_use]
extern crate error_chain;
extern crate image;
extern crate pixel_grid;
extern crate rand;
extern crate rand_xoshiro;

pub mod config;
pub mod driver;
pub mod errors;
mod profiler;
mod progress;
pub mod surface;

pub use config::{BlurConfig, Cli, Invocation, NeighborSource};
pub use driver::{seeded_rng, BlurDriver, BlurStats};
pub use pixel_grid::{Channels, PixelGrid};

use errors::*;
use image::RgbImage;
use profiler::Profiler;
use std::path::Path;
use surface::grid_from_source;

/// Blurs `image` in place. The image is also the display surface, so every
/// blurred pixel lands in it as soon as it is computed.
pub fn blur_image(image: &mut RgbImage, config: &BlurConfig) -> Result<BlurStats> {
    let grid = grid_from_source(&*image);
    let mut driver = BlurDriver::new(grid, seeded_rng(config.seed), image, config.clone());
    driver.run()
}

pub fn load_image(input_path: &Path) -> Result<RgbImage> {
    let input_image = image::open(input_path)
        .chain_err(|| ErrorKind::SourceUnavailable(input_path.to_path_buf()))?;
    Ok(input_image.to_rgb8())
}

pub fn run_blur(config: &BlurConfig, input_path: &Path, output_path: &Path) -> Result<BlurStats> {
    config::check_output_path(output_path)?;

    let mut profiler = Profiler::new(config.quiet);

    profiler.step("Reading input image");
    let mut image = load_image(input_path)?;
    if !config.quiet {
        println!("Image size: {}×{}", image.width(), image.height());
        match config.seed {
            Some(seed) => println!("Seed: {}", seed),
            None => println!("Seed: from entropy"),
        }
    }

    profiler.step("Blurring");
    let stats = blur_image(&mut image, config)?;
    if !config.quiet {
        println!(
            "Blurred {} cells in {} passes ({} rejected draws)",
            stats.cells_blurred, stats.passes, stats.rejected_draws
        );
    }

    profiler.step("Saving image");
    image
        .save(output_path)
        .chain_err(|| "Error saving output image")?;

    Ok(stats)
}
