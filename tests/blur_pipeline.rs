extern crate image;
extern crate scatter_blur;

use image::{ImageBuffer, Rgb, RgbImage};
use scatter_blur::errors::ErrorKind;
use scatter_blur::surface::grid_from_source;
use scatter_blur::{blur_image, run_blur, BlurConfig, NeighborSource};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("scatter-blur-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn config(iterations: u32, seed: u64) -> BlurConfig {
    BlurConfig {
        iterations,
        seed: Some(seed),
        neighbors: NeighborSource::Live,
        quiet: true,
    }
}

fn checkerboard(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([250, 10, 120])
        } else {
            Rgb([0, 90, 30])
        }
    })
}

#[test]
fn blurred_image_matches_grid_and_differs_from_source() {
    let source = checkerboard(9, 7);
    let mut image = source.clone();
    let stats = blur_image(&mut image, &config(2, 17)).unwrap();
    assert_eq!(stats.passes, 2);
    assert_eq!(stats.cells_blurred, 2 * 9 * 7);
    assert_eq!(image.dimensions(), (9, 7));
    assert_ne!(image, source);

    // averaging never leaves the range of the input channels
    for pixel in image.pixels() {
        assert!(pixel[0] <= 250);
        assert!(pixel[1] >= 10 && pixel[1] <= 90);
        assert!(pixel[2] >= 30 && pixel[2] <= 120);
    }
}

#[test]
fn fixed_seed_is_deterministic() {
    let mut a = checkerboard(8, 8);
    let mut b = checkerboard(8, 8);
    blur_image(&mut a, &config(3, 2024)).unwrap();
    blur_image(&mut b, &config(3, 2024)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_give_different_images() {
    let mut a = checkerboard(8, 8);
    let mut b = checkerboard(8, 8);
    blur_image(&mut a, &config(1, 2024)).unwrap();
    blur_image(&mut b, &config(1, 2025)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn zero_iterations_keep_the_image() {
    let source = checkerboard(5, 4);
    let mut image = source.clone();
    let stats = blur_image(&mut image, &config(0, 1)).unwrap();
    assert_eq!(stats.cells_blurred, 0);
    assert_eq!(image, source);
}

#[test]
fn uniform_image_survives_many_passes() {
    let source: RgbImage = ImageBuffer::from_pixel(6, 3, Rgb([33, 66, 99]));
    let mut image = source.clone();
    blur_image(&mut image, &config(5, 8)).unwrap();
    assert_eq!(image, source);
}

#[test]
fn grid_reads_back_source_image() {
    let source = checkerboard(4, 6);
    let grid = grid_from_source(&source);
    for (x, y, rgb) in source.enumerate_pixels() {
        let c = grid.channels(x as usize, y as usize).unwrap();
        assert_eq!([c.r, c.g, c.b], [rgb[0] as i32, rgb[1] as i32, rgb[2] as i32]);
    }
}

#[test]
fn run_blur_writes_png_output() {
    let input = temp_path("pipeline-in.png");
    let output = temp_path("pipeline-out.png");
    checkerboard(10, 6).save(&input).unwrap();

    let stats = run_blur(&config(1, 5), &input, &output).unwrap();
    assert_eq!(stats.cells_blurred, 60);

    let mut expected = checkerboard(10, 6);
    blur_image(&mut expected, &config(1, 5)).unwrap();
    let written = image::open(&output).unwrap().to_rgb8();
    assert_eq!(written, expected);
}

#[test]
fn missing_source_is_reported() {
    let input = temp_path("does-not-exist.png");
    let output = temp_path("never-written.png");
    let err = run_blur(&config(1, 0), &input, &output).unwrap_err();
    match *err.kind() {
        ErrorKind::SourceUnavailable(ref path) => assert_eq!(path, &input),
        ref other => panic!("unexpected error {}", other),
    }
    assert!(!output.exists());
}

#[test]
fn unsupported_output_format_is_rejected_before_loading() {
    let input = temp_path("does-not-matter.png");
    let output = temp_path("out.tiff");
    let err = run_blur(&config(1, 0), &input, &output).unwrap_err();
    match *err.kind() {
        ErrorKind::InvalidConfiguration(_) => {}
        ref other => panic!("unexpected error {}", other),
    }
}
