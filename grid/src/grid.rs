use super::{Channels, GridInfo, InvalidCoordinate, Pixel};
use std::slice;

/// Mutable `width × height` grid of pixels, stored row-major.
///
/// Besides the color of each cell, the grid tracks whether a cell has already
/// been blurred in the current pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    info: GridInfo,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Builds a grid by asking `color` for every cell, row by row.
    pub fn new<F>(width: usize, height: usize, mut color: F) -> Self
    where
        F: FnMut(usize, usize) -> Channels,
    {
        let info = GridInfo::new(width, height);
        let mut pixels = Vec::with_capacity(info.len());
        for y in 0..height {
            for x in 0..width {
                pixels.push(Pixel::new(color(x, y), x, y));
            }
        }
        Self { info, pixels }
    }

    pub fn filled(width: usize, height: usize, channels: Channels) -> Self {
        Self::new(width, height, |_, _| channels)
    }

    pub fn info(&self) -> &GridInfo {
        &self.info
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.info.width, self.info.height)
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Result<&Pixel, InvalidCoordinate> {
        let offset = self.info.grid_offset(x, y)?;
        Ok(&self.pixels[offset])
    }

    fn pixel_mut(&mut self, x: usize, y: usize) -> Result<&mut Pixel, InvalidCoordinate> {
        let offset = self.info.grid_offset(x, y)?;
        Ok(&mut self.pixels[offset])
    }

    pub fn is_visited(&self, x: usize, y: usize) -> Result<bool, InvalidCoordinate> {
        self.pixel(x, y).map(|p| p.visited)
    }

    pub fn mark_visited(&mut self, x: usize, y: usize) -> Result<(), InvalidCoordinate> {
        let pixel = self.pixel_mut(x, y)?;
        debug_assert!(!pixel.visited, "({}, {}) visited twice in one pass", x, y);
        pixel.visited = true;
        Ok(())
    }

    pub fn channels(&self, x: usize, y: usize) -> Result<Channels, InvalidCoordinate> {
        self.pixel(x, y).map(|p| p.channels)
    }

    /// Overwrites the color at `(x, y)` and returns the stored value, ready
    /// to be pushed to a display.
    pub fn set_channels(
        &mut self,
        x: usize,
        y: usize,
        channels: Channels,
    ) -> Result<Channels, InvalidCoordinate> {
        let pixel = self.pixel_mut(x, y)?;
        pixel.channels = channels;
        Ok(pixel.channels)
    }

    /// Clears the visited flag of every cell.
    pub fn reset_all_visited(&mut self) {
        for pixel in &mut self.pixels {
            pixel.visited = false;
        }
    }

    pub fn visited_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.visited).count()
    }

    pub fn pixels(&self) -> slice::Iter<Pixel> {
        self.pixels.iter()
    }

    /// Copies out the colors of every cell in row-major order.
    pub fn snapshot(&self) -> Vec<Channels> {
        self.pixels.iter().map(|p| p.channels).collect()
    }
}
