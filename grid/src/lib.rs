pub mod grid;
pub mod kernel;

pub use grid::PixelGrid;

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridInfo {
    pub width: usize,
    pub height: usize,
}

impl GridInfo {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn grid_offset(&self, x: usize, y: usize) -> Result<usize, InvalidCoordinate> {
        if !self.contains(x, y) {
            return Err(InvalidCoordinate {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x + y * self.width)
    }
}

/// Color channels of one pixel. Values are nominally `0..=255` but are not
/// clamped here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Channels {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Channels {
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    pub fn gray(v: i32) -> Self {
        Self::new(v, v, v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub channels: Channels,
    pub visited: bool,
    pub x: usize,
    pub y: usize,
}

impl Pixel {
    pub fn new(channels: Channels, x: usize, y: usize) -> Self {
        Self {
            channels,
            visited: false,
            x,
            y,
        }
    }
}

/// A coordinate outside of the grid was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCoordinate {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl fmt::Display for InvalidCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "coordinate ({}, {}) is outside of the {}×{} grid",
            self.x, self.y, self.width, self.height
        )
    }
}

impl Error for InvalidCoordinate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_row_major() {
        let info = GridInfo::new(4, 3);
        assert_eq!(info.grid_offset(0, 0), Ok(0));
        assert_eq!(info.grid_offset(3, 0), Ok(3));
        assert_eq!(info.grid_offset(0, 1), Ok(4));
        assert_eq!(info.grid_offset(3, 2), Ok(11));
        assert_eq!(info.len(), 12);
    }

    #[test]
    fn transposed_dimensions_are_different_grids() {
        assert_eq!(GridInfo::new(2, 3), GridInfo::new(2, 3));
        assert_ne!(GridInfo::new(2, 3), GridInfo::new(3, 2));
    }

    #[test]
    fn invalid_coordinate_is_a_std_error() {
        let err: Box<dyn Error> = Box::new(GridInfo::new(1, 1).grid_offset(1, 0).unwrap_err());
        assert_eq!(err.to_string(), "coordinate (1, 0) is outside of the 1×1 grid");
        assert!(err.source().is_none());
    }

    #[test]
    fn offset_outside_grid_is_rejected() {
        let info = GridInfo::new(4, 3);
        assert_eq!(
            info.grid_offset(4, 0),
            Err(InvalidCoordinate {
                x: 4,
                y: 0,
                width: 4,
                height: 3,
            })
        );
        assert!(info.grid_offset(0, 3).is_err());
    }

    #[test]
    fn invalid_coordinate_message_names_the_grid() {
        let err = GridInfo::new(2, 2).grid_offset(5, 1).unwrap_err();
        assert_eq!(err.to_string(), "coordinate (5, 1) is outside of the 2×2 grid");
    }
}
