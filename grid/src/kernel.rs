use super::{Channels, GridInfo, InvalidCoordinate};
use std::cmp::min;
use std::ops::RangeInclusive;

/// The 3x3 neighborhood of a cell, clamped to the grid edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub xs: RangeInclusive<usize>,
    pub ys: RangeInclusive<usize>,
}

impl Window {
    pub fn around(info: &GridInfo, x: usize, y: usize) -> Result<Self, InvalidCoordinate> {
        info.grid_offset(x, y)?;
        Ok(Self {
            xs: x.saturating_sub(1)..=min(info.width - 1, x + 1),
            ys: y.saturating_sub(1)..=min(info.height - 1, y + 1),
        })
    }

    pub fn len(&self) -> usize {
        (self.xs.end() - self.xs.start() + 1) * (self.ys.end() - self.ys.start() + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Average {
    pub channels: Channels,
    /// Number of cells summed.
    pub div: i32,
}

/// Averages the window around `(x, y)`, reading colors through `color`.
///
/// Sums are integers and the mean uses truncating integer division, so a
/// white cell surrounded by eight black ones averages to `255 / 9 = 28`.
pub fn box_average<F>(
    info: &GridInfo,
    x: usize,
    y: usize,
    color: F,
) -> Result<Average, InvalidCoordinate>
where
    F: Fn(usize, usize) -> Result<Channels, InvalidCoordinate>,
{
    let window = Window::around(info, x, y)?;

    let mut r = 0;
    let mut g = 0;
    let mut b = 0;
    for x2 in window.xs.clone() {
        for y2 in window.ys.clone() {
            let p = color(x2, y2)?;
            r += p.r;
            g += p.g;
            b += p.b;
        }
    }
    // the window always holds the center cell
    let div = window.len() as i32;

    Ok(Average {
        channels: Channels::new(r / div, g / div, b / div),
        div,
    })
}
