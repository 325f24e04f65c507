use image::{Rgb, RgbImage};
use pixel_grid::{Channels, PixelGrid};

/// Something a grid can be seeded from.
pub trait ImageSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn color(&self, x: usize, y: usize) -> Channels;
}

/// Receives every blurred pixel as soon as it is computed.
///
/// Updates are fire-and-forget: the blur never waits on the sink.
pub trait DisplaySink {
    fn set_color(&mut self, x: usize, y: usize, color: Channels);

    fn redraw(&mut self) {}
}

impl<'a, D: DisplaySink + ?Sized> DisplaySink for &'a mut D {
    fn set_color(&mut self, x: usize, y: usize, color: Channels) {
        (**self).set_color(x, y, color)
    }

    fn redraw(&mut self) {
        (**self).redraw()
    }
}

/// Discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn set_color(&mut self, _x: usize, _y: usize, _color: Channels) {}
}

impl ImageSource for RgbImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn color(&self, x: usize, y: usize) -> Channels {
        let Rgb([r, g, b]) = *self.get_pixel(x as u32, y as u32);
        Channels::new(r as i32, g as i32, b as i32)
    }
}

impl DisplaySink for RgbImage {
    fn set_color(&mut self, x: usize, y: usize, color: Channels) {
        self.put_pixel(x as u32, y as u32, to_rgb(color));
    }
}

pub fn to_rgb(color: Channels) -> Rgb<u8> {
    let clamp = |v: i32| v.max(0).min(0xFF) as u8;
    Rgb([clamp(color.r), clamp(color.g), clamp(color.b)])
}

/// Builds a grid from `source`, reading each cell's color exactly once.
pub fn grid_from_source<S: ImageSource + ?Sized>(source: &S) -> PixelGrid {
    PixelGrid::new(source.width(), source.height(), |x, y| source.color(x, y))
}
