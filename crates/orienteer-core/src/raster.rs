//! The [`TerrainRaster`] type — a dense grid of [`Rgb`] terrain colors.
//!
//! Unlike a shared-buffer view, a raster owns its pixels: the route finder
//! reads the pristine input and draws onto a separate working copy.

use std::fmt;

use crate::error::{Error, Result};
use crate::geom::{Point, Range};

/// An 8-bit RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(v: [u8; 3]) -> Self {
        Self(v)
    }
}

/// A 2D raster of terrain colors, indexed by [`Point`] (`x` = column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainRaster {
    pixels: Vec<Rgb>,
    bounds: Range,
}

impl TerrainRaster {
    /// Create a raster of the given dimensions filled with `fill`.
    pub fn new(width: i32, height: i32, fill: Rgb) -> Self {
        let bounds = Range::sized(width, height);
        Self {
            pixels: vec![fill; bounds.len()],
            bounds,
        }
    }

    /// Wrap a row-major pixel buffer.
    pub fn from_pixels(width: i32, height: i32, pixels: Vec<Rgb>) -> Result<Self> {
        let bounds = Range::sized(width, height);
        if width <= 0 || height <= 0 || pixels.len() != bounds.len() {
            return Err(Error::PixelCount {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self { pixels, bounds })
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Color at `p`, or `None` if `p` is outside the raster.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Rgb> {
        self.bounds.index(p).map(|i| self.pixels[i])
    }

    /// Set the color at `p`. No-op if `p` is outside the raster.
    pub fn set(&mut self, p: Point, color: Rgb) {
        if let Some(i) = self.bounds.index(p) {
            self.pixels[i] = color;
        }
    }

    /// Overwrite every cell of `path` with `color`.
    pub fn draw_path<I: IntoIterator<Item = Point>>(&mut self, path: I, color: Rgb) {
        for p in path {
            self.set(p, color);
        }
    }

    /// Row-major pixel buffer.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn at_and_set_respect_bounds() {
        let mut r = TerrainRaster::new(3, 2, Rgb::BLACK);
        r.set(Point::new(2, 1), RED);
        r.set(Point::new(3, 1), RED);
        assert_eq!(r.at(Point::new(2, 1)), Some(RED));
        assert_eq!(r.at(Point::new(3, 1)), None);
        assert_eq!(r.pixels().iter().filter(|&&c| c == RED).count(), 1);
    }

    #[test]
    fn draw_path_marks_every_cell() {
        let mut r = TerrainRaster::new(3, 3, Rgb::BLACK);
        let path = [Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)];
        r.draw_path(path, RED);
        for p in path {
            assert_eq!(r.at(p), Some(RED));
        }
        assert_eq!(r.at(Point::new(1, 0)), Some(Rgb::BLACK));
    }

    #[test]
    fn pixel_count_must_match() {
        let err = TerrainRaster::from_pixels(2, 2, vec![Rgb::BLACK; 3]).unwrap_err();
        assert!(matches!(err, Error::PixelCount { len: 3, .. }));
    }

    #[test]
    fn color_display_is_hex() {
        assert_eq!(Rgb::new(248, 148, 18).to_string(), "#F89412");
    }
}
