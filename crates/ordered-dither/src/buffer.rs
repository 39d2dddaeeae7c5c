//! Row-major RGB pixel buffers

use crate::color::Rgb;

/// A `width × height` grid of RGB pixels in row-major order.
///
/// Both the source handed to [`Ditherer::dither`](crate::Ditherer::dither)
/// and the output it returns use this type. Coordinates are `(x, y)` with
/// the origin at the top left, matching image-file conventions.
///
/// The buffer does not interpret its pixels; decoding image files into it
/// and encoding it back out is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a buffer with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major pixel vector.
    ///
    /// `pixels.len()` must equal `width * height` (checked in debug builds).
    pub fn from_raw(pixels: Vec<Rgb>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel count must match dimensions"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The pixel at `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// Overwrite the pixel at `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Consume the buffer, returning the row-major pixel vector.
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} buffer",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}
