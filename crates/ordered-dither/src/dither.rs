//! The ordered dithering engine
//!
//! Ordered dithering makes an independent keep-dark-or-substitute decision
//! per pixel: the pixel's brightness, scaled into the threshold range of a
//! repeating matrix, is compared against the threshold tiled under its
//! coordinates. Bright pixels clear most thresholds and receive their
//! nearest palette color; dark pixels clear few and keep the palette's
//! darkest entry. Because every decision depends only on the pixel's own
//! color and coordinates, the scan is order-independent and the output is
//! fully deterministic.

use crate::buffer::PixelBuffer;
use crate::color::{brightness, Rgb};
use crate::matrix::ThresholdMatrix;
use crate::palette::Palette;

/// Ordered-dithering engine for a fixed matrix and palette.
///
/// Construction takes already-validated components and precomputes the
/// palette's darkest entry, so [`dither()`](Ditherer::dither) is infallible
/// and the per-pixel loop carries no error paths. The engine borrows
/// nothing and takes `&self`, so one instance can convert any number of
/// images.
///
/// # Example
/// ```
/// use ordered_dither::{Ditherer, Palette, PixelBuffer, Rgb, ThresholdMatrix};
///
/// let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
/// let ditherer = Ditherer::new(ThresholdMatrix::bayer_4x4(), palette);
///
/// let source = PixelBuffer::filled(4, 4, Rgb::new(128, 128, 128));
/// let result = ditherer.dither(&source);
///
/// assert_eq!(result.width(), 4);
/// assert_eq!(result.height(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Ditherer {
    matrix: ThresholdMatrix,
    palette: Palette,
    /// Palette entry nearest to pure black, resolved once at construction
    /// so the per-pixel loop never repeats the search.
    darkest: Rgb,
}

impl Ditherer {
    /// Create an engine from a threshold matrix and a palette.
    pub fn new(matrix: ThresholdMatrix, palette: Palette) -> Self {
        let darkest = palette.darkest();
        Self {
            matrix,
            palette,
            darkest,
        }
    }

    /// The threshold matrix this engine tiles over images.
    #[inline]
    pub fn matrix(&self) -> &ThresholdMatrix {
        &self.matrix
    }

    /// The palette this engine matches pixels against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The color pixels keep when they do not clear their threshold.
    #[inline]
    pub fn darkest(&self) -> Rgb {
        self.darkest
    }

    /// Decide whether the pixel at `(x, y)` with color `rgb` receives its
    /// nearest palette color.
    ///
    /// Brightness is scaled from `0..=255` into the matrix's threshold
    /// range `0..width·height`, then compared strictly against the tiled
    /// threshold at the pixel's coordinates. A pixel exactly at a threshold
    /// does not clear it, so an all-zero-brightness image never dithers
    /// even at threshold 0.
    #[inline]
    pub fn should_dither(&self, x: u32, y: u32, rgb: Rgb) -> bool {
        let cells = (self.matrix.width() * self.matrix.height()) as f32;
        let scaled = brightness(rgb) / 255.0 * cells;
        scaled > self.matrix.threshold(x, y) as f32
    }

    /// Dither `source` into a new buffer of identical dimensions.
    ///
    /// The output starts out entirely at the darkest palette entry; each
    /// pixel that clears its threshold is overwritten with the palette
    /// entry nearest to its source color. Repeated runs over the same
    /// input produce identical buffers.
    pub fn dither(&self, source: &PixelBuffer) -> PixelBuffer {
        let mut output = PixelBuffer::filled(source.width(), source.height(), self.darkest);

        for y in 0..source.height() {
            for x in 0..source.width() {
                let rgb = source.get(x, y);
                if self.should_dither(x, y, rgb) {
                    let (idx, _) = self.palette.find_nearest(rgb);
                    output.set(x, y, self.palette.color(idx));
                }
            }
        }

        output
    }
}
