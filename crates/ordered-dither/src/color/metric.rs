//! Perceived brightness and redmean color distance
//!
//! Both measures drive the dithering decision: brightness decides *whether*
//! a pixel clears its threshold, distance decides *which* palette entry it
//! receives. They are intentionally cheap; between them the hot loop does a
//! handful of multiplies per pixel and palette entry.

use super::Rgb;

/// Perceived brightness of a color, in `0.0..=255.0`.
///
/// Uses the Rec. 601 luma weights (0.299, 0.587, 0.114): green contributes
/// the most to perceived brightness, blue the least. The weights are applied
/// as `(299·R + 587·G + 114·B) / 1000` so every intermediate product is an
/// exact integer and the bounds hold exactly: pure black is `0.0`, pure
/// white is `255.0`.
///
/// # Example
/// ```
/// use ordered_dither::{brightness, Rgb};
///
/// assert_eq!(brightness(Rgb::new(0, 0, 0)), 0.0);
/// assert_eq!(brightness(Rgb::new(255, 255, 255)), 255.0);
/// assert!(brightness(Rgb::new(0, 255, 0)) > brightness(Rgb::new(255, 0, 0)));
/// ```
#[inline]
pub fn brightness(rgb: Rgb) -> f32 {
    (299.0 * rgb.r as f32 + 587.0 * rgb.g as f32 + 114.0 * rgb.b as f32) / 1000.0
}

/// "Redmean" perceptual distance between two colors.
///
/// A weighted sum of squared channel differences where the red and blue
/// weights shift with the mean red level of the two colors: red differences
/// count more between reddish colors, blue differences count more between
/// dark-red ones. Green is always weighted heaviest.
///
/// The value is a squared-distance-like quantity used only for ordering
/// candidates; no square root is taken. It is symmetric in its arguments.
///
/// See <https://en.wikipedia.org/wiki/Color_difference> (redmean).
///
/// # Example
/// ```
/// use ordered_dither::{redmean_distance, Rgb};
///
/// let navy = Rgb::new(0, 0, 128);
/// assert_eq!(redmean_distance(navy, navy), 0.0);
/// assert!(redmean_distance(navy, Rgb::new(0, 0, 255)) > 0.0);
/// ```
#[inline]
pub fn redmean_distance(a: Rgb, b: Rgb) -> f32 {
    let dr = a.r as f32 - b.r as f32;
    let dg = a.g as f32 - b.g as f32;
    let db = a.b as f32 - b.b as f32;
    let red_mean = (a.r as f32 + b.r as f32) / 2.0;

    (2.0 + red_mean / 256.0) * dr * dr
        + 4.0 * dg * dg
        + (2.0 + (255.0 - red_mean) / 256.0) * db * db
}
