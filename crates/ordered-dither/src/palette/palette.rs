//! Ordered color palettes with redmean nearest-entry matching

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{redmean_distance, Rgb};

/// An ordered, non-empty list of output colors.
///
/// Entry order is part of the contract: [`Palette::find_nearest`] only
/// replaces its running minimum on a strict improvement, so when two entries
/// are exactly equidistant from a pixel the one listed first wins.
/// Duplicate entries are permitted and never deduplicated; a duplicate can
/// only ever lose a tie against its earlier twin, so results are unaffected.
///
/// Palettes are immutable after construction and cheap to clone.
///
/// # Example
/// ```
/// use ordered_dither::{Palette, Rgb};
///
/// let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
/// let (idx, _) = palette.find_nearest(Rgb::new(240, 240, 240));
/// assert_eq!(palette.color(idx), Rgb::new(255, 255, 255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from the given colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] if `colors` is empty.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    /// Create a palette from hex color strings.
    ///
    /// Accepts the same formats as [`Rgb::from_str`]: 6-digit or 3-digit
    /// shorthand hex, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] for an unparseable entry, or
    /// [`PaletteError::Empty`] for an empty list.
    ///
    /// # Example
    /// ```
    /// use ordered_dither::Palette;
    ///
    /// let gameboy = Palette::from_hex(&["0F380F", "306230", "8BAC0F", "9BBC0F"]).unwrap();
    /// assert_eq!(gameboy.len(), 4);
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let colors = colors
            .iter()
            .map(|s| Rgb::from_str(s))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; construction rejects empty palettes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The entry at `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All entries, in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Find the entry nearest to `target` under the redmean metric.
    ///
    /// Returns `(index, distance)`. Only a strictly smaller distance
    /// replaces the running minimum, so on exact ties the earliest entry
    /// wins. The scan order is fixed, which makes the result deterministic
    /// for any palette and target.
    #[inline]
    pub fn find_nearest(&self, target: Rgb) -> (usize, f32) {
        // Linear scan - optimal for small palettes (2-64 colors typical)
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;

        for (i, &candidate) in self.colors.iter().enumerate() {
            let dist = redmean_distance(candidate, target);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// The entry nearest to pure black.
    ///
    /// This is the color output buffers are pre-filled with: pixels that do
    /// not clear their dithering threshold keep it.
    pub fn darkest(&self) -> Rgb {
        let (idx, _) = self.find_nearest(Rgb::BLACK);
        self.colors[idx]
    }
}
