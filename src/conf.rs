//! Parsers for the textual matrix and palette formats
//!
//! Threshold matrices are CSV: one row per line, comma-separated unsigned
//! integers. Palettes are one hex color per line (`RRGGBB`, `#RRGGBB`, or
//! 3-digit shorthand). Both formats tolerate surrounding whitespace and
//! skip blank lines; errors carry 1-based line/column positions so they
//! point into the file a user actually edited.

use ordered_dither::{Palette, PaletteError, Rgb, ThresholdMatrix};

use crate::error::ConfError;

/// Parse a threshold matrix from CSV text.
pub fn parse_matrix(text: &str) -> Result<ThresholdMatrix, ConfError> {
    let mut rows = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for (col_idx, cell) in line.split(',').enumerate() {
            let value = cell
                .trim()
                .parse::<u32>()
                .map_err(|source| ConfError::InvalidCell {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    source,
                })?;
            row.push(value);
        }
        rows.push(row);
    }

    Ok(ThresholdMatrix::from_rows(&rows)?)
}

/// Parse a palette from hex text.
pub fn parse_palette(text: &str) -> Result<Palette, ConfError> {
    let mut colors = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let color = line.parse::<Rgb>().map_err(PaletteError::from)?;
        colors.push(color);
    }

    Ok(Palette::new(colors)?)
}
