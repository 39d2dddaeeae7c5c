//! Tileable threshold matrices
//!
//! A threshold matrix is a small rectangular grid of integers tiled over the
//! image plane by taking pixel coordinates modulo the matrix dimensions.
//! The classic members of this family are the Bayer matrices, whose
//! thresholds are arranged so that consecutive brightness levels light up
//! pixels in a maximally dispersed order.
//!
//! Matrices are validated once at construction; lookups are unchecked
//! modular indexing.

use thiserror::Error;

/// Error type for threshold matrix construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The matrix has no rows, or its rows have no columns.
    #[error("threshold matrix must have at least one row and one column")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("threshold matrix row {row} has {found} values, expected {expected}")]
    Jagged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

const BAYER_2X2: [[u32; 2]; 2] = [[0, 2], [3, 1]];

const BAYER_4X4: [[u32; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

const BAYER_8X8: [[u32; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// A rectangular grid of dithering thresholds, tiled over the image plane.
///
/// The matrix is rectangular (all rows equal length) and non-empty; both
/// properties are enforced by [`ThresholdMatrix::from_rows`]. Threshold
/// values are unsigned integers with no required range or ordering;
/// anything a configuration file provides is accepted. For the stock Bayer
/// matrices the values are the index permutation `0..width·height`, which
/// matches the brightness scale used by the engine.
///
/// # Example
/// ```
/// use ordered_dither::ThresholdMatrix;
///
/// let m = ThresholdMatrix::bayer_2x2();
/// assert_eq!((m.width(), m.height()), (2, 2));
///
/// // Lookups tile: coordinates wrap modulo the dimensions
/// assert_eq!(m.threshold(0, 0), m.threshold(2, 4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdMatrix {
    width: usize,
    height: usize,
    /// Row-major threshold values, `width * height` entries.
    values: Vec<u32>,
}

impl ThresholdMatrix {
    /// Build a matrix from rows of threshold values.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if there are no rows or the rows have
    /// no columns, and [`MatrixError::Jagged`] if any row's length differs
    /// from the first row's.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, MatrixError> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(MatrixError::Empty),
        };

        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(MatrixError::Jagged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            values: rows.iter().flatten().copied().collect(),
        })
    }

    /// The standard 2×2 Bayer matrix.
    pub fn bayer_2x2() -> Self {
        Self::from_grid(&BAYER_2X2)
    }

    /// The standard 4×4 Bayer matrix.
    pub fn bayer_4x4() -> Self {
        Self::from_grid(&BAYER_4X4)
    }

    /// The standard 8×8 Bayer matrix.
    pub fn bayer_8x8() -> Self {
        Self::from_grid(&BAYER_8X8)
    }

    fn from_grid<const N: usize>(grid: &[[u32; N]; N]) -> Self {
        Self {
            width: N,
            height: N,
            values: grid.iter().flatten().copied().collect(),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The threshold governing pixel `(x, y)`.
    ///
    /// Coordinates may exceed the matrix dimensions; they wrap modulo
    /// width/height, tiling the matrix over the whole image plane.
    #[inline]
    pub fn threshold(&self, x: u32, y: u32) -> u32 {
        let col = x as usize % self.width;
        let row = y as usize % self.height;
        self.values[row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_rows_accepts_rectangular_input() {
        let m = ThresholdMatrix::from_rows(&[vec![0, 2], vec![3, 1]]).unwrap();
        assert_eq!(m.width(), 2);
        assert_eq!(m.height(), 2);
        assert_eq!(m.threshold(0, 0), 0);
        assert_eq!(m.threshold(1, 0), 2);
        assert_eq!(m.threshold(0, 1), 3);
        assert_eq!(m.threshold(1, 1), 1);
    }

    #[test]
    fn test_from_rows_accepts_non_square_input() {
        // A 3-wide, 1-tall matrix is legal; only rectangularity is required.
        let m = ThresholdMatrix::from_rows(&[vec![5, 0, 7]]).unwrap();
        assert_eq!((m.width(), m.height()), (3, 1));
        assert_eq!(m.threshold(2, 9), 7);
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert_eq!(ThresholdMatrix::from_rows(&[]), Err(MatrixError::Empty));
        assert_eq!(
            ThresholdMatrix::from_rows(&[vec![]]),
            Err(MatrixError::Empty),
            "rows without columns are as useless as no rows"
        );
    }

    #[test]
    fn test_from_rows_rejects_jagged() {
        let err = ThresholdMatrix::from_rows(&[vec![0, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Jagged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_lookup_tiles_in_both_directions() {
        let m = ThresholdMatrix::bayer_4x4();
        for y in 0..4u32 {
            for x in 0..4u32 {
                assert_eq!(m.threshold(x, y), m.threshold(x + 4, y));
                assert_eq!(m.threshold(x, y), m.threshold(x, y + 8));
                assert_eq!(m.threshold(x, y), m.threshold(x + 12, y + 4));
            }
        }
    }

    #[test]
    fn test_bayer_matrices_are_index_permutations() {
        // Each stock Bayer matrix contains every value in 0..n² exactly once.
        for (m, n) in [
            (ThresholdMatrix::bayer_2x2(), 2u32),
            (ThresholdMatrix::bayer_4x4(), 4),
            (ThresholdMatrix::bayer_8x8(), 8),
        ] {
            let mut seen: Vec<u32> = (0..n)
                .flat_map(|y| (0..n).map(move |x| (x, y)))
                .map(|(x, y)| m.threshold(x, y))
                .collect();
            seen.sort_unstable();
            let expected: Vec<u32> = (0..n * n).collect();
            assert_eq!(seen, expected, "{n}x{n} Bayer matrix is not a permutation");
        }
    }

    #[test]
    fn test_bayer_8x8_follows_recursive_construction() {
        // The 8×8 Bayer matrix is defined recursively from the 4×4 and 2×2:
        // b8[y][x] = 4·b4[y mod 4][x mod 4] + b2[y div 4][x div 4]
        let b8 = ThresholdMatrix::bayer_8x8();
        let b4 = ThresholdMatrix::bayer_4x4();
        let b2 = ThresholdMatrix::bayer_2x2();

        for y in 0..8u32 {
            for x in 0..8u32 {
                let expected = 4 * b4.threshold(x % 4, y % 4) + b2.threshold(x / 4, y / 4);
                assert_eq!(
                    b8.threshold(x, y),
                    expected,
                    "recursive Bayer structure broken at ({x}, {y})"
                );
            }
        }
    }

    proptest! {
        #[test]
        fn prop_threshold_is_periodic(x in 0..10_000u32, y in 0..10_000u32) {
            let m = ThresholdMatrix::bayer_8x8();
            prop_assert_eq!(m.threshold(x, y), m.threshold(x % 8, y % 8));
        }

        #[test]
        fn prop_arbitrary_rectangles_validate(
            width in 1..12usize,
            height in 1..12usize,
            seed in 0..u32::MAX,
        ) {
            let rows: Vec<Vec<u32>> = (0..height)
                .map(|r| (0..width).map(|c| seed.wrapping_add((r * width + c) as u32)).collect())
                .collect();
            let m = ThresholdMatrix::from_rows(&rows).unwrap();
            prop_assert_eq!(m.width(), width);
            prop_assert_eq!(m.height(), height);
            prop_assert_eq!(m.threshold(0, 0), rows[0][0]);
        }
    }
}
