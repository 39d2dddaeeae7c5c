//! Domain-critical regression tests for ordered-dither.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::buffer::PixelBuffer;
    use crate::color::Rgb;
    use crate::dither::Ditherer;
    use crate::matrix::ThresholdMatrix;
    use crate::palette::Palette;

    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    fn bw_palette() -> Palette {
        Palette::new(vec![BLACK, WHITE]).unwrap()
    }

    fn white_ratio(buf: &PixelBuffer) -> f64 {
        let white = buf.pixels().iter().filter(|&&p| p == WHITE).count();
        white as f64 / buf.pixels().len() as f64
    }

    // ========================================================================
    // GAP 1: Brightness must be scaled into the matrix's threshold range
    // ========================================================================

    /// If this breaks, it means: raw 0..=255 brightness is being compared
    /// against matrix thresholds directly. On an 8×8 Bayer matrix (values
    /// 0..=63) raw gray 128 would clear every threshold and the image would
    /// come out solid white. Correctly scaled, gray 128 maps to ~32.1 of 64
    /// and clears thresholds 0..=32, i.e. 33 of 64 cells ≈ 51.6% white.
    #[test]
    fn test_mid_gray_coverage_tracks_brightness() {
        let d = Ditherer::new(ThresholdMatrix::bayer_8x8(), bw_palette());
        let out = d.dither(&PixelBuffer::filled(8, 8, Rgb::new(128, 128, 128)));

        let ratio = white_ratio(&out);
        assert!(
            (ratio - 33.0 / 64.0).abs() < 1e-9,
            "REGRESSION: gray 128 produced {ratio:.3} white coverage, expected 33/64. \
             If ~1.0, brightness is being compared unscaled against the thresholds."
        );
    }

    /// If this breaks, it means: the scale factor uses a hardcoded cell
    /// count instead of the actual matrix dimensions. A 2×2 matrix has 4
    /// cells; gray 128 scales to ~2.008 and must clear exactly 3 of them.
    #[test]
    fn test_scale_follows_matrix_size() {
        let d = Ditherer::new(ThresholdMatrix::bayer_2x2(), bw_palette());
        let out = d.dither(&PixelBuffer::filled(2, 2, Rgb::new(128, 128, 128)));

        let white = out.pixels().iter().filter(|&&p| p == WHITE).count();
        assert_eq!(
            white, 3,
            "REGRESSION: gray 128 on a 2×2 matrix must clear thresholds 0, 1 and 2"
        );
    }

    // ========================================================================
    // GAP 2: The threshold comparison is strict
    // ========================================================================

    /// If this breaks, it means: the comparison slipped from `>` to `>=`.
    /// White on a uniform matrix of threshold 4 scales to exactly 4.0, which
    /// must NOT clear; with `>=` the whole image flips white. The same slip
    /// would also make zero-brightness pixels dither at threshold 0.
    #[test]
    fn test_exact_threshold_does_not_clear() {
        let matrix = ThresholdMatrix::from_rows(&[vec![4, 4], vec![4, 4]]).unwrap();
        let d = Ditherer::new(matrix, bw_palette());

        assert!(
            !d.should_dither(0, 0, WHITE),
            "REGRESSION: scaled brightness equal to the threshold must not clear it"
        );

        let out = d.dither(&PixelBuffer::filled(4, 4, WHITE));
        assert!(
            out.pixels().iter().all(|&p| p == BLACK),
            "REGRESSION: strict comparison lost, white cleared an equal threshold"
        );
    }

    // ========================================================================
    // GAP 3: Non-dithered pixels keep the palette's darkest entry
    // ========================================================================

    /// If this breaks, it means: the output is pre-filled with literal black
    /// (or the source pixel) instead of the palette entry nearest to black.
    /// With a palette that contains no pure black, blocked pixels must still
    /// come out as a palette member.
    #[test]
    fn test_blocked_pixels_get_darkest_palette_entry() {
        let gameboy = Palette::from_hex(&["0F380F", "306230", "8BAC0F", "9BBC0F"]).unwrap();
        let darkest = Rgb::new(15, 56, 15);
        let d = Ditherer::new(ThresholdMatrix::bayer_4x4(), gameboy);

        let out = d.dither(&PixelBuffer::filled(4, 4, BLACK));
        assert!(
            out.pixels().iter().all(|&p| p == darkest),
            "REGRESSION: a black image must come out as the darkest palette entry, \
             not literal black"
        );
    }

    // ========================================================================
    // GAP 4: Palette matching uses redmean, not plain Euclidean distance
    // ========================================================================

    /// If this breaks, it means: the distance metric regressed to unweighted
    /// Euclidean RGB. For the target (255,0,0) the entry (205,0,0) is the
    /// Euclidean winner (Δ²=2500 vs 2704), but redmean weights red deltas by
    /// ~2.9 between bright reds and blue deltas by only 2.0 next to them, so
    /// (255,0,52) must win (5408 vs ~7246).
    #[test]
    fn test_redmean_weighting_decides_near_red() {
        let p = Palette::new(vec![Rgb::new(205, 0, 0), Rgb::new(255, 0, 52)]).unwrap();
        let (idx, _) = p.find_nearest(Rgb::new(255, 0, 0));
        assert_eq!(
            idx, 1,
            "REGRESSION: nearest-entry search is not applying the redmean weights"
        );
    }

    // ========================================================================
    // GAP 5: Exact distance ties resolve to the earliest palette entry
    // ========================================================================

    /// If this breaks, it means: the running-minimum comparison slipped from
    /// `<` to `<=` (or the scan order changed), making results depend on
    /// how a palette file happens to list tied colors after the winner.
    #[test]
    fn test_tied_entries_resolve_to_first_listed() {
        let forward = Palette::new(vec![Rgb::new(0, 110, 0), Rgb::new(0, 90, 0)]).unwrap();
        let reversed = Palette::new(vec![Rgb::new(0, 90, 0), Rgb::new(0, 110, 0)]).unwrap();
        let target = Rgb::new(0, 100, 0);

        assert_eq!(forward.find_nearest(target).0, 0);
        assert_eq!(
            reversed.find_nearest(target).0,
            0,
            "REGRESSION: ties must go to the earliest entry in palette order"
        );
    }

    // ========================================================================
    // GAP 6: The matrix tiles by modular lookup across the whole image
    // ========================================================================

    /// If this breaks, it means: threshold lookup clamps or truncates at the
    /// matrix edge instead of wrapping. On a uniform image the dither pattern
    /// must repeat with the matrix period in both directions.
    #[test]
    fn test_pattern_repeats_with_matrix_period() {
        let d = Ditherer::new(ThresholdMatrix::bayer_4x4(), bw_palette());
        let out = d.dither(&PixelBuffer::filled(12, 12, Rgb::new(90, 90, 90)));

        for y in 0..8u32 {
            for x in 0..8u32 {
                assert_eq!(
                    out.get(x, y),
                    out.get(x + 4, y),
                    "REGRESSION: pattern broke horizontally at ({x},{y})"
                );
                assert_eq!(
                    out.get(x, y),
                    out.get(x, y + 4),
                    "REGRESSION: pattern broke vertically at ({x},{y})"
                );
            }
        }
    }
}
