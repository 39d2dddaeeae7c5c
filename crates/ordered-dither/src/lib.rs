#![allow(clippy::module_inception)]

//! ordered-dither: Bayer-matrix dithering against arbitrary palettes
//!
//! This library converts full-color images into palette-restricted ones
//! using ordered (threshold-matrix) dithering. It was built for pixel-art
//! style conversion: the output uses only colors from a caller-supplied
//! palette, with brightness rendered as a stable cross-hatch of dithered
//! pixels rather than error-diffusion noise.
//!
//! # Quick Start
//!
//! ```
//! use ordered_dither::{Ditherer, Palette, PixelBuffer, Rgb, ThresholdMatrix};
//!
//! let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
//! let ditherer = Ditherer::new(ThresholdMatrix::bayer_4x4(), palette);
//!
//! let source = PixelBuffer::filled(8, 8, Rgb::new(128, 128, 128));
//! let result = ditherer.dither(&source);
//!
//! assert_eq!(result.width(), 8);
//! assert_eq!(result.height(), 8);
//! ```
//!
//! # How the decision works
//!
//! A [`ThresholdMatrix`] is a small integer grid tiled over the image by
//! taking coordinates modulo its dimensions. For each pixel the engine
//! scales perceived brightness (Rec. 601 luma) from `0..=255` into the
//! matrix's threshold range and compares it strictly against the threshold
//! under the pixel:
//!
//! - cleared: the pixel becomes its nearest palette entry,
//! - not cleared: the pixel keeps the palette's darkest entry, which the
//!   whole output buffer starts from.
//!
//! Uniform brightness therefore turns into a fixed spatial pattern: the
//! brighter the region, the more of its matrix cells are cleared.
//!
//! # Palette matching
//!
//! Nearest entries are found with the "redmean" weighted RGB distance, a
//! cheap approximation of perceptual difference that needs no color-space
//! conversion. Ties resolve to the earliest palette entry, so entry order
//! matters and duplicates are harmless.
//!
//! # Determinism
//!
//! Every per-pixel decision depends only on that pixel's color and
//! coordinates. The same input, matrix and palette produce byte-identical
//! output on every run, and pixels could be processed in any order (the
//! implementation scans rows top to bottom).

pub mod buffer;
pub mod color;
pub mod dither;
pub mod matrix;
pub mod palette;

#[cfg(test)]
mod domain_tests;

pub use buffer::PixelBuffer;
pub use color::{brightness, redmean_distance, ParseColorError, Rgb};
pub use dither::Ditherer;
pub use matrix::{MatrixError, ThresholdMatrix};
pub use palette::{Palette, PaletteError};
