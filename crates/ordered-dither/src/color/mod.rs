//! Color types and perceptual measures
//!
//! This module provides the 8-bit RGB color type used throughout the crate
//! together with the two measures the dithering decision is built on:
//! perceived brightness and "redmean" color distance.
//!
//! All arithmetic happens directly on the 8-bit channel values. There is no
//! gamma handling and no intermediate color space; both measures are defined
//! over the stored 0..=255 range.
//!
//! # Example
//!
//! ```
//! use ordered_dither::{brightness, redmean_distance, Rgb};
//!
//! let orange: Rgb = "#FFA300".parse().unwrap();
//!
//! // Green dominates perceived brightness
//! assert!(brightness(orange) > brightness(Rgb::new(255, 0, 0)));
//!
//! // Distances are only ever compared, never displayed
//! let d = redmean_distance(orange, Rgb::new(255, 0, 0));
//! assert!(d > 0.0);
//! ```

mod metric;
mod rgb;

pub use metric::{brightness, redmean_distance};
pub use rgb::{ParseColorError, Rgb};
