//! Paltone - ordered-dither image converter
//!
//! Turns full-color images into palette-restricted, Bayer-dithered ones.
//! This library exposes modules for integration testing; the dithering
//! engine itself lives in the `ordered-dither` crate.

pub mod assets;
pub mod conf;
pub mod error;
pub mod models;
pub mod services;
