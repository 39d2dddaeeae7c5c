//! Palette types and utilities
//!
//! This module provides the ordered color palette the engine matches pixels
//! against, plus its validation error type.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::Palette;
