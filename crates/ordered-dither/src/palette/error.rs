//! Error types for palette construction

use thiserror::Error;

use crate::color::ParseColorError;

/// Error type for palette validation and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// No colors were provided; a nearest-entry search needs at least one.
    #[error("palette must contain at least one color")]
    Empty,
    /// A color entry failed to parse as hex.
    #[error("invalid palette color: {0}")]
    ParseColor(#[from] ParseColorError),
}
