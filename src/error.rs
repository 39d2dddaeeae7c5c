use ordered_dither::{MatrixError, PaletteError};
use thiserror::Error;

/// Errors from resolving and parsing matrix/palette/preset configuration.
#[derive(Debug, Error)]
pub enum ConfError {
    #[error("Matrix not found: {0} (searched conf dir and embedded assets)")]
    MatrixNotFound(String),

    #[error("Palette not found: {0} (searched conf dir and embedded assets)")]
    PaletteNotFound(String),

    #[error("Preset not found in config: {0}")]
    PresetNotFound(String),

    #[error("Invalid matrix cell at line {line}, column {column}: {source}")]
    InvalidCell {
        line: usize,
        column: usize,
        source: std::num::ParseIntError,
    },

    #[error("Invalid threshold matrix: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Invalid palette: {0}")]
    Palette(#[from] PaletteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the image conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Configuration error: {0}")]
    Conf(#[from] ConfError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
