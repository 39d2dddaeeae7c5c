//! End-to-end image conversion pipeline
//!
//! Ties the pieces together: resolve which matrix and palette to use, load
//! and parse them, decode the source image, dither, and encode the result.
//! Matrix/palette arguments accept either a filesystem path or the name of
//! an asset known to the [`AssetLoader`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::RgbImage;
use ordered_dither::{Ditherer, Palette, PixelBuffer, Rgb, ThresholdMatrix};

use crate::assets::AssetLoader;
use crate::conf;
use crate::error::{ConfError, ConvertError};
use crate::models::AppConfig;

/// Resolve the matrix/palette selection for a conversion.
///
/// Precedence: explicit flags win, then the preset (if given), then the
/// config defaults. A flag can override one half of a preset.
pub fn resolve_selection(
    matrix_flag: Option<&str>,
    palette_flag: Option<&str>,
    preset: Option<&str>,
    config: &AppConfig,
) -> Result<(String, String), ConfError> {
    let preset_config = match preset {
        Some(name) => Some(
            config
                .preset(name)
                .ok_or_else(|| ConfError::PresetNotFound(name.to_string()))?,
        ),
        None => None,
    };

    let matrix = matrix_flag
        .map(str::to_string)
        .or_else(|| preset_config.map(|p| p.matrix.clone()))
        .unwrap_or_else(|| config.default_matrix.clone());

    let palette = palette_flag
        .map(str::to_string)
        .or_else(|| preset_config.map(|p| p.palette.clone()))
        .unwrap_or_else(|| config.default_palette.clone());

    Ok((matrix, palette))
}

/// The conventional output location:
/// `<output_dir>/<input stem>-<matrix>-<palette>.<input extension>`
///
/// Inputs without an extension fall back to PNG output.
pub fn default_output_path(
    input: &Path,
    matrix: &str,
    palette: &str,
    output_dir: &Path,
) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let ext = input
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());

    output_dir.join(format!("{stem}-{matrix}-{palette}.{ext}"))
}

fn name_label(spec: &str, ext: &str) -> String {
    spec.strip_suffix(ext).unwrap_or(spec).to_string()
}

fn stem_label(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Summary of one completed conversion
#[derive(Debug)]
pub struct ConversionSummary {
    /// Where the converted image was written
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Matrix label used in the output name (file stem)
    pub matrix: String,
    /// Palette label used in the output name (file stem)
    pub palette: String,
}

/// High-level conversion service combining asset resolution, image decoding,
/// dithering and encoding
pub struct ConversionService {
    loader: AssetLoader,
}

impl ConversionService {
    pub fn new(loader: AssetLoader) -> Self {
        Self { loader }
    }

    /// Load a threshold matrix from a file path or a named asset.
    ///
    /// An existing file path wins; otherwise the name is resolved through
    /// the asset loader. Returns the label used for output naming along
    /// with the parsed matrix.
    pub fn load_matrix(&self, spec: &str) -> Result<(String, ThresholdMatrix), ConfError> {
        let path = Path::new(spec);
        if path.is_file() {
            let text = fs::read_to_string(path)?;
            return Ok((stem_label(path), conf::parse_matrix(&text)?));
        }

        match self.loader.read_matrix(spec) {
            Ok(text) => Ok((name_label(spec, ".csv"), conf::parse_matrix(&text)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ConfError::MatrixNotFound(spec.to_string()))
            }
            Err(e) => Err(ConfError::Io(e)),
        }
    }

    /// Load a palette from a file path or a named asset.
    pub fn load_palette(&self, spec: &str) -> Result<(String, Palette), ConfError> {
        let path = Path::new(spec);
        if path.is_file() {
            let text = fs::read_to_string(path)?;
            return Ok((stem_label(path), conf::parse_palette(&text)?));
        }

        match self.loader.read_palette(spec) {
            Ok(text) => Ok((name_label(spec, ".hex"), conf::parse_palette(&text)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ConfError::PaletteNotFound(spec.to_string()))
            }
            Err(e) => Err(ConfError::Io(e)),
        }
    }

    /// Decode an image file into an RGB pixel buffer.
    ///
    /// Any decodable format is accepted; an alpha channel is dropped.
    pub fn decode_image(&self, path: &Path) -> Result<PixelBuffer, ConvertError> {
        let rgb = image::open(path)?.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb.pixels().map(|p| Rgb::new(p[0], p[1], p[2])).collect();
        Ok(PixelBuffer::from_raw(pixels, width, height))
    }

    /// Encode a pixel buffer to `path`; the format follows the extension.
    pub fn encode_image(&self, buffer: &PixelBuffer, path: &Path) -> Result<(), ConvertError> {
        let mut out = RgbImage::new(buffer.width(), buffer.height());
        for (x, y, pixel) in out.enumerate_pixels_mut() {
            *pixel = image::Rgb(buffer.get(x, y).to_bytes());
        }
        out.save(path)?;
        Ok(())
    }

    /// Run the full pipeline for one image.
    ///
    /// When `output` is `None` the result lands at the conventional path
    /// under `output_dir` (which is created if missing).
    pub fn convert(
        &self,
        input: &Path,
        matrix_spec: &str,
        palette_spec: &str,
        output: Option<PathBuf>,
        output_dir: &Path,
    ) -> Result<ConversionSummary, ConvertError> {
        let (matrix_label, matrix) = self.load_matrix(matrix_spec)?;
        let (palette_label, palette) = self.load_palette(palette_spec)?;

        tracing::info!(
            matrix = %matrix_label,
            cells = matrix.width() * matrix.height(),
            palette = %palette_label,
            colors = palette.len(),
            "Resolved conversion inputs"
        );

        let source = self.decode_image(input)?;
        let ditherer = Ditherer::new(matrix, palette);
        tracing::debug!(darkest = %ditherer.darkest(), "Output pre-fill color");

        let result = ditherer.dither(&source);

        let output_path = match output {
            Some(path) => path,
            None => default_output_path(input, &matrix_label, &palette_label, output_dir),
        };
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        self.encode_image(&result, &output_path)?;

        tracing::info!(
            input = %input.display(),
            output = %output_path.display(),
            width = result.width(),
            height = result.height(),
            "Conversion complete"
        );

        Ok(ConversionSummary {
            output: output_path,
            width: result.width(),
            height: result.height(),
            matrix: matrix_label,
            palette: palette_label,
        })
    }
}
