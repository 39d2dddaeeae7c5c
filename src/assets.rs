//! Asset loading with embedded fallbacks
//!
//! This module provides a unified interface for loading the textual assets
//! (threshold matrices, palettes, config) with the following behavior:
//!
//! - If no conf dir is configured: use embedded assets only (no filesystem access)
//! - If a conf dir is configured: try `<conf_dir>/matrices/` and
//!   `<conf_dir>/palettes/` first, then fall back to embedded
//! - Config resolves in order: explicit config file, `<conf_dir>/config.yaml`,
//!   embedded default
//!
//! The conf dir comes from `--conf-dir` or the `CONF_DIR` env var; the
//! config file from `CONFIG_FILE`.

use rust_embed::RustEmbed;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Embedded threshold matrices (CSV, one row per line)
#[derive(RustEmbed)]
#[folder = "conf/matrices/"]
#[include = "*.csv"]
struct EmbeddedMatrices;

/// Embedded palettes (one hex color per line)
#[derive(RustEmbed)]
#[folder = "conf/palettes/"]
#[include = "*.hex"]
struct EmbeddedPalettes;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "conf/"]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Matrices,
    Palettes,
    Config,
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Append the category's file extension unless the name already carries it.
fn with_extension(name: &str, ext: &str) -> String {
    if name.ends_with(ext) {
        name.to_string()
    } else {
        format!("{name}{ext}")
    }
}

/// Asset loader with merge behavior and optional filesystem override
pub struct AssetLoader {
    /// External conf directory holding `matrices/` and `palettes/`
    conf_dir: Option<PathBuf>,
    /// External config file path
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding flag or env var was
    /// set. If `None`, embedded assets are used exclusively.
    pub fn new(conf_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            conf_dir,
            config_file,
        }
    }

    /// Read a threshold matrix by name (`bayer_4x4` or `bayer_4x4.csv`)
    ///
    /// If a conf dir is configured, tries `<conf_dir>/matrices/` first, then
    /// falls back to embedded. Without a conf dir, uses embedded only.
    pub fn read_matrix(&self, name: &str) -> io::Result<String> {
        let file = with_extension(name, ".csv");

        if let Some(ref dir) = self.conf_dir {
            let full_path = dir.join("matrices").join(&file);
            if full_path.exists() {
                tracing::trace!(path = %full_path.display(), "Loading matrix from filesystem");
                return fs::read_to_string(&full_path);
            }
        }

        EmbeddedMatrices::get(&file)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("Matrix not found: {file}"))
            })
            .and_then(|f| {
                tracing::trace!(file = %file, "Loading matrix from embedded assets");
                String::from_utf8(f.data.into_owned())
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            })
    }

    /// Read a palette by name (`gameboy` or `gameboy.hex`)
    ///
    /// Same resolution order as [`read_matrix`](AssetLoader::read_matrix),
    /// against `<conf_dir>/palettes/`.
    pub fn read_palette(&self, name: &str) -> io::Result<String> {
        let file = with_extension(name, ".hex");

        if let Some(ref dir) = self.conf_dir {
            let full_path = dir.join("palettes").join(&file);
            if full_path.exists() {
                tracing::trace!(path = %full_path.display(), "Loading palette from filesystem");
                return fs::read_to_string(&full_path);
            }
        }

        EmbeddedPalettes::get(&file)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Palette not found: {file}"),
                )
            })
            .and_then(|f| {
                tracing::trace!(file = %file, "Loading palette from embedded assets");
                String::from_utf8(f.data.into_owned())
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            })
    }

    /// The external config path, if one would be read.
    ///
    /// Resolution order: explicit config file, then `<conf_dir>/config.yaml`.
    /// Returns `None` when only the embedded default applies.
    pub fn config_path(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.config_file {
            return Some(path.clone());
        }
        self.conf_dir.as_ref().map(|dir| dir.join("config.yaml"))
    }

    /// Read the config file as a UTF-8 string
    ///
    /// Tries the external path from [`config_path`](AssetLoader::config_path)
    /// first; falls back to the embedded default.
    pub fn read_config_string(&self) -> io::Result<String> {
        if let Some(path) = self.config_path() {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return fs::read_to_string(&path);
            }
        }

        EmbeddedConfig::get("config.yaml")
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
            .and_then(|f| {
                tracing::trace!("Loading config from embedded assets");
                String::from_utf8(f.data.into_owned())
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            })
    }

    /// List all available matrices (merged view of embedded + external)
    pub fn list_matrices(&self) -> Vec<String> {
        self.list_merged(
            EmbeddedMatrices::iter().map(|s| s.to_string()),
            "matrices",
            ".csv",
        )
    }

    /// List all available palettes (merged view of embedded + external)
    pub fn list_palettes(&self) -> Vec<String> {
        self.list_merged(
            EmbeddedPalettes::iter().map(|s| s.to_string()),
            "palettes",
            ".hex",
        )
    }

    fn list_merged(
        &self,
        embedded: impl Iterator<Item = String>,
        subdir: &str,
        ext: &str,
    ) -> Vec<String> {
        let mut files: HashSet<String> = embedded.collect();

        if let Some(ref dir) = self.conf_dir {
            if let Ok(entries) = fs::read_dir(dir.join(subdir)) {
                for entry in entries.flatten() {
                    if let Some(name) = entry.file_name().to_str() {
                        if name.ends_with(ext) {
                            files.insert(name.to_string());
                        }
                    }
                }
            }
        }

        let mut result: Vec<_> = files.into_iter().collect();
        result.sort();
        result
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths, or `./conf` if none were set. Existing
    /// files are skipped unless `force` is given.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let conf_dir = self
            .conf_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("./conf"));

        for category in categories {
            match category {
                AssetCategory::Matrices => {
                    let dir = conf_dir.join("matrices");
                    fs::create_dir_all(&dir)?;

                    for file in EmbeddedMatrices::iter() {
                        let path = dir.join(file.as_ref());
                        if !force && path.exists() {
                            report.skipped.push(path.display().to_string());
                            continue;
                        }
                        if let Some(data) = EmbeddedMatrices::get(&file) {
                            fs::write(&path, &*data.data)?;
                            report.written.push(path.display().to_string());
                        }
                    }
                }
                AssetCategory::Palettes => {
                    let dir = conf_dir.join("palettes");
                    fs::create_dir_all(&dir)?;

                    for file in EmbeddedPalettes::iter() {
                        let path = dir.join(file.as_ref());
                        if !force && path.exists() {
                            report.skipped.push(path.display().to_string());
                            continue;
                        }
                        if let Some(data) = EmbeddedPalettes::get(&file) {
                            fs::write(&path, &*data.data)?;
                            report.written.push(path.display().to_string());
                        }
                    }
                }
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| conf_dir.join("config.yaml"));

                    if !force && path.exists() {
                        report.skipped.push(path.display().to_string());
                        continue;
                    }
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    if let Some(data) = EmbeddedConfig::get("config.yaml") {
                        fs::write(&path, &*data.data)?;
                        report.written.push(path.display().to_string());
                    }
                }
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Matrices => EmbeddedMatrices::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Palettes => EmbeddedPalettes::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Config => vec!["config.yaml".to_string()],
        }
    }
}
