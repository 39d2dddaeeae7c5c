//! Test fixtures and image helpers.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Write a solid-color RGB PNG and return its path
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    img.save(&path).expect("Failed to write test image");
    path
}

/// Write a solid-color RGBA PNG and return its path
pub fn write_rgba_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    let img = RgbaImage::from_pixel(width, height, Rgba(color));
    img.save(&path).expect("Failed to write test image");
    path
}

/// Populate a conf directory tree with matrix and palette files
pub fn write_conf_dir(root: &Path, matrices: &[(&str, &str)], palettes: &[(&str, &str)]) {
    let matrices_dir = root.join("matrices");
    std::fs::create_dir_all(&matrices_dir).expect("Failed to create matrices dir");
    for (name, content) in matrices {
        std::fs::write(matrices_dir.join(name), content).expect("Failed to write matrix file");
    }

    let palettes_dir = root.join("palettes");
    std::fs::create_dir_all(&palettes_dir).expect("Failed to create palettes dir");
    for (name, content) in palettes {
        std::fs::write(palettes_dir.join(name), content).expect("Failed to write palette file");
    }
}

/// Load a PNG back as raw RGB triples
pub fn read_png_pixels(path: &Path) -> (u32, u32, Vec<[u8; 3]>) {
    let img = image::open(path).expect("Failed to read image back").to_rgb8();
    let (width, height) = img.dimensions();
    let pixels = img.pixels().map(|p| p.0).collect();
    (width, height, pixels)
}
