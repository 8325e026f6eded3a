//! I/O helpers for grayscale images and JSON.
//!
//! - `load_gray`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `save_gray_f32`: write a single-plane `ImageF32` to a grayscale PNG.
//! - `save_gray_u8`: write an owned 8-bit gray buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageBuffer, ImageF32, ImageView};
use image::{DynamicImage, GrayImage, ImageBuffer as PngBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_gray(path: &Path) -> Result<ImageBuffer<u8>, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(ImageBuffer::from_vec(width, height, img.into_raw()))
}

/// Save a float image to a grayscale PNG, mapping `[0, 1]` to `[0, 255]`.
pub fn save_gray_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        let row = image.row(y, 0);
        for (x, &px) in row.iter().enumerate() {
            let v = (px * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_gray_u8(buffer: &ImageBuffer<u8>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data = buffer.data.clone();
    let image: PngBuffer<Luma<u8>, Vec<u8>> =
        PngBuffer::from_raw(buffer.w as u32, buffer.h as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
