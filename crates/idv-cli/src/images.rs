//! Local image I/O: sample-image loading and crop persistence.
//!
//! Crops arrive from the service as raw encoded bytes; they are
//! decoded and re-encoded to PNG so the output directory holds one
//! uniform format regardless of what the service produced.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::ImageFormat;

/// Read an input image file into memory.
pub fn read_image(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read image {}", path.display()))
}

/// Decode crop bytes and write them as PNG under `output_dir`.
///
/// Creates the output directory if absent. Returns the written path.
pub fn save_crop(bytes: &[u8], output_dir: &Path, file_name: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let decoded = image::load_from_memory(bytes)
        .with_context(|| format!("failed to decode {file_name} crop bytes"))?;

    let path = output_dir.join(file_name);
    decoded
        .save_with_format(&path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}
