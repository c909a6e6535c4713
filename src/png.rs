// SPDX-License-Identifier: MPL-2.0
//! PNG output for generated icons.
//!
//! Icons are written with the `image` crate's PNG encoder at its strongest
//! compression with adaptive filtering, the smallest files it can produce
//! without altering pixels.

use crate::error::{Error, Result};
use image_rs::codecs::png::{CompressionType, FilterType, PngEncoder};
use image_rs::RgbaImage;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes `image` to `path` as an 8-bit RGBA PNG, replacing any existing file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created and
/// [`Error::Image`] if encoding fails.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::Io(format!("Failed to create {}: {e}", path.display())))?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Best,
        FilterType::Adaptive,
    );
    image.write_with_encoder(encoder)?;
    Ok(())
}
