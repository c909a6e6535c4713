// SPDX-License-Identifier: MPL-2.0
//! Procedurally drawn camera icon.
//!
//! A blue disc with a white camera body, a two-tone lens, a reflection
//! highlight and two colored accents. [`layout`] resolves the geometry for a
//! size and [`paint`] rasterizes it.

pub mod layout;
pub mod paint;

pub use layout::{CameraLayout, Shape};

use crate::error::Result;
use crate::icon_size::IconSize;
use crate::pixmap;
use image_rs::RgbaImage;

/// Draws the camera icon at `size` on a transparent background.
///
/// # Errors
///
/// Returns [`crate::error::Error::Image`] only if the pixmap cannot be
/// allocated.
pub fn render(size: IconSize) -> Result<RgbaImage> {
    let mut canvas = pixmap::transparent(size)?;
    paint::paint_shapes(&mut canvas, &CameraLayout::for_size(size).shapes());
    Ok(pixmap::to_rgba_image(&canvas))
}
