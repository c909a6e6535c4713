// SPDX-License-Identifier: MPL-2.0
//! Bridges tiny-skia pixmaps and `image` buffers.

use crate::error::{Error, Result};
use crate::icon_size::IconSize;
use image_rs::{Rgba, RgbaImage};

/// Allocates a fully transparent square pixmap.
///
/// # Errors
///
/// Returns [`Error::Image`] if the pixmap cannot be allocated.
pub fn transparent(size: IconSize) -> Result<tiny_skia::Pixmap> {
    tiny_skia::Pixmap::new(size.value(), size.value())
        .ok_or_else(|| Error::Image(format!("Failed to allocate {size} pixmap")))
}

/// Copies a pixmap into an RGBA buffer.
///
/// tiny-skia stores premultiplied alpha; `image` and PNG expect straight
/// alpha, so every pixel is demultiplied.
#[must_use]
pub fn to_rgba_image(pixmap: &tiny_skia::Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}
