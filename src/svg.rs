// SPDX-License-Identifier: MPL-2.0
//! SVG loading and rasterization.
//!
//! The source is parsed with usvg and rendered by resvg into a square
//! tiny-skia pixmap, stretched independently on each axis so the output is
//! exactly the requested size whatever the document's aspect ratio.

use crate::error::{Error, Result};
use crate::icon_size::IconSize;
use crate::pixmap;
use image_rs::RgbaImage;
use resvg::usvg;
use std::fs;
use std::path::Path;

/// Parses the SVG at `path`.
///
/// Relative references inside the document (embedded images) resolve
/// against the file's directory, and `<text>` is shaped with the system
/// fonts.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Svg`] if
/// it cannot be parsed.
pub fn load_svg<P: AsRef<Path>>(path: P) -> Result<usvg::Tree> {
    let path = path.as_ref();
    let svg_data = fs::read(path)?;

    let mut options = usvg::Options {
        resources_dir: fs::canonicalize(path)
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf)),
        ..usvg::Options::default()
    };
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_data(&svg_data, &options)?;
    Ok(tree)
}

/// Renders `tree` onto a transparent `size`×`size` RGBA buffer.
///
/// # Errors
///
/// Returns [`Error::Svg`] if the document has an empty size and
/// [`Error::Image`] if the pixmap cannot be allocated.
pub fn render(tree: &usvg::Tree, size: IconSize) -> Result<RgbaImage> {
    let target = size.value();
    let orig_size = tree.size();
    if orig_size.width() <= 0.0 || orig_size.height() <= 0.0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = pixmap::transparent(size)?;
    resvg::render(tree, transform, &mut pixmap.as_mut());

    Ok(pixmap::to_rgba_image(&pixmap))
}

/// Convenience for [`load_svg`] followed by [`render`].
///
/// # Errors
///
/// See [`load_svg`] and [`render`].
pub fn rasterize_file<P: AsRef<Path>>(path: P, size: IconSize) -> Result<RgbaImage> {
    let tree = load_svg(path)?;
    render(&tree, size)
}
