// SPDX-License-Identifier: MPL-2.0
//! Procedural drawer: renders the camera icon once per size and saves it.
//!
//! Drawing itself cannot fail; a failed save is printed and the next size
//! is processed regardless.

use crate::camera;
use crate::error::Result;
use crate::icon_size::IconSize;
use crate::png::save_png;
use crate::report::SizeOutcome;
use std::path::Path;

/// Draws and saves one icon as `{dir}/icon{size}.png`.
///
/// # Errors
///
/// Returns an error if the PNG cannot be written.
pub fn create_icon(dir: &Path, size: IconSize) -> Result<()> {
    let image = camera::render(size)?;
    save_png(&image, dir.join(size.file_name()))
}

/// Creates every size in `sizes` inside `dir`, printing one line per size.
pub fn create_icons(dir: &Path, sizes: &[IconSize]) -> Vec<SizeOutcome> {
    println!("Creating simple PNG icons...");

    let outcomes = sizes
        .iter()
        .map(|&size| {
            let name = size.file_name();
            let error = match create_icon(dir, size) {
                Ok(()) => {
                    println!("✓ Created {name}");
                    None
                }
                Err(e) => {
                    println!("✗ Failed to create {name}: {e}");
                    Some(e.to_string())
                }
            };
            SizeOutcome {
                size,
                path: dir.join(name),
                error,
            }
        })
        .collect();

    println!("\nIcon creation complete!");
    outcomes
}
