// SPDX-License-Identifier: MPL-2.0
//! Rasterizer: turns the extension's SVG icon into one PNG per size.
//!
//! A missing source aborts the run before anything is written. Any other
//! failure is confined to the size it happened at; the remaining sizes are
//! still generated.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::icon_size::IconSize;
use crate::png::save_png;
use crate::report::{existing_outputs, SizeOutcome};
use crate::svg;
use std::env;
use std::path::{Path, PathBuf};

/// Resolved inputs of one rasterizer run.
#[derive(Debug, Clone)]
pub struct Generator {
    svg_path: PathBuf,
    output_dir: PathBuf,
    sizes: Vec<IconSize>,
}

impl Generator {
    #[must_use]
    pub fn new(svg_path: PathBuf, output_dir: PathBuf, sizes: Vec<IconSize>) -> Self {
        Self {
            svg_path,
            output_dir,
            sizes,
        }
    }

    /// Resolves `config` against `default_dir`, the directory used when the
    /// configuration names no source directory. Outputs go next to the
    /// source unless an output directory is configured.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configured sizes are invalid.
    pub fn from_config(config: &Config, default_dir: &Path) -> Result<Self> {
        let source_dir = config
            .source_dir
            .clone()
            .unwrap_or_else(|| default_dir.to_path_buf());
        let output_dir = config
            .output_dir
            .clone()
            .unwrap_or_else(|| source_dir.clone());
        Ok(Self::new(
            source_dir.join(&config.svg_file),
            output_dir,
            config.icon_sizes()?,
        ))
    }

    #[must_use]
    pub fn svg_path(&self) -> &Path {
        &self.svg_path
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Output path for one size.
    #[must_use]
    pub fn output_path(&self, size: IconSize) -> PathBuf {
        self.output_dir.join(size.file_name())
    }

    /// Generates every size in ascending order, printing progress and a
    /// summary of the files present afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceNotFound`] without writing anything when the
    /// SVG does not exist. Per-size failures are reported in the returned
    /// outcomes instead.
    pub fn run(&self) -> Result<Vec<SizeOutcome>> {
        if !self.svg_path.exists() {
            return Err(Error::SourceNotFound(self.svg_path.clone()));
        }

        println!("Generating Chrome extension icons...");

        let mut outcomes = Vec::with_capacity(self.sizes.len());
        for &size in &self.sizes {
            let path = self.output_path(size);
            let name = size.file_name();
            let error = if svg_to_png(&self.svg_path, &path, size) {
                println!("✓ {name}");
                None
            } else {
                let message = format!("Failed to generate {name}");
                println!("✗ {message}");
                Some(message)
            };
            outcomes.push(SizeOutcome { size, path, error });
        }

        println!("\nIcon generation complete!");
        println!("Files created:");
        for name in existing_outputs(&self.output_dir, &self.sizes) {
            println!("  - {name}");
        }

        Ok(outcomes)
    }
}

/// Rasterizes `svg_path` at `size` and writes it to `png_path`.
///
/// # Errors
///
/// Returns an error if the SVG cannot be read or rendered or the PNG cannot
/// be written.
pub fn convert(svg_path: &Path, png_path: &Path, size: IconSize) -> Result<()> {
    let image = svg::rasterize_file(svg_path, size)?;
    save_png(&image, png_path)
}

/// Converts one size, printing the failure instead of returning it.
///
/// Returns `true` when the PNG was written.
pub fn svg_to_png(svg_path: &Path, png_path: &Path, size: IconSize) -> bool {
    match convert(svg_path, png_path, size) {
        Ok(()) => {
            println!("Generated: {} ({size})", png_path.display());
            true
        }
        Err(e) => {
            println!("Error generating {}: {e}", png_path.display());
            false
        }
    }
}

/// Directory containing the running executable, where the rasterizer looks
/// for its source by default.
///
/// # Errors
///
/// Returns [`Error::Io`] if the executable path cannot be determined.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::Io(format!("{} has no parent directory", exe.display())))
}
