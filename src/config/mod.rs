// SPDX-License-Identifier: MPL-2.0
//! This module handles the generators' configuration. Every field has a
//! default reproducing the fixed behaviour (sizes 16/32/48/128, `icon.svg`),
//! so a configuration file is optional and may be partial.
//!
//! # Examples
//!
//! ```no_run
//! use extension_icons::config::{self, Config};
//! use std::path::Path;
//!
//! let mut config = Config::default();
//! config.sizes = vec![16, 32, 48, 128, 256];
//!
//! config::save_to_path(&config, Path::new("icons.toml")).expect("Failed to save config");
//! let loaded = config::load_from_path(Path::new("icons.toml")).expect("Failed to load config");
//! assert_eq!(loaded.sizes, config.sizes);
//! ```

pub mod defaults;

use crate::error::{Error, Result};
use crate::icon_size::{normalize_sizes, IconSize};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{DEFAULT_SIZES, DEFAULT_SVG_FILE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Icon edge lengths in pixels.
    pub sizes: Vec<u32>,
    /// File name of the vector source, relative to `source_dir`.
    pub svg_file: String,
    /// Directory holding the vector source. Defaults to the executable's
    /// directory for the rasterizer.
    pub source_dir: Option<PathBuf>,
    /// Where PNGs are written. Defaults to `source_dir` for the rasterizer
    /// and to the working directory for the procedural drawer.
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            svg_file: DEFAULT_SVG_FILE.to_string(),
            source_dir: None,
            output_dir: None,
        }
    }
}

impl Config {
    /// Validated sizes, ascending and without duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the list is empty or contains a zero.
    pub fn icon_sizes(&self) -> Result<Vec<IconSize>> {
        if self.sizes.is_empty() {
            return Err(Error::Config("`sizes` must not be empty".into()));
        }
        normalize_sizes(&self.sizes).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Loads a configuration file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not valid TOML or its sizes are invalid.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.icon_sizes()?;
    Ok(config)
}

/// Writes a configuration file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Returns the file at `path` if given, the defaults otherwise.
///
/// # Errors
///
/// See [`load_from_path`].
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_from_path(path),
        None => Ok(Config::default()),
    }
}
