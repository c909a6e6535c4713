// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the values both
//! generators use when no configuration file is given.
//!
//! # Categories
//!
//! - **Sizes**: Icon resolutions produced for extension packaging
//! - **Files**: Source and output file naming

// ==========================================================================
// Size Defaults
// ==========================================================================

/// Icon resolutions (square, in pixels) a browser extension ships.
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Size at which the procedural drawing's reference coordinates are defined.
pub const REFERENCE_SIZE: u32 = 128;

// ==========================================================================
// File Defaults
// ==========================================================================

/// Vector source read by the rasterizer, next to the executable.
pub const DEFAULT_SVG_FILE: &str = "icon.svg";

/// Output files are named `{prefix}{size}{suffix}`.
pub const OUTPUT_FILE_PREFIX: &str = "icon";

/// See [`OUTPUT_FILE_PREFIX`].
pub const OUTPUT_FILE_SUFFIX: &str = ".png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sizes_are_ascending() {
        assert!(DEFAULT_SIZES.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn reference_size_is_the_largest_default() {
        assert_eq!(DEFAULT_SIZES.iter().max(), Some(&REFERENCE_SIZE));
    }
}
