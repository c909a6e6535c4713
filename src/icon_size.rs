// SPDX-License-Identifier: MPL-2.0
//! Icon size newtype.
//!
//! Wraps the pixel edge length of a square icon, guaranteeing it is never
//! zero, and carries the proportional scaling used by the procedural drawer.

use crate::config::defaults::{OUTPUT_FILE_PREFIX, OUTPUT_FILE_SUFFIX, REFERENCE_SIZE};
use crate::error::{Error, Result};
use std::fmt;

/// Edge length in pixels of a square icon, guaranteed to be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconSize(u32);

impl IconSize {
    /// Creates a new icon size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] when `pixels` is zero.
    pub fn new(pixels: u32) -> Result<Self> {
        if pixels == 0 {
            return Err(Error::InvalidSize(pixels));
        }
        Ok(Self(pixels))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Scales a length given at the 128 px reference size down (or up) to
    /// this size, flooring the result.
    ///
    /// Integer arithmetic is used so `⌊reference × size / 128⌋` is exact for
    /// every size, not only powers of two.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn scale(self, reference: u32) -> u32 {
        // Widened so large custom sizes cannot overflow the product.
        (u64::from(reference) * u64::from(self.0) / u64::from(REFERENCE_SIZE)) as u32
    }

    /// Like [`scale`](Self::scale), but never below one pixel.
    #[must_use]
    pub fn scale_min_one(self, reference: u32) -> u32 {
        self.scale(reference).max(1)
    }

    /// Midpoint of the icon on either axis (floored).
    #[must_use]
    pub fn center(self) -> u32 {
        self.0 / 2
    }

    /// Output file name for this size, e.g. `icon48.png`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}{}{}", OUTPUT_FILE_PREFIX, self.0, OUTPUT_FILE_SUFFIX)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

impl TryFrom<u32> for IconSize {
    type Error = Error;

    fn try_from(pixels: u32) -> Result<Self> {
        Self::new(pixels)
    }
}

/// Validates a list of raw sizes, returning them ascending and deduplicated.
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] for the first zero entry.
pub fn normalize_sizes(raw: &[u32]) -> Result<Vec<IconSize>> {
    let mut sizes = raw
        .iter()
        .map(|&pixels| IconSize::new(pixels))
        .collect::<Result<Vec<_>>>()?;
    sizes.sort_unstable();
    sizes.dedup();
    Ok(sizes)
}
