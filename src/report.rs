// SPDX-License-Identifier: MPL-2.0
//! Per-size results of a generator run and the post-run output scan.

use crate::icon_size::IconSize;
use std::path::{Path, PathBuf};

/// What happened to one icon size.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeOutcome {
    pub size: IconSize,
    pub path: PathBuf,
    /// `None` on success, the printed failure reason otherwise.
    pub error: Option<String>,
}

impl SizeOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Output file name without its directory.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.size.file_name()
    }
}

/// Number of successful outcomes.
#[must_use]
pub fn success_count(outcomes: &[SizeOutcome]) -> usize {
    outcomes.iter().filter(|o| o.is_success()).count()
}

/// Re-scans `dir` and returns the output file names that exist for `sizes`,
/// in the order given.
#[must_use]
pub fn existing_outputs(dir: &Path, sizes: &[IconSize]) -> Vec<String> {
    sizes
        .iter()
        .map(|size| size.file_name())
        .filter(|name| dir.join(name).is_file())
        .collect()
}
