//! File discovery and grouping for imgset.
//!
//! This module finds width-suffixed image files under an input folder and
//! groups them into one [`ImageCollection`](crate::types::ImageCollection)
//! per base path. The filename convention comes from an optional
//! `imgset.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use imgset::discovery::{load_manifest, scan_directory};
//!
//! let (manifest, _) = load_manifest(None, ".")?;
//! let matcher = manifest.matcher("assets/img")?;
//! let collections = scan_directory("assets/img".as_ref(), matcher, &manifest)?;
//! ```

mod collector;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pattern::PatternMatcher;

pub use collector::{collect, Collector};
pub use manifest::Manifest;
pub use scanner::scan_directory;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "imgset.yaml";

impl Manifest {
    /// Compile a matcher for files under `input_root` using this manifest's convention.
    pub fn matcher(&self, input_root: &str) -> Result<PatternMatcher> {
        PatternMatcher::new(input_root, &self.patterns, &self.extensions)
    }
}

/// Load the manifest to use for a run.
///
/// An explicit path must exist. Otherwise `imgset.yaml` in `dir` is used
/// when present, falling back to the defaults. The flag reports whether a
/// manifest file was read.
pub fn load_manifest(explicit: Option<&Path>, dir: impl AsRef<Path>) -> Result<(Manifest, bool)> {
    if let Some(path) = explicit {
        return Ok((Manifest::load(path)?, true));
    }

    let path: PathBuf = dir.as_ref().join(MANIFEST_FILENAME);
    if path.is_file() {
        log::debug!("using manifest {}", path.display());
        Ok((Manifest::load(&path)?, true))
    } else {
        Ok((Manifest::default(), false))
    }
}
