//! Synchronous directory scan.
//!
//! Same grouping as the async walk, driven by `walkdir`. Used for
//! previews where nothing is written.

use std::collections::BTreeMap;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{ImgsetError, Result};
use crate::paths::to_slash;
use crate::pattern::PatternMatcher;
use crate::types::ImageCollection;

use super::collector::Collector;
use super::manifest::Manifest;

/// Scan `root` recursively and group matching files by base path.
pub fn scan_directory(
    root: &Path,
    matcher: PatternMatcher,
    manifest: &Manifest,
) -> Result<BTreeMap<String, ImageCollection>> {
    let mut collector = Collector::new(matcher);

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !manifest.is_excluded(&to_slash(e.path())));

    for entry in walker {
        let entry = entry.map_err(|e| ImgsetError::Io {
            path: e.path().unwrap_or(root).to_path_buf(),
            message: format!("Failed to scan directory: {}", e),
        })?;

        if entry.file_type().is_file() {
            collector.add_path(&to_slash(entry.path()));
        }
    }

    Ok(collector.into_collections())
}
