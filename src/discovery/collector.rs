//! Groups matched image files into collections.
//!
//! The [`Collector`] itself is traversal-agnostic; [`collect`] feeds it
//! from an async directory walk and `scan_directory` from `walkdir`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{ImgsetError, Result};
use crate::naming::sanitize;
use crate::paths::to_slash;
use crate::pattern::PatternMatcher;
use crate::types::{ImageCollection, ImageVariation};

use super::manifest::Manifest;

/// Accumulates variations per base path.
#[derive(Debug)]
pub struct Collector {
    matcher: PatternMatcher,
    collections: BTreeMap<String, ImageCollection>,
}

impl Collector {
    pub fn new(matcher: PatternMatcher) -> Self {
        Self {
            matcher,
            collections: BTreeMap::new(),
        }
    }

    /// Offer a `/`-separated file path. Returns whether it was collected.
    pub fn add_path(&mut self, path: &str) -> bool {
        let Some(m) = self.matcher.match_path(path) else {
            return false;
        };

        let identifier = sanitize(&format!(
            "{}_{}_{}",
            m.base_path, m.width_descriptor, m.extension
        ));

        // Density and art-direction are parsed but not yet carried over.
        let variation = ImageVariation {
            physical_path: path.to_string(),
            identifier,
            url: m.url,
            extension: m.extension,
            width_descriptor: m.width_descriptor,
            pixel_density: 1.0,
            art_direction_label: String::new(),
        };

        log::trace!("collected {} into {:?}", path, m.base_path);
        self.collections
            .entry(m.base_path.clone())
            .or_insert_with(|| ImageCollection::new(m.base_path.clone(), sanitize(&m.base_path)))
            .push(variation);
        true
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Finish collecting, keyed by base path.
    pub fn into_collections(self) -> BTreeMap<String, ImageCollection> {
        self.collections
    }
}

/// Walk `root` asynchronously and collect every matching file.
///
/// Uses an explicit work stack; any IO error aborts the walk.
pub async fn collect(
    root: &Path,
    matcher: PatternMatcher,
    manifest: &Manifest,
) -> Result<BTreeMap<String, ImageCollection>> {
    let mut collector = Collector::new(matcher);
    let mut stack: Vec<PathBuf> = vec![root.to_path_buf()];
    let mut files = 0usize;

    while let Some(dir) = stack.pop() {
        let mut entries = fs::read_dir(&dir)
            .await
            .map_err(|e| ImgsetError::io(&dir, "Failed to read directory", e))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ImgsetError::io(&dir, "Failed to read directory entry", e))?
        {
            let path = entry.path();
            let text = to_slash(&path);
            if manifest.is_excluded(&text) {
                log::debug!("excluded {}", text);
                continue;
            }

            let file_type = entry
                .file_type()
                .await
                .map_err(|e| ImgsetError::io(&path, "Failed to read file type", e))?;

            if file_type.is_dir() {
                stack.push(path);
            } else if file_type.is_file() {
                files += 1;
                collector.add_path(&text);
            }
        }
    }

    log::debug!(
        "walked {} file(s) under {}, {} collection(s)",
        files,
        root.display(),
        collector.len()
    );
    Ok(collector.into_collections())
}
