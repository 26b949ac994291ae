//! Project manifest (imgset.yaml) parsing.
//!
//! The manifest holds the filename convention: which extensions count as
//! images, the three descriptor sub-patterns, and paths to leave out.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ImgsetError, Result};
use crate::pattern::PatternConfig;

/// Project manifest loaded from imgset.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Image extensions to process, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Descriptor sub-patterns.
    #[serde(default)]
    pub patterns: PatternConfig,

    /// Patterns to exclude from discovery.
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "webp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            patterns: PatternConfig::default(),
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from an imgset.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ImgsetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ImgsetError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check imgset.yaml syntax".to_string()),
        })
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ImgsetError::Config {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(path, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.starts_with(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir));
            }
            return path.ends_with(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }
}
