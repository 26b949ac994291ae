//! Filename pattern matching.
//!
//! A matcher is compiled from the input root and three configurable
//! sub-patterns, applied in fixed order after the base path:
//!
//! ```text
//! <root>(base)<art-direction><width><density>.(extension)
//! ```
//!
//! Each sub-pattern must contain exactly one capturing group.

use std::collections::BTreeSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ImgsetError, Result};

/// The three configurable sub-patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Captures the art-direction label.
    pub art_direction: String,
    /// Captures the width descriptor digits.
    pub width: String,
    /// Captures the pixel density digits.
    pub density: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            art_direction: "()".to_string(),
            width: "@([0-9]+)w".to_string(),
            density: "()".to_string(),
        }
    }
}

/// Decomposed result of a successful match.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternMatch {
    /// The whole matched path.
    pub url: String,
    /// Base path relative to the input root, without a leading separator.
    pub base_path: String,
    pub art_direction_label: String,
    pub width_descriptor: u32,
    /// `None` when the density group captured nothing.
    pub pixel_density: Option<f64>,
    pub extension: String,
}

/// Compiled filename matcher.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
    extensions: BTreeSet<String>,
}

impl PatternMatcher {
    /// Compile a matcher for files under `input_root`.
    ///
    /// Fails if a sub-pattern does not compile, does not have exactly one
    /// capturing group, or if the extension allow-list is empty.
    pub fn new(input_root: &str, config: &PatternConfig, extensions: &[String]) -> Result<Self> {
        validate_sub_pattern("art-direction", &config.art_direction)?;
        validate_sub_pattern("width", &config.width)?;
        validate_sub_pattern("density", &config.density)?;

        let extensions: BTreeSet<String> = extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if extensions.is_empty() {
            return Err(ImgsetError::Config {
                message: "No image extensions configured".to_string(),
                help: Some("Pass --extensions png,jpg or set `extensions` in imgset.yaml".to_string()),
            });
        }

        let expression = format!(
            r"^{}(.*){}{}{}\.(.*)$",
            regex::escape(input_root),
            config.art_direction,
            config.width,
            config.density
        );
        log::debug!("compiled filename pattern: {}", expression);

        let regex = Regex::new(&expression).map_err(|e| ImgsetError::Pattern {
            message: format!("Composed pattern failed to compile: {}", e),
            help: Some("Named groups must not repeat across sub-patterns".to_string()),
        })?;

        Ok(Self { regex, extensions })
    }

    /// Match a `/`-separated candidate path.
    ///
    /// Returns `None` for paths that do not fit the pattern, whose width is
    /// not a positive number, or whose extension is not allowed.
    pub fn match_path(&self, candidate: &str) -> Option<PatternMatch> {
        let caps = self.regex.captures(candidate)?;
        let text = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or("");

        let extension = text(5);
        if !self.extensions.contains(extension) {
            log::trace!("skipping {}: extension {:?} not allowed", candidate, extension);
            return None;
        }

        let width_descriptor = match text(3).parse::<u32>() {
            Ok(width) if width > 0 => width,
            _ => {
                log::trace!("skipping {}: width {:?} is not a positive number", candidate, text(3));
                return None;
            }
        };

        let density = text(4);
        let pixel_density = if density.is_empty() {
            None
        } else {
            density.parse::<f64>().ok()
        };

        Some(PatternMatch {
            url: text(0).to_string(),
            base_path: text(1).trim_start_matches('/').to_string(),
            art_direction_label: text(2).to_string(),
            width_descriptor,
            pixel_density,
            extension: extension.to_string(),
        })
    }

    /// The allowed extensions, sorted.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(|s| s.as_str())
    }
}

/// Check that a sub-pattern compiles and has exactly one capturing group.
fn validate_sub_pattern(name: &str, pattern: &str) -> Result<()> {
    let regex = Regex::new(pattern).map_err(|e| ImgsetError::Pattern {
        message: format!("Invalid {} pattern {:?}: {}", name, pattern, e),
        help: None,
    })?;

    // captures_len includes the implicit whole-match group
    let groups = regex.captures_len() - 1;
    if groups != 1 {
        return Err(ImgsetError::Pattern {
            message: format!(
                "The {} pattern {:?} has {} capturing groups, expected exactly 1",
                name, pattern, groups
            ),
            help: Some("Use (?:...) for grouping that should not capture".to_string()),
        });
    }

    Ok(())
}
