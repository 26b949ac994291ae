//! imgset - Responsive image module generator
//!
//! Groups image files that are the same picture at different widths
//! (`banner@320w.png`, `banner@640w.png`, ...) and generates TypeScript
//! modules exposing typed metadata for each group.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod naming;
pub mod output;
pub mod paths;
pub mod pattern;
pub mod render;
pub mod types;

pub use discovery::{collect, load_manifest, scan_directory, Collector, Manifest};
pub use error::{ImgsetError, Result};
pub use generate::{generate, GenerateOptions, GenerateReport};
pub use naming::{sanitize, IdentifierRegistry};
pub use pattern::{PatternConfig, PatternMatch, PatternMatcher};
pub use render::{render_declarations, render_module, RenderedModule};
pub use types::{ImageCollection, ImageVariation};
