pub mod completions;
pub mod generate;
pub mod init;
pub mod list;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::discovery::{load_manifest, Manifest};
use crate::error::Result;

/// imgset - Responsive image module generator
#[derive(Parser, Debug)]
#[command(name = "imgset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate typed modules for every responsive image in a folder
    Generate(generate::GenerateArgs),

    /// Preview the responsive images a folder would produce
    List(list::ListArgs),

    /// Write a default imgset.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Filename convention flags shared by `generate` and `list`.
#[derive(Args, Debug, Clone, Default)]
pub struct ConventionArgs {
    /// Manifest to read instead of ./imgset.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Image extensions to process (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Art-direction pattern (exactly one capturing group)
    #[arg(long)]
    pub art_direction: Option<String>,

    /// Width pattern (exactly one capturing group)
    #[arg(long)]
    pub width: Option<String>,

    /// Pixel density pattern (exactly one capturing group)
    #[arg(long)]
    pub density: Option<String>,
}

impl ConventionArgs {
    /// Load the manifest and apply flag overrides on top.
    pub fn resolve(&self, dir: &Path) -> Result<Manifest> {
        let (mut manifest, _) = load_manifest(self.config.as_deref(), dir)?;

        if let Some(extensions) = &self.extensions {
            manifest.extensions = extensions.clone();
        }
        if let Some(pattern) = &self.art_direction {
            manifest.patterns.art_direction = pattern.clone();
        }
        if let Some(pattern) = &self.width {
            manifest.patterns.width = pattern.clone();
        }
        if let Some(pattern) = &self.density {
            manifest.patterns.density = pattern.clone();
        }

        Ok(manifest)
    }
}
