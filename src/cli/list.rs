//! List command implementation.
//!
//! Scans a folder and prints the responsive images that `generate`
//! would emit, without writing anything.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::scan_directory;
use crate::error::{ImgsetError, Result};
use crate::generate::resolve_roots;
use crate::output::{plural, Printer};
use crate::paths::to_slash;
use crate::types::ImageCollection;

use super::ConventionArgs;

/// Preview the responsive images a folder would produce
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Input folder, scanned recursively
    pub input: PathBuf,

    /// Print collections as JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub convention: ConventionArgs,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let manifest = args.convention.resolve(&std::env::current_dir().unwrap_or_default())?;
    let (input_root, _) = resolve_roots(&args.input)?;
    let matcher = manifest.matcher(&to_slash(&input_root))?;

    let collections: Vec<ImageCollection> = scan_directory(&input_root, matcher, &manifest)?
        .into_values()
        .map(|mut c| {
            c.finalize();
            c
        })
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&collections).map_err(|e| ImgsetError::Config {
            message: format!("Failed to serialize collections: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    for collection in &collections {
        printer.info(
            &collection.module_program_safe_name,
            &format!(
                "{} {}",
                collection.module_physical_path,
                printer.dim(&format!("({})", describe(collection)))
            ),
        );
    }
    printer.status(
        "Found",
        &plural(collections.len(), "responsive image", "responsive images"),
    );

    Ok(())
}

/// Short summary like "2 variations: png 320w, png 640w".
fn describe(collection: &ImageCollection) -> String {
    let widths: Vec<String> = collection
        .variations
        .iter()
        .map(|v| format!("{} {}w", v.extension, v.width_descriptor))
        .collect();
    format!(
        "{}: {}",
        plural(collection.len(), "variation", "variations"),
        widths.join(", ")
    )
}
