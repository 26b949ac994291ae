//! Generate command implementation.
//!
//! Recreates `<input>-modules` with one module per responsive image.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::generate::{generate, GenerateOptions};
use crate::output::{display_path, plural, Printer};

use super::ConventionArgs;

/// Generate typed modules for every responsive image in a folder
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Input folder, scanned recursively
    pub input: PathBuf,

    #[command(flatten)]
    pub convention: ConventionArgs,
}

pub async fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let manifest = args.convention.resolve(&std::env::current_dir().unwrap_or_default())?;

    let report = generate(&GenerateOptions {
        input: args.input,
        manifest,
    })
    .await?;

    for module in &report.modules {
        printer.status("Written", &display_path(module));
    }
    printer.status(
        "Completed",
        &format!(
            "{} in {}",
            plural(report.modules.len(), "module", "modules"),
            display_path(&report.output_root)
        ),
    );

    Ok(())
}
