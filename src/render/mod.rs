//! Code generation for imgset.
//!
//! Turns image collections into TypeScript modules and renders the shared
//! declaration file they all import.

mod declarations;
mod module;

pub use declarations::{render_declarations, DECLARATION_FILENAME};
pub use module::{module_output_path, render_module, RenderedModule, MODULE_EXTENSION};
