//! Renders one TypeScript module per image collection.

use std::path::{Path, PathBuf};

use crate::paths::import_specifier;
use crate::types::{ImageCollection, ImageVariation};

/// Extension of generated modules.
pub const MODULE_EXTENSION: &str = "ts";

/// Text of one generated module and where it belongs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedModule {
    pub output_path: PathBuf,
    pub contents: String,
}

/// Where the module for `module_physical_path` is written.
pub fn module_output_path(output_root: &Path, module_physical_path: &str) -> PathBuf {
    output_root.join(format!("{}.{}", module_physical_path, MODULE_EXTENSION))
}

/// Render the module for one collection.
///
/// The collection is finalized first (canonical order, unique export
/// names), so the output does not depend on discovery order.
pub fn render_module(
    mut collection: ImageCollection,
    output_root: &Path,
    declaration_path: &Path,
) -> RenderedModule {
    collection.finalize();

    let output_path = module_output_path(output_root, &collection.module_physical_path);
    let module_dir = output_path.parent().unwrap_or(output_root);

    let mut out = String::new();

    out.push_str(&format!(
        "import type {{ ImageVariation, ResponsiveImage }} from {}\n",
        js_string(&import_specifier(module_dir, declaration_path))
    ));
    out.push('\n');

    for v in &collection.variations {
        let asset = import_specifier(module_dir, Path::new(&v.physical_path));
        out.push_str(&format!(
            "import {} from {}\n",
            url_binding(v),
            js_string(&asset)
        ));
    }

    for v in &collection.variations {
        out.push('\n');
        out.push_str(&render_variation(v));
    }

    let aggregate = &collection.module_program_safe_name;
    out.push('\n');
    out.push_str(&format!("export const {}: ResponsiveImage = [\n", aggregate));
    for v in &collection.variations {
        out.push_str(&format!("  {},\n", v.identifier));
    }
    out.push_str("]\n");
    out.push('\n');
    out.push_str(&format!("export default {}\n", aggregate));

    RenderedModule {
        output_path,
        contents: out,
    }
}

fn render_variation(v: &ImageVariation) -> String {
    format!(
        "export const {id}: ImageVariation = {{\n  physicalPath: {path},\n  identifier: {id_str},\n  url: {url},\n  artDirectionLabel: {label},\n  widthDescriptor: {width},\n  pixelDensity: {density},\n  extension: {ext},\n}}\n",
        id = v.identifier,
        path = js_string(&v.physical_path),
        id_str = js_string(&v.identifier),
        url = url_binding(v),
        label = js_string(&v.art_direction_label),
        width = v.width_descriptor,
        density = v.pixel_density,
        ext = js_string(&v.extension),
    )
}

/// Private binding for the imported asset. `$` never appears in sanitized
/// identifiers, so these cannot clash with exports.
fn url_binding(v: &ImageVariation) -> String {
    format!("url${}", v.identifier)
}

/// Single-quoted JavaScript string literal.
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}
