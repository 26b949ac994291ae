//! Generation pipeline.
//!
//! Collects image collections from the input folder while the previous
//! output folder is removed, then writes the shared declaration file and
//! one module per collection into `<input>-modules`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::task::JoinSet;

use crate::discovery::{collect, Manifest};
use crate::error::{ImgsetError, Result};
use crate::paths::{normalize, to_slash};
use crate::render::{
    module_output_path, render_declarations, render_module, RenderedModule, DECLARATION_FILENAME,
};
use crate::types::ImageCollection;

/// Suffix appended to the input folder name to form the output folder.
pub const OUTPUT_SUFFIX: &str = "-modules";

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Folder to scan recursively.
    pub input: PathBuf,
    /// Filename convention and excludes.
    pub manifest: Manifest,
}

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub declaration_path: PathBuf,
    /// Written module paths, sorted.
    pub modules: Vec<PathBuf>,
}

/// Resolve the input folder and derive its sibling output folder.
pub fn resolve_roots(input: &Path) -> Result<(PathBuf, PathBuf)> {
    let cwd = std::env::current_dir().ok();
    let input_root = normalize(input, cwd.as_deref());

    let Some(name) = input_root.file_name() else {
        return Err(ImgsetError::Config {
            message: format!("Input folder {:?} has no name to derive an output folder from", input),
            help: Some("Pass the image folder itself, e.g. `imgset generate assets/img`".to_string()),
        });
    };

    let mut output_name = name.to_os_string();
    output_name.push(OUTPUT_SUFFIX);
    let output_root = input_root.with_file_name(output_name);

    Ok((input_root, output_root))
}

/// Run the whole pipeline. The first error aborts the run.
pub async fn generate(options: &GenerateOptions) -> Result<GenerateReport> {
    let (input_root, output_root) = resolve_roots(&options.input)?;
    let matcher = options.manifest.matcher(&to_slash(&input_root))?;

    log::debug!(
        "generating {} -> {}",
        input_root.display(),
        output_root.display()
    );

    // Disjoint subtrees: the input is only read, the old output only removed.
    let (collections, ()) = tokio::try_join!(
        collect(&input_root, matcher, &options.manifest),
        remove_output(&output_root),
    )?;

    let declaration_path = output_root.join(DECLARATION_FILENAME);
    check_declaration_clash(collections.values(), &output_root, &declaration_path)?;

    fs::create_dir_all(&output_root)
        .await
        .map_err(|e| ImgsetError::io(&output_root, "Failed to create output directory", e))?;

    fs::write(&declaration_path, render_declarations())
        .await
        .map_err(|e| ImgsetError::io(&declaration_path, "Failed to write declarations", e))?;

    let mut tasks = JoinSet::new();
    for collection in collections.into_values() {
        let output_root = output_root.clone();
        let declaration_path = declaration_path.clone();
        tasks.spawn(async move {
            let rendered = render_module(collection, &output_root, &declaration_path);
            write_module(rendered).await
        });
    }

    let mut modules = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let path = joined.map_err(|e| ImgsetError::Task {
            message: format!("Module writer did not finish: {}", e),
        })??;
        modules.push(path);
    }
    modules.sort();

    Ok(GenerateReport {
        input_root,
        output_root,
        declaration_path,
        modules,
    })
}

/// Fail if a module would be written over (or beneath) the shared declaration file.
fn check_declaration_clash<'a>(
    collections: impl IntoIterator<Item = &'a ImageCollection>,
    output_root: &Path,
    declaration_path: &Path,
) -> Result<()> {
    for collection in collections {
        let module_path = module_output_path(output_root, &collection.module_physical_path);
        if module_path.starts_with(declaration_path) {
            let sources: Vec<&str> = collection
                .variations
                .iter()
                .map(|v| v.physical_path.as_str())
                .collect();
            return Err(ImgsetError::Config {
                message: format!(
                    "Module for {:?} would overwrite the shared declarations at {}",
                    collection.module_physical_path,
                    declaration_path.display()
                ),
                help: Some(format!("Rename or exclude {}", sources.join(", "))),
            });
        }
    }
    Ok(())
}

/// Remove a previous output tree. A missing tree is fine.
async fn remove_output(output_root: &Path) -> Result<()> {
    match fs::remove_dir_all(output_root).await {
        Ok(()) => {
            log::debug!("removed {}", output_root.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ImgsetError::io(output_root, "Failed to remove output directory", e)),
    }
}

async fn write_module(rendered: RenderedModule) -> Result<PathBuf> {
    if let Some(parent) = rendered.output_path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ImgsetError::io(parent, "Failed to create module directory", e))?;
    }

    fs::write(&rendered.output_path, rendered.contents.as_bytes())
        .await
        .map_err(|e| ImgsetError::io(&rendered.output_path, "Failed to write module", e))?;

    log::debug!("wrote {}", rendered.output_path.display());
    Ok(rendered.output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternConfig;
    use std::collections::BTreeMap;
    use std::fs as std_fs;
    use tempfile::tempdir;
    use walkdir::WalkDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std_fs::create_dir_all(path.parent().unwrap()).unwrap();
        std_fs::write(path, b"").unwrap();
    }

    fn options(input: &Path) -> GenerateOptions {
        GenerateOptions {
            input: input.to_path_buf(),
            manifest: Manifest::default(),
        }
    }

    fn read_tree(root: &Path) -> BTreeMap<PathBuf, String> {
        WalkDir::new(root)
            .into_iter()
            .map(|e| e.unwrap())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let relative = e.path().strip_prefix(root).unwrap().to_path_buf();
                (relative, std_fs::read_to_string(e.path()).unwrap())
            })
            .collect()
    }

    /// Import specifiers (`from '...'`) in a generated module.
    fn specifiers(contents: &str) -> Vec<String> {
        contents
            .lines()
            .filter(|l| l.starts_with("import "))
            .filter_map(|l| l.rsplit_once(" from '"))
            .map(|(_, rest)| rest.trim_end_matches('\'').to_string())
            .collect()
    }

    #[test]
    fn test_resolve_roots_sibling_output() {
        let (input, output) = resolve_roots(Path::new("./assets/img/")).unwrap();
        assert_eq!(input, PathBuf::from("assets/img"));
        assert_eq!(output, PathBuf::from("assets/img-modules"));
    }

    #[test]
    fn test_resolve_roots_rejects_current_dir() {
        let err = resolve_roots(Path::new(".")).unwrap_err();
        assert!(matches!(err, ImgsetError::Config { .. }));
    }

    #[tokio::test]
    async fn test_scenario_banner_widths() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("img");
        touch(&input, "banner@320w.png");
        touch(&input, "banner@640w.png");

        let report = generate(&options(&input)).await.unwrap();

        assert_eq!(report.output_root, dir.path().join("img-modules"));
        assert_eq!(report.modules, vec![dir.path().join("img-modules/banner.ts")]);

        let contents = std_fs::read_to_string(&report.modules[0]).unwrap();
        let w320 = contents.find("export const banner320Png").unwrap();
        let w640 = contents.find("export const banner640Png").unwrap();
        assert!(w320 < w640);
        assert!(contents.contains("export const banner: ResponsiveImage = [\n  banner320Png,\n  banner640Png,\n]"));
        assert!(contents.ends_with("export default banner\n"));
    }

    #[tokio::test]
    async fn test_scenario_no_descriptor() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("img");
        touch(&input, "logo.png");

        let report = generate(&options(&input)).await.unwrap();

        assert!(report.modules.is_empty());
        let tree = read_tree(&report.output_root);
        assert_eq!(tree.len(), 1);
        assert!(tree.contains_key(Path::new(DECLARATION_FILENAME)));
    }

    #[tokio::test]
    async fn test_scenario_same_width_two_extensions() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("img");
        touch(&input, "hero@1x.png");
        touch(&input, "hero@1x.jpg");

        let manifest = Manifest {
            extensions: vec!["png".to_string(), "jpg".to_string()],
            patterns: PatternConfig {
                width: "@([0-9]+)x".to_string(),
                ..Default::default()
            },
            excludes: vec![],
        };
        let report = generate(&GenerateOptions { input, manifest }).await.unwrap();

        assert_eq!(report.modules.len(), 1);
        let contents = std_fs::read_to_string(&report.modules[0]).unwrap();
        assert!(contents.contains("export const hero: ResponsiveImage = [\n  hero1Jpg,\n  hero1Png,\n]"));
        assert_eq!(contents.matches("widthDescriptor: 1,").count(), 2);
    }

    #[tokio::test]
    async fn test_scenario_deleted_source_is_dropped() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("img");
        touch(&input, "banner@320w.png");
        touch(&input, "banner@640w.png");
        touch(&input, "icons/star@16w.png");

        let first = generate(&options(&input)).await.unwrap();
        assert_eq!(first.modules.len(), 2);

        std_fs::remove_file(input.join("banner@640w.png")).unwrap();
        std_fs::remove_file(input.join("icons/star@16w.png")).unwrap();

        let second = generate(&options(&input)).await.unwrap();
        assert_eq!(second.modules, vec![dir.path().join("img-modules/banner.ts")]);

        let contents = std_fs::read_to_string(&second.modules[0]).unwrap();
        assert!(!contents.contains("banner640Png"));
        assert!(!dir.path().join("img-modules/icons/star.ts").exists());
    }

    #[tokio::test]
    async fn test_generation_is_idempotent() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("img");
        touch(&input, "banner@320w.png");
        touch(&input, "banner@640w.webp");
        touch(&input, "a/b/c/deep@100w.jpg");
        touch(&input, "a/side@50w.png");

        let first = generate(&options(&input)).await.unwrap();
        let before = read_tree(&first.output_root);
        let second = generate(&options(&input)).await.unwrap();
        let after = read_tree(&second.output_root);

        assert_eq!(first, second);
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_imports_resolve_at_every_depth() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("img");
        touch(&input, "top@100w.png");
        touch(&input, "one/mid@200w.png");
        touch(&input, "one/two/three/deep@300w.png");

        let report = generate(&options(&input)).await.unwrap();
        assert_eq!(report.modules.len(), 3);

        for module in &report.modules {
            let module_dir = module.parent().unwrap();
            let contents = std_fs::read_to_string(module).unwrap();
            let specs = specifiers(&contents);

            let declaration = normalize(&module_dir.join(&specs[0]), None);
            assert_eq!(declaration, report.declaration_path);
            assert!(specs[0].starts_with("./") || specs[0].starts_with("../"));

            for asset in &specs[1..] {
                assert!(normalize(&module_dir.join(asset), None).is_file(), "{}", asset);
            }
        }
    }

    #[tokio::test]
    async fn test_stale_output_is_removed() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("img");
        touch(&input, "banner@320w.png");
        touch(&dir.path().join("img-modules"), "old/stale.ts");

        generate(&options(&input)).await.unwrap();

        assert!(!dir.path().join("img-modules/old").exists());
    }

    #[tokio::test]
    async fn test_invalid_pattern_touches_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("img");
        touch(&input, "banner@320w.png");
        touch(&dir.path().join("img-modules"), "keep.ts");

        let manifest = Manifest {
            patterns: PatternConfig {
                width: "@[0-9]+w".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = generate(&GenerateOptions { input, manifest }).await.unwrap_err();

        assert!(matches!(err, ImgsetError::Pattern { .. }));
        assert!(dir.path().join("img-modules/keep.ts").exists());
    }

    #[tokio::test]
    async fn test_module_named_like_declarations_is_rejected() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("img");
        touch(&input, "interface@320w.png");
        touch(&input, "banner@320w.png");

        let err = generate(&options(&input)).await.unwrap_err();

        assert!(matches!(err, ImgsetError::Config { .. }));
        assert!(err.to_string().contains("shared declarations"));
        assert!(!dir.path().join("img-modules").exists());
    }

    #[tokio::test]
    async fn test_nested_interface_module_is_allowed() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("img");
        touch(&input, "ui/interface@320w.png");

        let report = generate(&options(&input)).await.unwrap();

        assert_eq!(report.modules, vec![dir.path().join("img-modules/ui/interface.ts")]);
        let declarations = std_fs::read_to_string(&report.declaration_path).unwrap();
        assert!(declarations.contains("export interface ImageVariation"));
    }

    #[tokio::test]
    async fn test_missing_input_fails() {
        let dir = tempdir().unwrap();

        let result = generate(&options(&dir.path().join("missing"))).await;

        assert!(matches!(result, Err(ImgsetError::Io { .. })));
    }
}
