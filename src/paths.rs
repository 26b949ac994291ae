//! Lexical path helpers.
//!
//! Nothing here touches the filesystem: generated import specifiers must
//! be derived from path text alone so output is identical across machines.

use std::path::{Component, Path, PathBuf};

/// Normalize a path lexically.
///
/// Drops `.` components, folds `name/..` pairs and, when `cwd` is given,
/// turns absolute paths under `cwd` into relative ones.
pub fn normalize(path: &Path, cwd: Option<&Path>) -> PathBuf {
    let path = match cwd {
        Some(cwd) if path.is_absolute() => path.strip_prefix(cwd).unwrap_or(path),
        _ => path,
    };

    let mut out: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    out.iter().collect()
}

/// Path of `to` relative to the directory `from_dir`.
///
/// Both paths must be normalized the same way (both relative to the same
/// base, or both absolute).
pub fn relative_path(from_dir: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from_dir.components().collect();
    let to: Vec<Component> = to.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..from.len() {
        out.push("..");
    }
    for component in &to[common..] {
        out.push(component.as_os_str());
    }
    out
}

/// Bundler import specifier for `to`, as seen from a module in `from_dir`.
///
/// Specifiers that do not already climb with `..` get an explicit `./`
/// so they are never read as package imports.
pub fn import_specifier(from_dir: &Path, to: &Path) -> String {
    let relative = to_slash(&relative_path(from_dir, to));
    if relative == ".." || relative.starts_with("../") {
        relative
    } else {
        format!("./{}", relative)
    }
}

/// Render a path with `/` separators regardless of platform.
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    let mut needs_separator = false;

    for component in path.components() {
        let segment = match component {
            Component::Prefix(prefix) => {
                out.push_str(&prefix.as_os_str().to_string_lossy());
                continue;
            }
            Component::RootDir => {
                out.push('/');
                needs_separator = false;
                continue;
            }
            Component::CurDir => ".".into(),
            Component::ParentDir => "..".into(),
            Component::Normal(name) => name.to_string_lossy(),
        };
        if needs_separator {
            out.push('/');
        }
        out.push_str(&segment);
        needs_separator = true;
    }

    out
}
