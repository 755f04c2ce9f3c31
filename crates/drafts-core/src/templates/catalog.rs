//! Discovery of package directories (templates and drafts packages)

use crate::templates::manifest;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the templates root directory.
pub const TEMPLATES_DIR_ENV: &str = "DRAFTS_TEMPLATES_DIR";

/// Metadata for a discoverable package directory.
#[derive(Debug, Clone)]
pub struct PackageInfo {
    pub name: String,
    pub description: String,
    pub path: PathBuf,
}

/// Read a directory as a package.
///
/// Returns `None` when `dir` is not a directory or has no parseable
/// manifest - such entries are skipped, never reported as errors.
pub fn read_package(dir: &Path) -> Option<PackageInfo> {
    if !dir.is_dir() {
        return None;
    }
    let manifest = manifest::read_manifest(dir)?;
    Some(PackageInfo {
        name: manifest.name,
        description: manifest.description,
        path: dir.to_path_buf(),
    })
}

/// List every package directory directly under `root`.
///
/// Returns an empty list when `root` does not exist. Ordering follows
/// filesystem enumeration and is not guaranteed.
pub fn list_packages(root: &Path) -> Result<Vec<PackageInfo>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let entries =
        fs::read_dir(root).with_context(|| format!("Failed to read {}", root.display()))?;

    let mut packages = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", root.display()))?;
        if let Some(package) = read_package(&entry.path()) {
            packages.push(package);
        }
    }
    Ok(packages)
}

/// List the selectable templates under `templates_root`.
pub fn list_templates(templates_root: &Path) -> Result<Vec<PackageInfo>> {
    list_packages(templates_root)
}

/// Resolve the templates root: the `DRAFTS_TEMPLATES_DIR` override when
/// set, otherwise the `templates/` directory next to the installed binary.
pub fn templates_root() -> Result<PathBuf> {
    if let Ok(dir) = env::var(TEMPLATES_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let exe = env::current_exe().context("Failed to locate the current executable")?;
    let install_root = exe
        .parent()
        .context("Executable has no parent directory")?;
    Ok(install_root.join("templates"))
}
