//! Recursive template copying and package materialization

use crate::templates::manifest::{self, ManifestPatch};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively copy the contents of `src` into `dst`, creating
/// intermediate directories as needed. Returns the number of files copied.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    if !src.is_dir() {
        anyhow::bail!("Template directory not found: {}", src.display());
    }

    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("Failed to relativize {}", entry.path().display()))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory {}", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy to {}", target.display()))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Copy the template at `template` into `target` and stamp the resulting
/// manifest with `patch`. Every other manifest field is preserved.
///
/// There is no rollback: a failure after the copy leaves the partially
/// scaffolded directory behind for the user to inspect or remove.
pub fn materialize_package(target: &Path, template: &Path, patch: &ManifestPatch) -> Result<()> {
    fs::create_dir_all(target)
        .with_context(|| format!("Failed to create directory {}", target.display()))?;
    copy_dir(template, target)?;
    manifest::patch_manifest(target, patch)
}
