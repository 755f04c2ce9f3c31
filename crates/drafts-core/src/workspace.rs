//! Drafts workspace detection and bootstrap
//!
//! A drafts workspace is a directory whose manifest carries the reserved
//! name below. Demo packages are scaffolded as its children.

use crate::templates::manifest::{self, MANIFEST_FILE};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Reserved manifest name marking a directory as a drafts workspace root.
pub const DRAFTS_WORKSPACE_NAME: &str = "playground-drafts";

/// Manifest synthesized for a freshly bootstrapped workspace root.
#[derive(Debug, Serialize)]
struct WorkspaceManifest {
    name: &'static str,
    description: &'static str,
    version: &'static str,
    main: &'static str,
    private: bool,
    workspaces: Vec<&'static str>,
}

impl Default for WorkspaceManifest {
    fn default() -> Self {
        Self {
            name: DRAFTS_WORKSPACE_NAME,
            description: "Workspace of scaffolded demo drafts",
            version: "1.0.0",
            main: "index.js",
            private: true,
            workspaces: vec!["*"],
        }
    }
}

/// True when `dir` carries a manifest whose name equals the reserved
/// workspace marker. A missing or unreadable manifest is `false`, not an
/// error.
pub fn is_drafts_workspace(dir: &Path) -> bool {
    manifest::read_manifest(dir)
        .map(|m| m.name == DRAFTS_WORKSPACE_NAME)
        .unwrap_or(false)
}

/// True when the current working directory is a drafts workspace root.
pub fn in_drafts_workspace() -> bool {
    std::env::current_dir()
        .map(|dir| is_drafts_workspace(&dir))
        .unwrap_or(false)
}

/// Create the workspace root at `target` and write its manifest.
///
/// The manifest is synthesized from scratch (rather than copied from a
/// bundled template) so the bootstrap has no install-time data dependency.
/// An existing manifest at `target` is overwritten.
pub fn init_drafts_workspace(target: &Path) -> Result<()> {
    fs::create_dir_all(target)
        .with_context(|| format!("Failed to create directory {}", target.display()))?;

    let value = serde_json::to_value(WorkspaceManifest::default())
        .context("Failed to serialize workspace manifest")?;
    manifest::write_manifest(&target.join(MANIFEST_FILE), &value)
}
