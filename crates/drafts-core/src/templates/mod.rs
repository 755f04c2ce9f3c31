//! Template discovery, copying, and manifest rewriting
//!
//! This module provides:
//! - Manifest types and in-place patching (`package.json`)
//! - Package/template discovery under a directory root
//! - Recursive copying of a template into a new package directory

pub mod catalog;
pub mod copier;
pub mod manifest;

pub use catalog::{list_packages, list_templates, read_package, templates_root, PackageInfo};
pub use copier::{copy_dir, materialize_package};
pub use manifest::{ManifestPatch, PackageManifest, MANIFEST_FILE};
