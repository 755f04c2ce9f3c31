//! Manifest (`package.json`) reading and rewriting
//!
//! Manifests are merged in place: a patch overwrites the fields it carries
//! and leaves every other key untouched. Output is 2-space indented JSON
//! with a trailing newline.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Manifest file name expected at the root of every package directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Manifests written by older versions of this tool carry a misspelled
/// description key. Accepted on read, never written back.
const LEGACY_DESCRIPTION_KEY: &str = "desctription";

/// The manifest fields this tool reads. A directory is a valid package
/// only if its manifest parses into this shape.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    pub name: String,

    #[serde(default, alias = "desctription")]
    pub description: String,
}

/// Fields to overwrite in a package's manifest. `None` leaves the
/// existing value alone.
#[derive(Debug, Clone, Default)]
pub struct ManifestPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Read the manifest of the package at `package_dir`.
///
/// Returns `None` when the manifest is missing or unparseable; absence of
/// a manifest just means "not a package", not an error.
pub fn read_manifest(package_dir: &Path) -> Option<PackageManifest> {
    let manifest_path = package_dir.join(MANIFEST_FILE);
    let content = fs::read_to_string(manifest_path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Merge `patch` into the on-disk manifest of the package at `package_dir`.
///
/// Unlike [`read_manifest`], a missing or unparseable manifest is an error
/// here: patching presumes the package already exists.
pub fn patch_manifest(package_dir: &Path, patch: &ManifestPatch) -> Result<()> {
    let manifest_path = package_dir.join(MANIFEST_FILE);
    let content = fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let mut manifest: Map<String, Value> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;

    if let Some(name) = &patch.name {
        manifest.insert("name".to_string(), Value::String(name.clone()));
    }
    if let Some(description) = &patch.description {
        // Drop a legacy key so the manifest ends up with one spelling.
        manifest.remove(LEGACY_DESCRIPTION_KEY);
        manifest.insert("description".to_string(), Value::String(description.clone()));
    }

    write_manifest(&manifest_path, &Value::Object(manifest))
}

/// Write a manifest value to `path` as pretty-printed JSON.
pub(crate) fn write_manifest(path: &Path, manifest: &Value) -> Result<()> {
    let mut content = serde_json::to_string_pretty(manifest)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    content.push('\n');
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_json(dir: &Path, value: &Value) {
        fs::write(dir.join(MANIFEST_FILE), value.to_string()).unwrap();
    }

    #[test]
    fn test_read_manifest_canonical_and_legacy_keys() {
        let dir = tempfile::tempdir().unwrap();
        write_json(
            dir.path(),
            &json!({"name": "a", "description": "modern"}),
        );
        let manifest = read_manifest(dir.path()).unwrap();
        assert_eq!(manifest.name, "a");
        assert_eq!(manifest.description, "modern");

        write_json(
            dir.path(),
            &json!({"name": "b", "desctription": "legacy"}),
        );
        let manifest = read_manifest(dir.path()).unwrap();
        assert_eq!(manifest.description, "legacy");
    }

    #[test]
    fn test_read_manifest_missing_or_broken_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_manifest(dir.path()).is_none());

        fs::write(dir.path().join(MANIFEST_FILE), "{ not json").unwrap();
        assert!(read_manifest(dir.path()).is_none());
    }

    #[test]
    fn test_patch_preserves_other_fields() {
        let dir = tempfile::tempdir().unwrap();
        write_json(
            dir.path(),
            &json!({
                "name": "basic",
                "description": "old",
                "version": "2.3.4",
                "scripts": {"start": "node index.js"}
            }),
        );

        let patch = ManifestPatch {
            name: Some("drafts-hello".to_string()),
            description: Some("test".to_string()),
        };
        patch_manifest(dir.path(), &patch).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["name"], "drafts-hello");
        assert_eq!(value["description"], "test");
        assert_eq!(value["version"], "2.3.4");
        assert_eq!(value["scripts"]["start"], "node index.js");
    }

    #[test]
    fn test_patch_drops_legacy_description_key() {
        let dir = tempfile::tempdir().unwrap();
        write_json(
            dir.path(),
            &json!({"name": "basic", "desctription": "legacy"}),
        );

        let patch = ManifestPatch {
            name: None,
            description: Some("fresh".to_string()),
        };
        patch_manifest(dir.path(), &patch).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["description"], "fresh");
        assert!(value.get("desctription").is_none());
        // Name untouched when the patch does not carry one.
        assert_eq!(value["name"], "basic");
    }

    #[test]
    fn test_write_style_two_space_indent_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        write_json(dir.path(), &json!({"name": "basic"}));

        let patch = ManifestPatch {
            name: None,
            description: Some("d".to_string()),
        };
        patch_manifest(dir.path(), &patch).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        assert!(content.ends_with("}\n"));
        assert!(content.contains("\n  \"name\""));
    }

    #[test]
    fn test_patch_missing_manifest_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let patch = ManifestPatch {
            name: Some("x".to_string()),
            description: None,
        };
        assert!(patch_manifest(dir.path(), &patch).is_err());
    }
}
