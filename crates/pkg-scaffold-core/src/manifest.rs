//! Loading package metadata from `package.json`.
//!
//! Only the four metadata fields the scaffolding needs are read; every other key
//! in the manifest (scripts, dependencies, ...) is ignored. The manifest is never
//! written back by this module — the regenerated `package.json` comes from the
//! generator.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Package metadata read from an existing `package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
}

impl PackageManifest {
    /// Load the manifest at `path`.
    ///
    /// Fails with [`ScaffoldError::ManifestNotFound`] when the file cannot be read and
    /// [`ScaffoldError::ManifestParse`] when it is malformed or lacks one of the
    /// required string fields.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ScaffoldError::ManifestNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        let manifest: Self =
            serde_json::from_str(&contents).map_err(|e| ScaffoldError::ManifestParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        tracing::debug!(name = %manifest.name, version = %manifest.version, "loaded manifest");
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reads_metadata_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(
            &path,
            r#"{"name": "x", "version": "1.0.0", "description": "d", "author": "a", "scripts": {"build": "webpack"}}"#,
        )
        .unwrap();

        let manifest = PackageManifest::load(&path).unwrap();
        assert_eq!(manifest.name, "x");
        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.description, "d");
        assert_eq!(manifest.author, "a");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PackageManifest::load(&dir.path().join("package.json")).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestNotFound { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = PackageManifest::load(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestParse { .. }));
    }

    #[test]
    fn test_load_missing_author() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{"name": "x", "version": "1.0.0", "description": "d"}"#)
            .unwrap();
        let err = PackageManifest::load(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestParse { .. }));
    }
}
