//! Project layout and config loading.
//!
//! ## Directory layout
//!
//! ```text
//! <project>/
//! ├── package.json       # PackageManifest (input, regenerated)
//! ├── template.json      # BundleSpec (input)
//! ├── .template/         # generator output, copied over the root files
//! └── src/
//!     └── auto-generated.ts
//! ```

use std::path::{Path, PathBuf};

use crate::config::{BundleSpec, TemplateConfig};
use crate::error::{Result, ScaffoldError};
use crate::manifest::PackageManifest;
use crate::templates::renderer;

/// Package manifest, relative to the project directory.
pub const MANIFEST_FILE: &str = "package.json";
/// Bundle description, relative to the project directory.
pub const BUNDLE_SPEC_FILE: &str = "template.json";
/// Generator output directory, relative to the project directory.
pub const TEMPLATE_DIR: &str = ".template";

/// Load the manifest and bundle description of `project_dir` and build a validated
/// [`TemplateConfig`].
///
/// `spec_path` overrides `<project_dir>/template.json`. Nothing is written, so a
/// missing or broken input leaves the project untouched.
pub fn load_config(project_dir: &Path, spec_path: Option<&Path>) -> Result<TemplateConfig> {
    let manifest = PackageManifest::load(&project_dir.join(MANIFEST_FILE))?;

    let spec_path = spec_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| project_dir.join(BUNDLE_SPEC_FILE));
    let spec = BundleSpec::load(&spec_path)?;

    let config = TemplateConfig::new(manifest, spec);
    config.validate()?;
    Ok(config)
}

/// Write a starter `template.json` into `project_dir`. Never overwrites.
pub fn write_starter_spec(project_dir: &Path) -> Result<PathBuf> {
    let path = project_dir.join(BUNDLE_SPEC_FILE);
    if path.exists() {
        return Err(ScaffoldError::BundleSpecExists(path));
    }

    std::fs::create_dir_all(project_dir)?;
    let mut contents = renderer::to_json(&BundleSpec::starter())?;
    contents.push('\n');
    std::fs::write(&path, contents)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str =
        r#"{"name": "x", "version": "1.0.0", "description": "d", "author": "a"}"#;

    #[test]
    fn test_load_config_from_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), MANIFEST).unwrap();
        write_starter_spec(dir.path()).unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.name(), "x");
        assert_eq!(config.bundles.main_module.entry_file, "./index.ts");
    }

    #[test]
    fn test_load_config_spec_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), MANIFEST).unwrap();
        let custom = dir.path().join("bundles.json");
        std::fs::write(
            &custom,
            r#"{"externals": {"rxjs": "^6.5.5"}, "mainModule": {"entryFile": "./main.ts", "loadDependencies": ["rxjs"]}}"#,
        )
        .unwrap();

        let config = load_config(dir.path(), Some(&custom)).unwrap();
        assert_eq!(config.bundles.main_module.entry_file, "./main.ts");
    }

    #[test]
    fn test_missing_manifest_reported_first() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestNotFound { .. }));
    }

    #[test]
    fn test_missing_spec() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), MANIFEST).unwrap();
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(matches!(err, ScaffoldError::BundleSpecNotFound { .. }));
    }

    #[test]
    fn test_starter_spec_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_starter_spec(dir.path()).unwrap();
        std::fs::write(&path, "{}").unwrap();

        let err = write_starter_spec(dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::BundleSpecExists(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
