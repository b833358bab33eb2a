//! Template configuration: what the generator is asked to produce.
//!
//! Two inputs are combined into a [`TemplateConfig`]:
//! - [`PackageManifest`] — name, version, description and author from `package.json`
//! - [`BundleSpec`] — the declarative part from `template.json`: package type,
//!   externals with their version ranges, and the bundle entry points
//!
//! ## `template.json` format
//!
//! ```json
//! {
//!     "type": "library",
//!     "externals": { "rxjs": "^6.5.5", "@youwol/flux-view": "^1.0.3" },
//!     "mainModule": { "entryFile": "./index.ts", "loadDependencies": ["rxjs"] },
//!     "auxiliaryModules": [
//!         {
//!             "name": "favorites",
//!             "entryFile": "./lib/favorites/index.ts",
//!             "loadDependencies": ["rxjs", "@youwol/flux-view"]
//!         }
//!     ],
//!     "userGuide": true
//! }
//! ```
//!
//! Maps are [`IndexMap`]s so that generated files list dependencies in the
//! order they were declared.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};
use crate::manifest::PackageManifest;
use crate::version;

/// Dependency name to semantic version range.
pub type DependencySpec = IndexMap<String, String>;

/// Kind of package being scaffolded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    /// A library consumed by other packages, exposing a main module and auxiliary modules.
    #[default]
    Library,
    /// An application served as a standalone bundle.
    Application,
}

impl PackageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Application => "application",
        }
    }
}

/// The main bundle entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainModule {
    pub entry_file: String,
    #[serde(default)]
    pub load_dependencies: Vec<String>,
}

/// A secondary bundle entry point, installed on demand under `<package>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuxiliaryModule {
    pub name: String,
    pub entry_file: String,
    #[serde(default)]
    pub load_dependencies: Vec<String>,
}

/// Runtime dependencies of the package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeDependencies {
    /// Loaded from the CDN at runtime, excluded from the bundle.
    pub externals: DependencySpec,
    /// Bundled into the package's own output.
    #[serde(default)]
    pub included_in_bundle: DependencySpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependencies {
    pub run_time: RuntimeDependencies,
    /// Extra dev dependencies, merged over the generator's defaults.
    #[serde(default)]
    pub dev_time: DependencySpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundles {
    pub main_module: MainModule,
    #[serde(default)]
    pub auxiliary_modules: Vec<AuxiliaryModule>,
}

/// Declarative description of a package's bundles, stored in `template.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleSpec {
    #[serde(rename = "type", default)]
    pub package_type: PackageType,
    pub externals: DependencySpec,
    #[serde(default)]
    pub included_in_bundle: DependencySpec,
    #[serde(default)]
    pub dev_dependencies: DependencySpec,
    pub main_module: MainModule,
    #[serde(default)]
    pub auxiliary_modules: Vec<AuxiliaryModule>,
    #[serde(default)]
    pub user_guide: bool,
}

impl BundleSpec {
    /// Load a bundle description from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ScaffoldError::BundleSpecNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| ScaffoldError::BundleSpecParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Minimal description written by `pkg-scaffold init`: a library with a single
    /// `./index.ts` entry and no externals.
    pub fn starter() -> Self {
        Self {
            package_type: PackageType::Library,
            externals: DependencySpec::new(),
            included_in_bundle: DependencySpec::new(),
            dev_dependencies: DependencySpec::new(),
            main_module: MainModule {
                entry_file: "./index.ts".into(),
                load_dependencies: vec![],
            },
            auxiliary_modules: vec![],
            user_guide: false,
        }
    }
}

/// Everything the generator needs, built once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    #[serde(rename = "type")]
    pub package_type: PackageType,
    #[serde(flatten)]
    pub manifest: PackageManifest,
    pub dependencies: Dependencies,
    pub bundles: Bundles,
    pub user_guide: bool,
}

impl TemplateConfig {
    /// Combine the manifest metadata with a bundle description.
    pub fn new(manifest: PackageManifest, spec: BundleSpec) -> Self {
        Self {
            package_type: spec.package_type,
            manifest,
            dependencies: Dependencies {
                run_time: RuntimeDependencies {
                    externals: spec.externals,
                    included_in_bundle: spec.included_in_bundle,
                },
                dev_time: spec.dev_dependencies,
            },
            bundles: Bundles {
                main_module: spec.main_module,
                auxiliary_modules: spec.auxiliary_modules,
            },
            user_guide: spec.user_guide,
        }
    }

    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    pub fn version(&self) -> &str {
        &self.manifest.version
    }

    pub fn externals(&self) -> &DependencySpec {
        &self.dependencies.run_time.externals
    }

    /// Structural consistency checks, run before anything is written.
    ///
    /// - every module loads only declared externals
    /// - entry files are non-empty
    /// - auxiliary module names are non-empty, unique, and path-safe
    /// - an API key can be derived from the package version and every external range
    pub fn validate(&self) -> Result<()> {
        if self.manifest.name.trim().is_empty() {
            return Err(ScaffoldError::InvalidConfig("package name is empty".into()));
        }
        if version::api_key(&self.manifest.version).is_none() {
            return Err(ScaffoldError::InvalidVersion {
                package: self.manifest.name.clone(),
                version: self.manifest.version.clone(),
            });
        }
        for (package, range) in self.externals() {
            if version::api_key(range).is_none() {
                return Err(ScaffoldError::InvalidVersion {
                    package: package.clone(),
                    version: range.clone(),
                });
            }
        }

        let main = &self.bundles.main_module;
        if main.entry_file.trim().is_empty() {
            return Err(ScaffoldError::InvalidConfig(
                "main module has an empty entry file".into(),
            ));
        }
        self.check_dependencies("main", &main.load_dependencies)?;

        let mut seen = HashSet::new();
        for module in &self.bundles.auxiliary_modules {
            let name = module.name.trim();
            if matches!(name, "" | "." | "..") || name.contains(['/', '\\']) {
                return Err(ScaffoldError::InvalidConfig(format!(
                    "invalid auxiliary module name '{}'",
                    module.name
                )));
            }
            if !seen.insert(name) {
                return Err(ScaffoldError::InvalidConfig(format!(
                    "duplicate auxiliary module '{name}'"
                )));
            }
            if module.entry_file.trim().is_empty() {
                return Err(ScaffoldError::InvalidConfig(format!(
                    "auxiliary module '{name}' has an empty entry file"
                )));
            }
            self.check_dependencies(name, &module.load_dependencies)?;
        }

        Ok(())
    }

    fn check_dependencies(&self, module: &str, dependencies: &[String]) -> Result<()> {
        let externals = self.externals();
        match dependencies.iter().find(|d| !externals.contains_key(*d)) {
            Some(missing) => Err(ScaffoldError::UndeclaredDependency {
                module: module.to_string(),
                dependency: missing.clone(),
            }),
            None => Ok(()),
        }
    }
}
