//! Generator for TypeScript packages bundled with webpack and served from the CDN.
//!
//! Writes into `<project>/.template/`:
//!
//! ```text
//! .template/
//! ├── package.json          # metadata, scripts, dependencies, webpm block
//! ├── tsconfig.json
//! ├── webpack.config.ts     # reads entries/externals from src/auto-generated.ts
//! ├── README.md
//! ├── LICENSE               # MIT, author + year
//! ├── .gitignore
//! ├── .npmignore
//! ├── .prettierignore
//! └── src/auto-generated.ts # setup object: externals, entries, install helpers
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};

use super::setup::{self, PackageLinks};
use super::{GeneratedFiles, Generator, PrerequisiteError, VersionWarning};
use crate::config::{DependencySpec, PackageType, TemplateConfig};
use crate::error::Result;
use crate::project::TEMPLATE_DIR;
use crate::templates::embedded;
use crate::templates::renderer::{self, TemplateRenderer};
use crate::version::{self, Version};

/// Minimum node version recommended for webpack 5 + ts-node.
const MIN_NODE: Version = Version {
    major: 18,
    minor: 0,
    patch: 0,
};

/// Dev dependencies every generated package builds and tests with.
const DEFAULT_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@types/jest", "^29.5.6"),
    ("@types/node", "^18.9.1"),
    ("@types/webpack", "^5.28.0"),
    ("@youwol/eslint-config", "^1.0.0"),
    ("@youwol/prettier-config", "^1.0.0"),
    ("@youwol/tsconfig", "^1.0.0"),
    ("del-cli", "^5.1.0"),
    ("isomorphic-fetch", "^3.0.0"),
    ("jest", "^29.7.0"),
    ("ts-jest", "^29.1.1"),
    ("ts-loader", "9.5.0"),
    ("ts-node", "10.9.1"),
    ("typedoc", "^0.25.2"),
    ("typescript", "5.2.2"),
    ("webpack", "^5.89.0"),
    ("webpack-bundle-analyzer", "^4.9.1"),
    ("webpack-cli", "5.1.4"),
];

const APPLICATION_DEV_DEPENDENCIES: &[(&str, &str)] = &[("html-webpack-plugin", "5.5.3")];

const SCRIPTS: &[(&str, &str)] = &[
    ("clean", "del-cli dist"),
    ("auto-gen", "pkg-scaffold generate"),
    ("build", "yarn build:dev"),
    ("pre-build", "yarn clean"),
    ("build:dev", "yarn pre-build && webpack --mode development"),
    ("build:prod", "yarn pre-build && webpack --mode production"),
    ("lint-check", "yarn lint-prettier-check && yarn lint-eslint-check"),
    ("lint-prettier-check", "prettier --check ./src"),
    ("lint-eslint-check", "eslint ./src"),
    ("test", "jest -i"),
    ("test-coverage", "jest -i --collect-coverage"),
    ("doc", "typedoc"),
    (
        "publish-npm-public",
        "yarn build:prod && yarn test-coverage && yarn publish --access public",
    ),
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson<'a> {
    name: &'a str,
    description: &'a str,
    version: &'a str,
    author: &'a str,
    license: &'static str,
    homepage: String,
    main: String,
    types: &'static str,
    files: &'static [&'static str],
    scripts: IndexMap<&'static str, &'static str>,
    prettier: &'static str,
    eslint_config: Value,
    dependencies: DependencySpec,
    dev_dependencies: DependencySpec,
    webpm: Webpm<'a>,
}

#[derive(Serialize)]
struct Webpm<'a> {
    dependencies: &'a DependencySpec,
    aliases: Vec<String>,
}

/// Scaffolding for webpack-bundled libraries and applications.
pub struct WebpackLibraryGenerator {
    renderer: TemplateRenderer,
}

impl Default for WebpackLibraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl WebpackLibraryGenerator {
    pub fn new() -> Self {
        Self {
            renderer: TemplateRenderer::new(),
        }
    }

    /// Render every file, keyed by its path relative to `.template/`.
    pub fn render_all(&self, config: &TemplateConfig) -> Result<Vec<(PathBuf, String)>> {
        let data = self.template_data(config)?;
        Ok(vec![
            (PathBuf::from("package.json"), package_json(config)?),
            (PathBuf::from("tsconfig.json"), embedded::TSCONFIG.to_string()),
            (
                PathBuf::from("webpack.config.ts"),
                self.renderer.render(embedded::WEBPACK_CONFIG, &data)?,
            ),
            (
                PathBuf::from("README.md"),
                self.renderer.render(embedded::README, &data)?,
            ),
            (
                PathBuf::from("LICENSE"),
                self.renderer.render(embedded::LICENSE, &data)?,
            ),
            (PathBuf::from(".gitignore"), embedded::GITIGNORE.to_string()),
            (PathBuf::from(".npmignore"), embedded::NPMIGNORE.to_string()),
            (
                PathBuf::from(".prettierignore"),
                embedded::PRETTIERIGNORE.to_string(),
            ),
            (
                PathBuf::from("src/auto-generated.ts"),
                self.renderer.render(embedded::AUTO_GENERATED, &data)?,
            ),
        ])
    }

    fn template_data(&self, config: &TemplateConfig) -> Result<Value> {
        let main = &config.bundles.main_module;
        Ok(json!({
            "name": config.name(),
            "version": config.version(),
            "description": config.manifest.description,
            "short_description": serde_json::to_string(&config.manifest.description)
                .map_err(anyhow::Error::from)?,
            "author": config.manifest.author,
            "year": license_year(),
            "package_type": config.package_type.as_str(),
            "is_library": config.package_type == PackageType::Library,
            "is_application": config.package_type == PackageType::Application,
            "user_guide": config.user_guide,
            "links": PackageLinks::for_package(config.name()),
            "asset_id": setup::asset_id(config.name()),
            "api_version": setup::api_version(config)?,
            "main_entry_file": main.entry_file,
            "run_time_dependencies": renderer::to_json(&config.dependencies.run_time)?,
            "externals": renderer::to_json(&setup::externals_table(config)?)?,
            "exported_symbols": renderer::to_json(&setup::exported_symbols(config)?)?,
            "main_entry": renderer::to_json(main)?,
            "secondary_entries": renderer::to_json(&setup::secondary_entries(config))?,
        }))
    }
}

#[async_trait]
impl Generator for WebpackLibraryGenerator {
    fn name(&self) -> &'static str {
        "webpack-library"
    }

    fn display_name(&self) -> &'static str {
        "TypeScript + webpack (CDN externals)"
    }

    fn check_prerequisites(&self) -> std::result::Result<(), Vec<PrerequisiteError>> {
        let mut missing = Vec::new();

        if which::which("node").is_err() {
            missing.push(PrerequisiteError {
                tool_name: "node".into(),
                install_instructions: "https://nodejs.org/".into(),
            });
        }

        if which::which("yarn").is_err() && which::which("npm").is_err() {
            missing.push(PrerequisiteError {
                tool_name: "yarn".into(),
                install_instructions: "npm install -g yarn".into(),
            });
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    fn check_versions(&self) -> Vec<VersionWarning> {
        match version::detect_version("node") {
            Some(found) if found < MIN_NODE => vec![VersionWarning {
                tool_name: "node".into(),
                found_version: found.to_string(),
                minimum_version: MIN_NODE.to_string(),
            }],
            _ => vec![],
        }
    }

    async fn generate(&self, project_dir: &Path, config: &TemplateConfig) -> Result<GeneratedFiles> {
        config.validate()?;

        let dir = project_dir.join(TEMPLATE_DIR);
        let rendered = self.render_all(config)?;

        let mut files = Vec::with_capacity(rendered.len());
        for (relative, content) in rendered {
            let path = dir.join(&relative);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, content)?;
            tracing::debug!("wrote {}", path.display());
            files.push(relative);
        }

        tracing::info!(
            "generated {} files for {} in {}",
            files.len(),
            config.name(),
            dir.display()
        );
        Ok(GeneratedFiles { dir, files })
    }
}

fn package_json(config: &TemplateConfig) -> Result<String> {
    let run_time = &config.dependencies.run_time;

    let mut dependencies = run_time.externals.clone();
    dependencies.extend(
        run_time
            .included_in_bundle
            .iter()
            .map(|(k, v)| (k.clone(), v.clone())),
    );

    let mut dev_dependencies: DependencySpec = DEFAULT_DEV_DEPENDENCIES
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    if config.package_type == PackageType::Application {
        dev_dependencies.extend(
            APPLICATION_DEV_DEPENDENCIES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
    }
    dev_dependencies.extend(
        config
            .dependencies
            .dev_time
            .iter()
            .map(|(k, v)| (k.clone(), v.clone())),
    );

    let links = PackageLinks::for_package(config.name());
    let pkg = PackageJson {
        name: config.name(),
        description: &config.manifest.description,
        version: config.version(),
        author: &config.manifest.author,
        license: "MIT",
        homepage: format!("{}#README.md", links.source_github),
        main: format!("dist/{}.js", config.name()),
        types: "src/index.ts",
        files: &["dist", "src", "LICENSE", "README.md"],
        scripts: SCRIPTS.iter().copied().collect(),
        prettier: "@youwol/prettier-config",
        eslint_config: json!({ "extends": ["@youwol"] }),
        dependencies,
        dev_dependencies,
        webpm: Webpm {
            dependencies: &run_time.externals,
            aliases: vec![],
        },
    };
    let mut out = renderer::to_json(&pkg)?;
    out.push('\n');
    Ok(out)
}

/// Year printed in `LICENSE`: from `SOURCE_DATE_EPOCH` when set, so reproducible
/// builds regenerate identical files, otherwise the current UTC year.
fn license_year() -> i32 {
    std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now)
        .year()
}
