//! Unified error types for pkg-scaffold.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while scaffolding a package.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Inputs ---

    /// The package manifest (`package.json`) was not found.
    #[error("package manifest not found at {path}")]
    ManifestNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest exists but is not valid JSON, or lacks a required field.
    #[error("failed to parse package manifest at {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The bundle description (`template.json`) was not found.
    #[error("bundle description not found at {path} (run `pkg-scaffold init` to create one)")]
    BundleSpecNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bundle description exists but could not be parsed.
    #[error("failed to parse bundle description at {path}")]
    BundleSpecParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `init` refuses to overwrite an existing bundle description.
    #[error("bundle description already exists: {0}")]
    BundleSpecExists(PathBuf),

    // --- Configuration ---

    /// The assembled configuration is structurally inconsistent.
    #[error("invalid template configuration: {0}")]
    InvalidConfig(String),

    /// A module loads a dependency that is not declared as a project external.
    #[error("module '{module}' loads '{dependency}', which is not a declared external")]
    UndeclaredDependency { module: String, dependency: String },

    /// A version range from which no API key can be derived (e.g. `latest`).
    #[error("cannot derive an API key from version '{version}' of '{package}'")]
    InvalidVersion { package: String, version: String },

    // --- Generation ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    /// A file expected in the `.template/` directory is missing.
    #[error("template file missing: {0}")]
    TemplateFileMissing(PathBuf),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, ScaffoldError>`.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
