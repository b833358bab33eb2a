//! Scaffolding generators.
//!
//! A [`Generator`] turns a validated [`TemplateConfig`] into files under
//! `<project>/.template/`. The copy into the project root is a separate step
//! ([`crate::copier`]), so a generator never touches files the user edits.

pub mod setup;
pub mod webpack;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::TemplateConfig;
use crate::error::Result;

pub use webpack::WebpackLibraryGenerator;

/// Files written by a generator run.
#[derive(Debug, Clone, Default)]
pub struct GeneratedFiles {
    /// Directory the files were written into (`<project>/.template`).
    pub dir: PathBuf,
    /// Paths relative to [`GeneratedFiles::dir`], in write order.
    pub files: Vec<PathBuf>,
}

/// Information about a missing prerequisite tool.
#[derive(Debug, Clone)]
pub struct PrerequisiteError {
    pub tool_name: String,
    pub install_instructions: String,
}

/// Warning about a tool version being below the recommended minimum.
#[derive(Debug, Clone)]
pub struct VersionWarning {
    pub tool_name: String,
    pub found_version: String,
    pub minimum_version: String,
}

/// Every scaffolding generator implements this trait.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Short identifier, e.g. `"webpack-library"`.
    fn name(&self) -> &'static str;

    /// Display name for user-facing output.
    fn display_name(&self) -> &'static str;

    /// Check that the tools needed to build the generated package are installed.
    ///
    /// Missing tools never stop generation; callers report them as warnings.
    fn check_prerequisites(&self) -> std::result::Result<(), Vec<PrerequisiteError>> {
        Ok(())
    }

    /// Check installed tool versions against recommended minimums.
    ///
    /// If version detection fails, the tool is silently skipped.
    fn check_versions(&self) -> Vec<VersionWarning> {
        vec![]
    }

    /// Write the scaffolding for `config` into `<project_dir>/.template/`.
    ///
    /// Must be idempotent: unchanged inputs produce byte-identical files, and
    /// existing files are overwritten.
    async fn generate(&self, project_dir: &Path, config: &TemplateConfig) -> Result<GeneratedFiles>;
}
