//! Copy generated files from `.template/` into the project root.
//!
//! The list of files is fixed. Destinations are overwritten unconditionally; every
//! source is checked before the first copy so a missing file aborts without
//! touching the project.

use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::project::TEMPLATE_DIR;

/// Files copied from `.template/` to the project root, relative to both.
pub const TEMPLATE_FILES: &[&str] = &[
    "src/auto-generated.ts",
    "README.md",
    ".gitignore",
    ".npmignore",
    ".prettierignore",
    "LICENSE",
    "package.json",
    "tsconfig.json",
    "webpack.config.ts",
];

/// Outcome of a copy, split by whether the destination content changed.
#[derive(Debug, Clone, Default)]
pub struct CopyReport {
    pub updated: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
}

/// Copy [`TEMPLATE_FILES`] from `<project_dir>/.template/` to `<project_dir>/`.
pub fn copy_templates(project_dir: &Path) -> Result<CopyReport> {
    let template_dir = project_dir.join(TEMPLATE_DIR);

    for file in TEMPLATE_FILES {
        let src = template_dir.join(file);
        if !src.is_file() {
            return Err(ScaffoldError::TemplateFileMissing(src));
        }
    }

    let mut report = CopyReport::default();
    for file in TEMPLATE_FILES {
        let src = template_dir.join(file);
        let dst = project_dir.join(file);

        let contents = std::fs::read(&src)?;
        if std::fs::read(&dst).is_ok_and(|existing| existing == contents) {
            report.unchanged.push(PathBuf::from(file));
            continue;
        }

        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&dst, contents)?;
        tracing::debug!("copied {} -> {}", src.display(), dst.display());
        report.updated.push(PathBuf::from(file));
    }

    Ok(report)
}
