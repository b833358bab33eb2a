//! Compile-time embedded templates for package scaffolding.
//!
//! Each constant loads a template file from `templates/package/` via [`include_str!`].
//! The paths are relative to this source file
//! (`crates/pkg-scaffold-core/src/templates/embedded.rs`).
//!
//! Files ending in `.hbs` are rendered with [`super::renderer::TemplateRenderer`];
//! the others are written verbatim.
//!
//! ## Warning
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT modify `.hbs` files without checking that the Handlebars variables still match
//! what the generator passes in.

// -------------------------------------------------------
// Rendered templates
// -------------------------------------------------------

pub const README: &str = include_str!("../../../../templates/package/README.md.hbs");
pub const LICENSE: &str = include_str!("../../../../templates/package/LICENSE.hbs");
pub const WEBPACK_CONFIG: &str = include_str!("../../../../templates/package/webpack.config.ts.hbs");
pub const AUTO_GENERATED: &str = include_str!("../../../../templates/package/src/auto-generated.ts.hbs");

// -------------------------------------------------------
// Static files
// -------------------------------------------------------

pub const TSCONFIG: &str = include_str!("../../../../templates/package/tsconfig.json");
pub const GITIGNORE: &str = include_str!("../../../../templates/package/gitignore");
pub const NPMIGNORE: &str = include_str!("../../../../templates/package/npmignore");
pub const PRETTIERIGNORE: &str = include_str!("../../../../templates/package/prettierignore");
