//! Template system for package scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Templates use Handlebars syntax. Common variables:
//! - `{{name}}` — npm package name (e.g., `@youwol/os-widgets`)
//! - `{{version}}` — package version from the manifest
//! - `{{api_version}}` — API key of the package version (e.g., `02`)
//! - `{{links.*}}` — documentation, npm, GitHub and user-guide URLs
//!
//! JSON fragments (`{{externals}}`, `{{exported_symbols}}`, ...) are serialized by the
//! generator with [`renderer::to_json`] and inserted as-is.
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;
