//! Core library for pkg-scaffold.
//!
//! Provides the [`generator::Generator`] trait that scaffolding generators implement,
//! along with the shared pieces of a run: manifest loading, the bundle description
//! and [`config::TemplateConfig`], template rendering, and the copy of generated
//! files into the project root.
//!
//! A run is strictly sequential:
//! 1. [`project::load_config`] — read `package.json` + `template.json`, validate
//! 2. [`generator::Generator::generate`] — write `.template/`
//! 3. [`copier::copy_templates`] — copy `.template/` files over the project root

pub mod config;
pub mod copier;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod project;
pub mod templates;
pub mod version;
