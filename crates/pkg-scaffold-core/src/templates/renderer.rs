//! Handlebars-based template renderer for package scaffolding.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and HTML
//! escaping disabled. Strict mode makes any `{{variable}}` missing from the data
//! context an error, so a renamed field fails at generation time instead of leaving
//! a hole in `webpack.config.ts`. Escaping is off because the outputs are TypeScript,
//! JSON and Markdown, where `&quot;` would be a bug.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{embedded, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "name": "@youwol/os-widgets", "description": "" });
//! let output = renderer.render(embedded::README, &data)?;
//! ```

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::{Result, ScaffoldError};

/// Template renderer using Handlebars for generating package files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| ScaffoldError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize `value` as JSON with 4-space indentation, the layout used by every
/// generated JSON file and by the objects embedded in `auto-generated.ts`.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| ScaffoldError::TemplateRender(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ScaffoldError::TemplateRender(e.to_string()))
}
