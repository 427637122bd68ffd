//! # Template Renderer
//!
//! One [`TemplateRenderer`] owns one Handlebars registry. The registry is
//! configured for code generation:
//!
//! - **strict mode** — a reference to an undefined variable fails the render
//!   instead of silently emitting nothing;
//! - **no escaping** — output is C/C++ source, not HTML;
//! - **injected helpers** — exactly the [`HelperSet`] passed to
//!   [`TemplateRenderer::new`], nothing global.
//!
//! Rendering is a single pure pass into a `String`; nothing touches the
//! filesystem until [`write_output`](crate::write_output) is called with the
//! finished text.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::RenderError;
use crate::helpers::HelperSet;

/// Name used in errors for templates that did not come from a file.
pub const INLINE_TEMPLATE: &str = "<built-in>";

pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("strict_mode", &self.registry.strict_mode())
            .finish()
    }
}

impl TemplateRenderer {
    /// Build a renderer exposing `helpers` to its templates.
    pub fn new(helpers: HelperSet) -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        for (name, helper) in helpers.into_inner() {
            registry.register_helper(&name, helper);
        }
        Self { registry }
    }

    /// A renderer with [`HelperSet::standard`].
    pub fn standard() -> Self {
        Self::new(HelperSet::standard())
    }

    /// Render template text against `data`.
    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String, RenderError> {
        self.render_named(INLINE_TEMPLATE, template, data)
    }

    /// Read a template file and render it against `data`.
    pub fn render_file<T: Serialize>(&self, path: &Path, data: &T) -> Result<String, RenderError> {
        let template = std::fs::read_to_string(path).map_err(|source| RenderError::TemplateLoad {
            path: path.display().to_string(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.render_named(&name, &template, data)
    }

    fn render_named<T: Serialize>(
        &self,
        name: &str,
        template: &str,
        data: &T,
    ) -> Result<String, RenderError> {
        let rendered = self
            .registry
            .render_template(template, data)
            .map_err(|source| RenderError::Template {
                template: name.to_string(),
                source,
            })?;
        tracing::debug!(template = name, bytes = rendered.len(), "rendered template");
        Ok(rendered)
    }
}
