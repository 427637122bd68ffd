//! # gkt-render — Template Rendering for the grafkit Code Generators
//!
//! Turns inputs into generated source text:
//!
//! ```text
//! descriptors ─► build_context ─┐
//!                               ├─► TemplateRenderer::render ─► write_output
//! binary file ─► HexdumpContext ┘
//! ```
//!
//! - [`context`] — the values templates see ([`Context`], [`HexdumpContext`]).
//! - [`helpers`] — functions callable from templates, collected in a
//!   [`HelperSet`] and injected into each renderer.
//! - [`renderer`] — a strict, non-escaping Handlebars registry per renderer.
//! - [`output`] — atomic file writes or stdout.
//! - [`embedded`] — built-in templates.
//!
//! ## Crate Policy
//!
//! - Rendering never touches the filesystem; only [`write_output`] does, and
//!   only with fully rendered text.
//! - No process-wide template state.

pub mod context;
pub mod embedded;
pub mod error;
pub mod helpers;
pub mod output;
pub mod renderer;

// Re-export primary types for ergonomic imports.
pub use context::{build_context, Context, ContextOptions, HexdumpContext, LoadedSource};
pub use error::RenderError;
pub use helpers::HelperSet;
pub use output::write_output;
pub use renderer::TemplateRenderer;
