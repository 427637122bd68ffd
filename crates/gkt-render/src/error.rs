//! # Error Types

use thiserror::Error;

use gkt_core::IdentError;

/// Errors raised while assembling a context, rendering, or writing output.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The template file could not be read.
    #[error("failed to read template {path}: {source}")]
    TemplateLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Template syntax error, undefined reference, or a failing helper.
    #[error("failed to render template {template}: {source}")]
    Template {
        /// Template file name, or `<built-in>`.
        template: String,
        #[source]
        source: handlebars::RenderError,
    },

    /// A name needed for the context sanitized to nothing.
    #[error("invalid context name: {0}")]
    Ident(#[from] IdentError),

    /// The rendered output could not be written.
    #[error("failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
