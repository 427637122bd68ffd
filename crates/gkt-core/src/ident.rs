//! # Identifier Sanitization
//!
//! Every externally supplied name (array names, output file stems, YAML
//! `name` keys used in include guards) passes through here before it reaches
//! a template, so generated code only ever contains identifiers matching
//! `[A-Za-z_][A-Za-z0-9_]*`.

use std::fmt;

use serde::Serialize;

use crate::error::IdentError;

/// Map an arbitrary string onto a C/C++ identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, and a leading digit
/// gets a `_` prefix. Total over all inputs: the empty string maps to the
/// empty string, which is not a valid identifier. Callers that need a
/// non-empty identifier use [`require_identifier`].
pub fn sanitize_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.push('_');
    }
    out.extend(name.chars().map(|c| {
        if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        }
    }));
    out
}

/// Sanitize `name` and reject the degenerate empty result.
pub fn require_identifier(name: &str) -> Result<Identifier, IdentError> {
    if name.is_empty() {
        return Err(IdentError::Empty);
    }
    Ok(Identifier(sanitize_identifier(name)))
}

/// A non-empty, sanitized identifier.
///
/// Only constructed through [`require_identifier`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased form, used for include guards (`_NAME_H_`).
    pub fn to_guard(&self) -> String {
        self.0.to_ascii_uppercase()
    }

    /// Consume the identifier, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
