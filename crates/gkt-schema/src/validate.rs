//! # Descriptor Validation
//!
//! Turns an untyped YAML tree into a [`Source`] in two steps:
//!
//! 1. The tree is checked against the embedded JSON Schema
//!    (`schemas/descriptor.schema.json`, Draft 2020-12) with the
//!    `jsonschema` crate. Every error the validator yields is collected, so
//!    a descriptor can be fixed in a single pass.
//! 2. The checked tree is deserialized into the [`crate::model`] types.
//!
//! A file that cannot be read or is not YAML at all is a different failure,
//! [`SchemaError::DocumentLoad`].

use std::fmt;
use std::path::Path;

use jsonschema::{Draft, Validator};
use serde_json::Value;
use thiserror::Error;

use crate::model::Source;

/// The descriptor schema, compiled into the binary.
pub const DESCRIPTOR_SCHEMA: &str = include_str!("../schemas/descriptor.schema.json");

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// A single field-level problem in a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path to the offending value, e.g. `types.0.fields`. Empty for
    /// the document root. Missing and unknown keys are reported on the
    /// enclosing mapping.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "<document>: {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors returned while loading or validating a descriptor.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The document could not be read or parsed as YAML.
    #[error("failed to load document {path}: {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The embedded schema could not be compiled.
    #[error("failed to build descriptor validator: {reason}")]
    ValidatorBuild { reason: String },

    /// The document parsed but does not match the descriptor schema.
    #[error(
        "{} validation error(s) in {document}: {}",
        .violations.len(),
        format_violations(.violations)
    )]
    ValidationFailed {
        /// The document that was validated.
        document: String,
        /// Every violation found, in validator order.
        violations: Vec<Violation>,
    },
}

impl SchemaError {
    /// The collected violations, empty for load failures.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::ValidationFailed { violations, .. } => violations,
            Self::DocumentLoad { .. } | Self::ValidatorBuild { .. } => &[],
        }
    }
}

/// `/types/0/fields` → `types.0.fields`.
fn dotted(pointer: &str) -> String {
    pointer.trim_start_matches('/').replace('/', ".")
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// The compiled descriptor schema.
pub struct DescriptorValidator {
    validator: Validator,
}

impl fmt::Debug for DescriptorValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorValidator").finish_non_exhaustive()
    }
}

impl DescriptorValidator {
    /// Compile [`DESCRIPTOR_SCHEMA`].
    pub fn new() -> Result<Self, SchemaError> {
        let schema: Value =
            serde_json::from_str(DESCRIPTOR_SCHEMA).map_err(|e| SchemaError::ValidatorBuild {
                reason: format!("invalid schema JSON: {e}"),
            })?;

        let mut opts = jsonschema::options();
        opts.with_draft(Draft::Draft202012);
        let validator = opts
            .build(&schema)
            .map_err(|e| SchemaError::ValidatorBuild {
                reason: e.to_string(),
            })?;

        Ok(Self { validator })
    }

    /// Validate an already-parsed tree. `document` names it in errors.
    pub fn validate(&self, instance: &Value, document: &str) -> Result<Source, SchemaError> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                path: dotted(&e.instance_path.to_string()),
                message: e.to_string(),
            })
            .collect();

        if !violations.is_empty() {
            return Err(SchemaError::ValidationFailed {
                document: document.to_string(),
                violations,
            });
        }

        // The schema admits a few values the model cannot hold, e.g. an
        // integral float such as `1.0` for an enumerator value.
        serde_json::from_value(instance.clone()).map_err(|e| SchemaError::ValidationFailed {
            document: document.to_string(),
            violations: vec![Violation {
                path: String::new(),
                message: e.to_string(),
            }],
        })
    }

    /// Read, parse and validate the descriptor at `path`.
    pub fn load(&self, path: &Path) -> Result<Source, SchemaError> {
        let document = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::DocumentLoad {
            path: document.clone(),
            reason: e.to_string(),
        })?;

        let value: Value = serde_yaml::from_str(&content).map_err(|e| SchemaError::DocumentLoad {
            path: document.clone(),
            reason: format!("YAML parse error: {e}"),
        })?;

        let source = self.validate(&value, &document)?;
        tracing::debug!(
            document = %document,
            name = %source.name,
            types = source.types.as_ref().map_or(0, Vec::len),
            enums = source.enums.as_ref().map_or(0, Vec::len),
            "validated descriptor"
        );
        Ok(source)
    }
}

/// Read, parse and validate the descriptor at `path`.
pub fn load_source(path: &Path) -> Result<Source, SchemaError> {
    DescriptorValidator::new()?.load(path)
}

/// Validate an already-parsed tree. `document` names it in errors.
pub fn validate_source(value: &Value, document: &str) -> Result<Source, SchemaError> {
    DescriptorValidator::new()?.validate(value, document)
}
