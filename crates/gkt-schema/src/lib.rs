//! # gkt-schema — Codegen Descriptor Schema
//!
//! Codegen descriptors are YAML files describing the structs and enums a
//! template should emit:
//!
//! ```yaml
//! name: image_desc
//! namespace: Grafkit::Resource
//! includes: ["grafkit/descriptors/image_desc.h"]
//! types:
//!   - name: ImageDesc
//!     fields:
//!       - { type: uint32_t, name: channels, default: 4 }
//! enums:
//!   - name: Format
//!     elems:
//!       - { name: RGBA8, value: 0, comment: "8 bits per channel" }
//! ```
//!
//! [`load_source`] reads and validates one file into a [`Source`]. Validation
//! is a trust boundary: nothing reaches a template until the whole document
//! has been checked against the embedded JSON Schema, and every problem in
//! it is reported at once. Callers loading many files can compile the schema
//! once with [`DescriptorValidator::new`] and reuse it.

pub mod model;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use model::{Enum, EnumElement, Field, Scalar, Source, Type};
pub use validate::{
    load_source, validate_source, DescriptorValidator, SchemaError, Violation, DESCRIPTOR_SCHEMA,
};
