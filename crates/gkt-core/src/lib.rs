//! # gkt-core — Foundational Helpers for the grafkit Code Generators
//!
//! Leaf crate of the workspace. Everything here is a pure function over
//! strings and bytes; template helpers in `gkt-render` and the CLI handlers
//! in `gkt-cli` are thin wrappers around these.
//!
//! ## Contents
//!
//! - [`ident`] — maps arbitrary names onto C/C++ identifiers.
//! - [`chunk`] — splits byte buffers into offset-tagged rows of `0xHH` literals.
//! - [`case`] — snake_case to CamelCase conversions for generated type names.
//! - [`temporal`] — the optional "Generated on" timestamp, pinned by
//!   `SOURCE_DATE_EPOCH` for reproducible builds.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gkt-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod case;
pub mod chunk;
pub mod error;
pub mod ident;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use case::{snake_to_camel_case, snake_to_lower_camel_case};
pub use chunk::{chunks, hex_byte, hex_offset, Chunk, Chunks, DEFAULT_CHUNK_SIZE};
pub use error::{ChunkError, IdentError, TimestampError};
pub use ident::{require_identifier, sanitize_identifier, Identifier};
pub use temporal::{BuildTimestamp, TimestampPolicy, SOURCE_DATE_EPOCH_VAR};
