//! # gkt-cli — Command-Line Front Ends
//!
//! Two binaries share this library:
//!
//! ```bash
//! # Embed a file as a byte array (definition, then declaration):
//! hexdump -i shaders/blit.spv -n blit_spv -o blit_spv.c
//! hexdump -i shaders/blit.spv -n blit_spv -x -o blit_spv.h
//!
//! # Render descriptors through a template:
//! codegen -i image_desc.gen.yaml mesh_desc.gen.yaml \
//!     -t templates/json_serializers.h.hbs -o json_serializers.h
//! ```
//!
//! Handlers return `anyhow::Result<u8>`: `Ok(0)` on success; any error is
//! logged by the binary and turned into exit code 1.
//!
//! ## Environment
//!
//! - `SOURCE_DATE_EPOCH` pins the "Generated on" timestamp.
//! - Logs go to stderr; stdout carries only generated output.

pub mod codegen;
pub mod hexdump;

use tracing_subscriber::EnvFilter;

/// Initialize stderr logging for a verbosity count (`-v`, `-vv`, `-vvv`).
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
