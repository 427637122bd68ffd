//! # Hexdump Command
//!
//! Embeds a binary file in C/C++ source as a `uint8_t` array plus a
//! `size_t` length. Run once without `--header` for the definition and once
//! with it for the matching declarations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use gkt_core::{require_identifier, TimestampPolicy};
use gkt_render::{embedded, write_output, HexdumpContext, TemplateRenderer};

/// Arguments for `hexdump`.
#[derive(Args, Debug)]
pub struct HexdumpArgs {
    /// The binary file to embed.
    #[arg(long = "input_file", short = 'i', value_name = "FILE")]
    pub input_file: PathBuf,

    /// Name of the generated array. Sanitized into a C identifier.
    #[arg(long = "array_name", short = 'n', value_name = "NAME")]
    pub array_name: String,

    /// Emit the include-guarded declarations instead of the definition.
    #[arg(long, short = 'x')]
    pub header: bool,

    /// Write here instead of stdout.
    #[arg(long = "output_file", short = 'o', value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Custom Handlebars template instead of the built-in one.
    #[arg(long, short = 't', value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Leave the "Generated on" line out.
    #[arg(long)]
    pub no_timestamp: bool,
}

/// Execute the hexdump command.
pub fn run_hexdump(args: &HexdumpArgs) -> Result<u8> {
    let array_name = require_identifier(&args.array_name).context("invalid --array_name")?;
    if array_name.as_str() != args.array_name {
        tracing::info!(
            requested = %args.array_name,
            sanitized = %array_name,
            "array name sanitized"
        );
    }

    let data = std::fs::read(&args.input_file)
        .with_context(|| format!("failed to read input file: {}", args.input_file.display()))?;
    tracing::debug!(
        input = %args.input_file.display(),
        bytes = data.len(),
        header = args.header,
        "read input file"
    );

    let timestamp = TimestampPolicy::from_env(args.no_timestamp)?;
    let context = HexdumpContext::new(&args.input_file, array_name, args.header, timestamp, data);

    let renderer = TemplateRenderer::standard();
    let content = match &args.template {
        Some(path) => renderer.render_file(path, &context)?,
        None => renderer.render(embedded::HEXDUMP, &context)?,
    };

    write_output(args.output_file.as_deref(), &content)?;
    Ok(0)
}
