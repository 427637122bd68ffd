//! # Codegen Command
//!
//! Validates one or more YAML descriptors, merges them into a single render
//! context, and renders that context through a template.
//!
//! Every descriptor is validated before the template is even read; a
//! malformed descriptor never produces partial output.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use gkt_core::TimestampPolicy;
use gkt_render::{build_context, write_output, ContextOptions, LoadedSource, TemplateRenderer};
use gkt_schema::DescriptorValidator;

/// Arguments for `codegen`.
#[derive(Args, Debug)]
pub struct CodegenArgs {
    /// Descriptor files to render, in order.
    #[arg(
        long = "input-files",
        short = 'i',
        value_name = "FILE",
        required = true,
        num_args = 1..
    )]
    pub input_files: Vec<PathBuf>,

    /// Handlebars template to render.
    #[arg(long = "template-file", short = 't', value_name = "FILE")]
    pub template_file: PathBuf,

    /// Include paths added to every descriptor's includes.
    #[arg(long = "extra-includes", value_name = "INCLUDE", num_args = 1..)]
    pub extra_includes: Vec<String>,

    /// Write here instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Leave the timestamp out of the context.
    #[arg(long)]
    pub no_timestamp: bool,
}

/// Execute the codegen command, taking the timestamp from the environment.
pub fn run_codegen(args: &CodegenArgs) -> Result<u8> {
    let timestamp = TimestampPolicy::from_env(args.no_timestamp)?;
    run_codegen_with(args, timestamp)
}

/// Execute the codegen command with an already resolved timestamp.
pub fn run_codegen_with(args: &CodegenArgs, timestamp: TimestampPolicy) -> Result<u8> {
    if args.input_files.is_empty() {
        bail!("no input files provided");
    }

    let sources = load_all(&args.input_files)?;

    let options = ContextOptions {
        template_file: &args.template_file,
        output_file: args.output.as_deref(),
        extra_includes: &args.extra_includes,
        timestamp,
    };
    let context = build_context(sources, &options)?;

    let content = TemplateRenderer::standard().render_file(&args.template_file, &context)?;
    write_output(args.output.as_deref(), &content)?;
    Ok(0)
}

/// Load and validate every descriptor, reporting each failing file before
/// giving up.
fn load_all(paths: &[PathBuf]) -> Result<Vec<LoadedSource>> {
    let validator = DescriptorValidator::new()?;
    let mut sources = Vec::with_capacity(paths.len());
    let mut failures = Vec::new();

    for path in paths {
        match validator.load(path) {
            Ok(source) => sources.push(LoadedSource {
                path: path.clone(),
                source,
            }),
            Err(e) => {
                tracing::error!("{e}");
                failures.push(e);
            }
        }
    }

    match failures.len() {
        0 => Ok(sources),
        1 => Err(failures.remove(0).into()),
        n => bail!("{n} of {} input files failed to load", paths.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Wrap {
        #[command(flatten)]
        args: CodegenArgs,
    }

    #[test]
    fn parses_multiple_inputs_and_includes() {
        let w = Wrap::try_parse_from([
            "codegen",
            "-i",
            "a.yaml",
            "b.yaml",
            "-t",
            "t.hbs",
            "--extra-includes",
            "x.h",
            "y.h",
            "-o",
            "out.h",
        ])
        .unwrap();
        assert_eq!(w.args.input_files.len(), 2);
        assert_eq!(w.args.extra_includes, vec!["x.h", "y.h"]);
        assert_eq!(w.args.output, Some(PathBuf::from("out.h")));
        assert!(!w.args.no_timestamp);
    }

    #[test]
    fn inputs_and_template_are_required() {
        assert!(Wrap::try_parse_from(["codegen", "-t", "t.hbs"]).is_err());
        assert!(Wrap::try_parse_from(["codegen", "-i", "a.yaml"]).is_err());
    }

    #[test]
    fn extra_includes_default_to_empty() {
        let w = Wrap::try_parse_from(["codegen", "-i", "a.yaml", "-t", "t.hbs"]).unwrap();
        assert!(w.args.extra_includes.is_empty());
        assert!(w.args.output.is_none());
    }

    #[test]
    fn every_failing_file_is_counted() {
        let paths = vec![
            PathBuf::from("/nonexistent/gkt/a.yaml"),
            PathBuf::from("/nonexistent/gkt/b.yaml"),
        ];
        let err = load_all(&paths).unwrap_err();
        assert_eq!(err.to_string(), "2 of 2 input files failed to load");
    }
}
