//! # codegen entry point
//!
//! Renders validated YAML descriptors through a template.

use std::process::ExitCode;

use clap::Parser;

use gkt_cli::codegen::{run_codegen, CodegenArgs};

/// Grafkit template generator.
#[derive(Parser, Debug)]
#[command(name = "codegen", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    args: CodegenArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    gkt_cli::init_tracing(cli.verbose);

    tracing::debug!(inputs = cli.args.input_files.len(), "codegen starting");

    match run_codegen(&cli.args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
