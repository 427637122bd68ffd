//! # hexdump entry point
//!
//! Embeds a binary file as a C byte array.

use std::process::ExitCode;

use clap::Parser;

use gkt_cli::hexdump::{run_hexdump, HexdumpArgs};

/// Generate a C source or header file from a binary file.
#[derive(Parser, Debug)]
#[command(name = "hexdump", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    args: HexdumpArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    gkt_cli::init_tracing(cli.verbose);

    match run_hexdump(&cli.args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
