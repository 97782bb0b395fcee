//! CLI entry point for the mosaic generator

use clap::Parser;
use std::process::ExitCode;
use tilemosaic::MosaicConfig;
use tilemosaic::io::cli::Cli;
use tilemosaic::io::error::MosaicError;

// Allow print for the single terminal error report
#[allow(clippy::print_stderr)]
fn report(error: &MosaicError) -> ExitCode {
    eprintln!("Error: {error}");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version requests print to stdout and succeed
        Err(error) if !error.use_stderr() => error.exit(),
        Err(error) => return report(&error.into()),
    };

    match MosaicConfig::try_from(cli).and_then(tilemosaic::run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(&error),
    }
}
