//! Saga Pricing CLI

use std::{io, process::ExitCode};

use clap::Parser;
use tracing::error;

use saga_pricing::{cli::Cli, logging};

/// Saga Pricing CLI entry point
pub fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = logging::init(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    match cli.run(io::stdin().lock(), io::stdout().lock(), io::stderr()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "failed to price basket");

            #[expect(clippy::print_stderr, reason = "user-facing error report")]
            {
                eprintln!("{err}");
            }

            ExitCode::FAILURE
        }
    }
}
