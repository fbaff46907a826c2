//! Command line interface
//!
//! Reads a basket (one title per line) from stdin or a file, prices it and
//! writes the result in the requested format.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use clap::Parser;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    logging::LoggingConfig,
    parser::parse,
    render::{RenderError, write_receipt, write_total, write_yaml},
};

/// Hint shown before reading interactively.
pub const PROMPT: &str =
    "Enter the titles in the basket, one per line. Finish with Ctrl+D (Linux/Mac) or Ctrl+Z (Windows).";

/// Output format for the priced basket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Just the total.
    #[default]
    Plain,

    /// A table of line items followed by subtotals.
    Receipt,

    /// The full breakdown as YAML.
    Yaml,
}

/// Errors surfaced by the command line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        /// File that failed to read.
        path: PathBuf,

        /// Underlying IO error.
        source: io::Error,
    },

    /// Standard input could not be read.
    #[error("failed to read standard input: {0}")]
    ReadStdin(#[source] io::Error),

    /// A diagnostic could not be written.
    #[error("failed to write: {0}")]
    Write(#[source] io::Error),

    /// The priced output could not be written.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Price a basket of home-video titles.
#[derive(Debug, Parser)]
#[command(name = "saga-pricing", version, about, long_about = None)]
pub struct Cli {
    /// Read the basket from this file instead of standard input
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format (plain, receipt, yaml)
    #[arg(short, long, env = "SAGA_PRICING_FORMAT", value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Print an input hint on stderr before reading
    #[arg(long)]
    pub prompt: bool,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Cli {
    /// Read the basket, price it and write the result to `out`.
    ///
    /// `stdin` is only read when no input file was given; `err` receives the
    /// prompt.
    ///
    /// # Errors
    ///
    /// Returns a [`CliError`] if the input cannot be read or the output cannot
    /// be written.
    pub fn run(
        &self,
        stdin: impl Read,
        out: impl io::Write,
        mut err: impl io::Write,
    ) -> Result<(), CliError> {
        if self.prompt {
            writeln!(err, "{PROMPT}").map_err(CliError::Write)?;
        }

        let raw = self.read_input(stdin)?;

        price_input(&raw, self.format, out)
    }

    fn read_input(&self, mut stdin: impl Read) -> Result<String, CliError> {
        if let Some(path) = &self.input {
            debug!(path = %path.display(), "reading basket from file");

            return fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                path: path.clone(),
                source,
            });
        }

        let mut raw = String::new();
        stdin
            .read_to_string(&mut raw)
            .map_err(CliError::ReadStdin)?;

        Ok(raw)
    }
}

/// Price raw basket text and write it in the given format.
///
/// Blank input short-circuits to `0` without parsing.
///
/// # Errors
///
/// Returns a [`CliError`] if the output cannot be written.
pub fn price_input(
    raw: &str,
    format: OutputFormat,
    mut out: impl io::Write,
) -> Result<(), CliError> {
    if raw.trim().is_empty() {
        info!("empty basket");

        writeln!(out, "0").map_err(CliError::Write)?;

        return Ok(());
    }

    let basket = parse(raw);

    info!(titles = basket.len(), ?format, "pricing basket");

    match format {
        OutputFormat::Plain => write_total(out, basket.total())?,
        OutputFormat::Receipt => write_receipt(out, &basket)?,
        OutputFormat::Yaml => write_yaml(out, &basket.quote())?,
    }

    Ok(())
}
