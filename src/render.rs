//! Output rendering

use std::io;

use thiserror::Error;

use crate::{
    basket::Basket,
    pricing::Quote,
    receipt::{Receipt, ReceiptError},
};

/// Errors raised while writing rendered output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// The quote could not be serialised.
    #[error("failed to serialise quote: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The receipt could not be written.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

/// Format a price as whole-number text when it has no fractional part,
/// otherwise as the shortest decimal text.
pub fn format_total(total: f64) -> String {
    if total.fract() == 0.0 {
        format!("{total:.0}")
    } else {
        total.to_string()
    }
}

/// Write the total on a single line.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_total(mut out: impl io::Write, total: f64) -> Result<(), RenderError> {
    writeln!(out, "{}", format_total(total))?;

    Ok(())
}

/// Write the quote as a YAML document.
///
/// # Errors
///
/// Returns a [`RenderError`] if serialisation or writing fails.
pub fn write_yaml(mut out: impl io::Write, quote: &Quote) -> Result<(), RenderError> {
    let yaml = serde_norway::to_string(quote)?;

    out.write_all(yaml.as_bytes())?;

    Ok(())
}

/// Write the tabular receipt for a basket.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_receipt(out: impl io::Write, basket: &Basket) -> Result<(), RenderError> {
    Receipt::new(basket).write_to(out)?;

    Ok(())
}
