//! Receipt

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Alignment, Style, Theme, object::Columns},
};
use thiserror::Error;

use crate::{
    basket::Basket,
    pricing::{OTHER_UNIT_PRICE, Quote, SAGA_UNIT_PRICE},
    render::format_total,
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Line-by-line receipt for a priced basket.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    basket: &'a Basket,
    quote: Quote,
}

impl<'a> Receipt<'a> {
    /// Price the basket and build its receipt.
    pub fn new(basket: &'a Basket) -> Self {
        Self {
            basket,
            quote: basket.quote(),
        }
    }

    /// The price breakdown behind this receipt.
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// Writes the receipt table and summary.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Title", "Saga", "Unit Price"]);

        for (idx, title) in self.basket.iter().enumerate() {
            let (saga, unit_price) = if title.is_saga_member() {
                ("yes", SAGA_UNIT_PRICE)
            } else {
                ("", OTHER_UNIT_PRICE)
            };

            builder.push_record([
                (idx + 1).to_string(),
                title.to_string(),
                saga.to_string(),
                format_total(unit_price),
            ]);
        }

        write_receipt_table(&mut out, builder)?;
        write_receipt_summary(&mut out, &self.quote)?;

        Ok(())
    }
}

fn write_receipt_table(out: &mut impl io::Write, builder: Builder) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

fn write_receipt_summary(out: &mut impl io::Write, quote: &Quote) -> Result<(), ReceiptError> {
    let saga_label = format!(
        " Saga ({} distinct, {:.0}% off):",
        quote.saga_distinct,
        quote.discount_rate * 100.0
    );

    let lines = [
        (saga_label, format_total(quote.saga_subtotal)),
        (" Other:".to_string(), format_total(quote.other_subtotal)),
        (" Savings:".to_string(), format_total(quote.savings())),
        (" Total:".to_string(), format_total(quote.total)),
    ];

    let label_width = lines
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or_default();

    let value_width = lines
        .iter()
        .map(|(_, value)| value.len())
        .max()
        .unwrap_or_default();

    for (label, value) in &lines {
        writeln!(out, "{label:<label_width$} {value:>value_width$}")?;
    }

    Ok(())
}
