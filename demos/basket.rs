//! Basket Example
//!
//! Prices a sample basket and prints its receipt.
//!
//! Use `-n` to add that many extra copies of the first volume
//! Use `--other` to add a non-saga title (may be repeated)

use std::io;

use anyhow::Result;
use clap::Parser;
use saga_pricing::{basket::Basket, receipt::Receipt, titles::Title};

/// Arguments for the basket example
#[derive(Debug, Parser)]
struct ExampleBasketArgs {
    /// Extra copies of the first volume to add
    #[clap(short, long, default_value_t = 0)]
    n: usize,

    /// Non-saga titles to add
    #[clap(long)]
    other: Vec<String>,
}

/// Basket Example
pub fn main() -> Result<()> {
    let args = ExampleBasketArgs::parse();

    let mut basket = Basket::with_titles([
        Title::new("Back to the Future 1"),
        Title::new("Back to the Future 2"),
        Title::new("Back to the Future 3"),
    ]);

    for _ in 0..args.n {
        basket.push(Title::new("Back to the Future 1"));
    }

    for title in &args.other {
        basket.push(Title::new(title));
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    Receipt::new(&basket).write_to(&mut handle)?;

    Ok(())
}
