//! Basket text parser
//!
//! Input is line oriented: one title per line, with either `\n` or `\r\n`
//! line endings. Surrounding whitespace is trimmed and blank lines are
//! skipped. Any text is valid input, so parsing cannot fail.

use crate::{basket::Basket, titles::Title};

/// Parse raw text into a basket, one title per non-blank line.
pub fn parse(raw_text: &str) -> Basket {
    raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Title::new)
        .collect()
}
