//! Pricing
//!
//! Saga titles cost [`SAGA_UNIT_PRICE`] each and are discounted as a group
//! according to how many *distinct* volumes are in the basket. Every other
//! title costs [`OTHER_UNIT_PRICE`] and is never discounted.
//!
//! All arithmetic is plain `f64` with no currency rounding: the discount is
//! applied once to the extended saga price, not per unit.

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

use crate::{discounts::DiscountTable, titles::Title};

/// Unit price of a saga title.
pub const SAGA_UNIT_PRICE: f64 = 15.0;

/// Unit price of any other title.
pub const OTHER_UNIT_PRICE: f64 = 20.0;

/// Price breakdown for a basket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// Saga units, duplicates included.
    pub saga_units: usize,

    /// Distinct saga titles.
    pub saga_distinct: usize,

    /// Discount rate applied to the saga subtotal.
    pub discount_rate: f64,

    /// Saga subtotal after discount.
    pub saga_subtotal: f64,

    /// Units of every other title.
    pub other_units: usize,

    /// Subtotal for every other title.
    pub other_subtotal: f64,

    /// Amount payable.
    pub total: f64,
}

impl Quote {
    /// Saga price before the discount was applied.
    pub fn saga_full_price(&self) -> f64 {
        extended_price(self.saga_units, SAGA_UNIT_PRICE)
    }

    /// Amount saved by the saga discount.
    pub fn savings(&self) -> f64 {
        self.saga_full_price() - self.saga_subtotal
    }
}

/// Calculates the total price of a list of titles.
pub fn calculate_total(titles: &[Title]) -> f64 {
    quote(titles).total
}

/// Calculates the full price breakdown of a list of titles using the
/// standard discount table.
pub fn quote(titles: &[Title]) -> Quote {
    quote_with_table(titles, &DiscountTable::standard())
}

/// Calculates the price breakdown of a list of titles against a discount table.
pub fn quote_with_table(titles: &[Title], table: &DiscountTable) -> Quote {
    let (saga, other): (Vec<&Title>, Vec<&Title>) =
        titles.iter().partition(|title| title.is_saga_member());

    let other_units = other.len();
    let other_subtotal = extended_price(other_units, OTHER_UNIT_PRICE);

    let (saga_distinct, discount_rate, saga_subtotal) = saga_subtotal(&saga, table);

    Quote {
        saga_units: saga.len(),
        saga_distinct,
        discount_rate,
        saga_subtotal,
        other_units,
        other_subtotal,
        total: other_subtotal + saga_subtotal,
    }
}

/// Returns `(distinct, rate, subtotal)` for the saga titles of a basket.
fn saga_subtotal(saga: &[&Title], table: &DiscountTable) -> (usize, f64, f64) {
    if saga.is_empty() {
        return (0, 0.0, 0.0);
    }

    let distinct = distinct_titles(saga);
    let rate = table.rate_for(distinct);

    debug!(
        units = saga.len(),
        distinct, rate, "selected saga discount tier"
    );

    let subtotal = extended_price(saga.len(), SAGA_UNIT_PRICE) * (1.0 - rate);

    (distinct, rate, subtotal)
}

/// Count unique title strings.
fn distinct_titles(titles: &[&Title]) -> usize {
    titles
        .iter()
        .map(|title| title.title())
        .collect::<FxHashSet<_>>()
        .len()
}

#[expect(
    clippy::cast_precision_loss,
    reason = "basket sizes are far below 2^52"
)]
fn extended_price(units: usize, unit_price: f64) -> f64 {
    units as f64 * unit_price
}
