//! Discounts
//!
//! Saga discounts are chosen from an ordered table of tiers keyed on the
//! number of distinct saga titles in a basket. The highest threshold that the
//! distinct count reaches wins.

use std::cmp::Reverse;

use smallvec::SmallVec;

/// Standard saga tiers as `(min_distinct, rate)`.
const STANDARD_TIERS: [(usize, f64); 3] = [(3, 0.20), (2, 0.10), (1, 0.00)];

/// A single discount tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountTier {
    /// Minimum number of distinct saga titles required for this tier.
    pub min_distinct: usize,

    /// Fraction taken off the saga subtotal, e.g. `0.2` for 20% off.
    pub rate: f64,
}

impl DiscountTier {
    /// Create a new tier.
    pub const fn new(min_distinct: usize, rate: f64) -> Self {
        Self { min_distinct, rate }
    }

    /// Whether a basket with `distinct` saga titles reaches this tier.
    pub const fn applies_to(&self, distinct: usize) -> bool {
        distinct >= self.min_distinct
    }
}

/// Discount tiers, held highest threshold first.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountTable {
    tiers: SmallVec<[DiscountTier; 4]>,
}

impl DiscountTable {
    /// Create a table from tiers given in any order.
    pub fn new(tiers: impl IntoIterator<Item = DiscountTier>) -> Self {
        let mut tiers: SmallVec<[DiscountTier; 4]> = tiers.into_iter().collect();

        tiers.sort_by_key(|tier| Reverse(tier.min_distinct));

        Self { tiers }
    }

    /// The fixed saga table: 3+ distinct titles 20% off, 2 titles 10% off,
    /// a single title full price.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_TIERS
                .iter()
                .map(|&(min_distinct, rate)| DiscountTier::new(min_distinct, rate)),
        )
    }

    /// Tiers, highest threshold first.
    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// Find the tier for a distinct title count.
    ///
    /// Returns `None` when the count is below every threshold.
    pub fn tier_for(&self, distinct: usize) -> Option<&DiscountTier> {
        self.tiers.iter().find(|tier| tier.applies_to(distinct))
    }

    /// Discount rate for a distinct title count, `0.0` if no tier applies.
    pub fn rate_for(&self, distinct: usize) -> f64 {
        self.tier_for(distinct).map_or(0.0, |tier| tier.rate)
    }
}

impl Default for DiscountTable {
    fn default() -> Self {
        Self::standard()
    }
}
