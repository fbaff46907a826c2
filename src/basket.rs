//! Basket

use std::slice;

use crate::{
    pricing::{Quote, calculate_total, quote},
    titles::Title,
};

/// An ordered basket of titles.
///
/// Insertion order is kept and duplicate titles are allowed; each entry is one
/// physical unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Basket {
    titles: Vec<Title>,
}

impl Basket {
    /// Create a new, empty basket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a basket from the given titles.
    pub fn with_titles(titles: impl Into<Vec<Title>>) -> Self {
        Self {
            titles: titles.into(),
        }
    }

    /// Add a title to the end of the basket.
    pub fn push(&mut self, title: Title) {
        self.titles.push(title);
    }

    /// The titles in the basket, in insertion order.
    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    /// Iterate over the titles in the basket.
    pub fn iter(&self) -> slice::Iter<'_, Title> {
        self.titles.iter()
    }

    /// Split the basket into saga titles and everything else.
    pub fn partition_saga(&self) -> (Vec<&Title>, Vec<&Title>) {
        self.titles.iter().partition(|title| title.is_saga_member())
    }

    /// Join the titles back into newline separated text.
    pub fn to_lines(&self) -> String {
        self.titles
            .iter()
            .map(Title::title)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Calculate the total price of the basket.
    pub fn total(&self) -> f64 {
        calculate_total(&self.titles)
    }

    /// Calculate the full price breakdown of the basket.
    pub fn quote(&self) -> Quote {
        quote(&self.titles)
    }

    /// Get the number of titles in the basket.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl From<Vec<Title>> for Basket {
    fn from(titles: Vec<Title>) -> Self {
        Self { titles }
    }
}

impl FromIterator<Title> for Basket {
    fn from_iter<I: IntoIterator<Item = Title>>(iter: I) -> Self {
        Self {
            titles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Basket {
    type Item = &'a Title;
    type IntoIter = slice::Iter<'a, Title>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
