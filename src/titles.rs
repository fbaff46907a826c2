//! Titles

use std::fmt;

use serde::Serialize;

/// Substring that marks a title as part of the discounted saga.
pub const SAGA_NAME: &str = "Back to the Future";

/// A single title in a basket.
///
/// Two titles are equal (and hash the same) when their text is identical.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Title {
    title: String,
}

impl Title {
    /// Creates a new title, trimming surrounding whitespace.
    pub fn new(title: impl AsRef<str>) -> Self {
        Self {
            title: title.as_ref().trim().to_string(),
        }
    }

    /// Returns the title text
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the title belongs to the saga.
    ///
    /// This is a case-sensitive substring match: any text around
    /// [`SAGA_NAME`] is accepted.
    pub fn is_saga_member(&self) -> bool {
        self.title.contains(SAGA_NAME)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl From<&str> for Title {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}
