use super::template::{render, LicenseText};
use super::validate::is_ready;

/// The two raw strings the user has typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub year: String,
    pub author: String,
}

impl FormState {
    pub fn new(year: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            author: author.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        is_ready(&self.year, &self.author)
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_empty() && self.author.is_empty()
    }

    /// Render the license, or `None` while the form is not ready.
    ///
    /// The author is trimmed before substitution; the year needs no
    /// trimming since a ready year is exactly four digits.
    pub fn render(&self) -> Option<LicenseText> {
        self.is_ready()
            .then(|| render(&self.year, self.author.trim()))
    }
}
