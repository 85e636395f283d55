use serde::{Deserialize, Serialize};

use crate::target::Target;

/// The record produced for one target page.
///
/// Every configured target yields exactly one `PageResult`, in target order.
/// A page that could not be fetched keeps its id, title, and URL but carries
/// empty `text` and `translation`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageResult {
    /// Page identifier (e.g., "preface", "1").
    pub id: String,
    /// Display title (e.g., "Text 1").
    pub title: String,
    /// Absolute URL the page was fetched from.
    pub url: String,
    /// Plain text extracted from the page body.
    pub text: String,
    /// Excerpt following the "TRANSLATION" marker, at most 300 characters.
    pub translation: String,
}

impl PageResult {
    /// Build a result for `target` from extracted text.
    pub fn from_target(target: &Target, text: String, translation: String) -> Self {
        Self {
            id: target.id.clone(),
            title: target.title.clone(),
            url: target.url.clone(),
            text,
            translation,
        }
    }

    /// The placeholder recorded when a page produced no content.
    pub fn empty(target: &Target) -> Self {
        Self::from_target(target, String::new(), String::new())
    }

    /// True when the page yielded no text (typically a failed fetch).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.translation.is_empty()
    }
}
