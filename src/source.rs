//! The mutable document source and its line-granular edit operations.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::Fragment;

/// Runs of three or more line breaks, collapsed to a blank line on submit.
static EXCESS_BREAKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{3,}").expect("excess-breaks pattern is valid")
});

/// Clean up user-entered replacement text before it goes into the source:
/// trim surrounding whitespace and collapse any run of 3+ line breaks down
/// to exactly 2, so an edit cannot introduce stray blank paragraphs.
pub fn normalize_replacement(text: &str) -> String {
    EXCESS_BREAKS
        .replace_all(text.trim(), "\n\n")
        .into_owned()
}

/// The full source markup of the current document.
///
/// Loaded once per page view and updated in place after each successful
/// edit, so it always reflects the last known persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSource {
    text: String,
}

impl PageSource {
    /// Wrap freshly fetched source text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The current source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the first occurrence of `fragment` with `new_text`.
    ///
    /// An empty `new_text` deletes the fragment, taking all immediately
    /// following line breaks with it so no blank line is left behind.
    ///
    /// Returns `false` when the fragment no longer occurs in the source
    /// (it went stale under a competing edit); the source is left unchanged.
    pub fn replace_fragment(&mut self, fragment: &Fragment, new_text: &str) -> bool {
        let Some(start) = self.text.find(fragment.text()) else {
            return false;
        };
        let mut end = start + fragment.text().len();
        if new_text.is_empty() {
            let bytes = self.text.as_bytes();
            while end < bytes.len() && bytes[end] == b'\n' {
                end += 1;
            }
        }
        self.text.replace_range(start..end, new_text);
        true
    }
}
