//! Page-level types.

use serde::{Deserialize, Serialize};

/// A single page of extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed position in the source document)
    pub number: u32,

    /// Raw extracted text, including newlines and other whitespace variants
    pub text: String,
}

impl Page {
    /// Create a new page.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Create a page with no text.
    pub fn empty(number: u32) -> Self {
        Self::new(number, String::new())
    }
}

/// A page after normalization. Keeps the number of the page it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedPage {
    /// Page number copied from the source page
    pub number: u32,

    /// Normalized text
    pub text: String,

    /// What the normalizer changed on this page
    pub stats: PageStats,
}

impl CleanedPage {
    /// Create a cleaned page.
    pub fn new(number: u32, text: impl Into<String>, stats: PageStats) -> Self {
        Self {
            number,
            text: text.into(),
            stats,
        }
    }

    /// Check if the cleaned text is empty or a lone boundary space.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Approximate word count (whitespace-separated tokens).
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Per-page normalization counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStats {
    /// Characters in the raw text
    pub chars_in: usize,

    /// Characters in the normalized text
    pub chars_out: usize,

    /// Whitespace runs replaced by a single space
    pub whitespace_runs: usize,

    /// Footer markers removed
    pub footers_removed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(3, "Hello");
        assert_eq!(page.number, 3);
        assert_eq!(page.text, "Hello");
        assert_eq!(Page::empty(1).text, "");
    }

    #[test]
    fn test_cleaned_page_word_count() {
        let page = CleanedPage::new(1, "one two three", PageStats::default());
        assert_eq!(page.word_count(), 3);
        assert!(!page.is_blank());
        assert!(CleanedPage::new(2, " ", PageStats::default()).is_blank());
    }
}
