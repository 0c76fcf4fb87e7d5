//! Document-level normalization statistics.

use crate::model::CleanedDocument;
use serde::{Deserialize, Serialize};

/// Totals collected over all pages of a cleaned document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeStats {
    /// Total number of pages processed
    pub page_count: u32,

    /// Pages whose cleaned text is blank
    pub empty_pages: u32,

    /// Characters before normalization
    pub chars_in: usize,

    /// Characters after normalization
    pub chars_out: usize,

    /// Approximate word count of the cleaned text
    pub word_count: usize,

    /// Whitespace runs collapsed to a single space
    pub whitespace_runs: usize,

    /// Footer markers removed
    pub footers_removed: usize,
}

impl NormalizeStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum the per-page counters of a document.
    pub fn from_document(doc: &CleanedDocument) -> Self {
        doc.pages.iter().fold(Self::new(), |mut stats, page| {
            stats.page_count += 1;
            if page.is_blank() {
                stats.empty_pages += 1;
            }
            stats.chars_in += page.stats.chars_in;
            stats.chars_out += page.stats.chars_out;
            stats.word_count += page.word_count();
            stats.whitespace_runs += page.stats.whitespace_runs;
            stats.footers_removed += page.stats.footers_removed;
            stats
        })
    }

    /// Share of characters removed, between 0.0 and 1.0.
    pub fn reduction_ratio(&self) -> f64 {
        if self.chars_in == 0 {
            return 0.0;
        }
        1.0 - self.chars_out as f64 / self.chars_in as f64
    }

    /// Fold another document's totals into these.
    pub fn merge(&mut self, other: &NormalizeStats) {
        self.page_count += other.page_count;
        self.empty_pages += other.empty_pages;
        self.chars_in += other.chars_in;
        self.chars_out += other.chars_out;
        self.word_count += other.word_count;
        self.whitespace_runs += other.whitespace_runs;
        self.footers_removed += other.footers_removed;
    }
}
