//! Page-text normalizer: whitespace collapsing and footer stripping.

use std::borrow::Cow;
use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::model::{CleanedDocument, CleanedPage, Document, Page, PageStats};

use super::options::NormalizeOptions;

// Regex patterns (compiled once using LazyLock)
static RE_WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static RE_DEFAULT_FOOTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"& /en [0-9]{1,3}").unwrap());

/// Converts raw page text into cleaned text.
///
/// Each round applies, in order:
///
/// 1. Unicode NFC normalization (only when enabled)
/// 2. Whitespace collapsing: every run of whitespace becomes one space
/// 3. Footer stripping: `& /en` + space + 1..=3 digits is removed
///
/// Rounds repeat until the text stops changing. Removing a footer can leave
/// two spaces side by side, and the next round collapses them. Every round
/// that changes something shortens the text, so the loop terminates, and the
/// result is a fixpoint: normalizing it again returns it unchanged.
///
/// # Example
///
/// ```
/// use pagenorm::PageTextNormalizer;
///
/// let normalizer = PageTextNormalizer::default();
/// let cleaned = normalizer.normalize("Article 1. Something.\n\n& /en 12 Next page text");
/// assert_eq!(cleaned, "Article 1. Something. Next page text");
/// ```
#[derive(Debug, Clone)]
pub struct PageTextNormalizer {
    options: NormalizeOptions,
    footer_regex: Regex,
}

impl PageTextNormalizer {
    /// Create a normalizer with the given options.
    ///
    /// Fails only when a custom footer pattern does not compile.
    pub fn new(options: NormalizeOptions) -> Result<Self> {
        let footer_regex = if options.footer.is_default() {
            RE_DEFAULT_FOOTER.clone()
        } else {
            Regex::new(&options.footer.to_regex_source())?
        };
        Ok(Self {
            options,
            footer_regex,
        })
    }

    /// Options this normalizer was built with.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize one page of text.
    pub fn normalize(&self, text: &str) -> String {
        self.normalize_with_stats(text).0
    }

    /// Normalize one page of text and report what changed.
    pub fn normalize_with_stats(&self, text: &str) -> (String, PageStats) {
        let mut stats = PageStats {
            chars_in: text.chars().count(),
            ..PageStats::default()
        };

        let mut current: Cow<'_, str> = Cow::Borrowed(text);
        let mut rounds = 0usize;

        loop {
            rounds += 1;
            let mut changed = false;

            if self.options.normalize_unicode {
                let composed: String = current.nfc().collect();
                if composed != *current {
                    current = Cow::Owned(composed);
                    changed = true;
                }
            }

            if self.options.collapse_whitespace {
                let runs = RE_WHITESPACE_RUN
                    .find_iter(&current)
                    .filter(|m| m.as_str() != " ")
                    .count();
                if runs > 0 {
                    current = Cow::Owned(RE_WHITESPACE_RUN.replace_all(&current, " ").into_owned());
                    stats.whitespace_runs += runs;
                    changed = true;
                }
            }

            if self.options.strip_footers {
                let footers = self.footer_regex.find_iter(&current).count();
                if footers > 0 {
                    current = Cow::Owned(self.footer_regex.replace_all(&current, "").into_owned());
                    stats.footers_removed += footers;
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }

        if rounds > 3 {
            log::debug!("Page text settled after {} rounds", rounds);
        }

        let mut output = current.into_owned();
        if self.options.trim {
            let trimmed = output.trim();
            if trimmed.len() != output.len() {
                output = trimmed.to_string();
            }
        }

        stats.chars_out = output.chars().count();
        (output, stats)
    }

    /// Normalize a page, keeping its number.
    pub fn normalize_page(&self, page: &Page) -> CleanedPage {
        let (text, stats) = self.normalize_with_stats(&page.text);
        CleanedPage::new(page.number, text, stats)
    }

    /// Normalize every page of a document.
    ///
    /// The result has the same number of pages in the same order.
    pub fn normalize_document(&self, doc: &Document) -> CleanedDocument {
        let pages: Vec<CleanedPage> = if self.options.parallel && doc.pages.len() > 1 {
            doc.pages
                .par_iter()
                .map(|page| self.normalize_page(page))
                .collect()
        } else {
            doc.pages
                .iter()
                .map(|page| self.normalize_page(page))
                .collect()
        };

        log::debug!(
            "Normalized {} pages ({} footers removed)",
            pages.len(),
            pages.iter().map(|p| p.stats.footers_removed).sum::<usize>()
        );

        CleanedDocument {
            source: doc.source.clone(),
            pages,
        }
    }

    /// Normalize a slice of raw page strings, preserving order and count.
    pub fn normalize_texts<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        if self.options.parallel && texts.len() > 1 {
            texts
                .par_iter()
                .map(|text| self.normalize(text.as_ref()))
                .collect()
        } else {
            texts
                .iter()
                .map(|text| self.normalize(text.as_ref()))
                .collect()
        }
    }
}

impl Default for PageTextNormalizer {
    fn default() -> Self {
        Self {
            options: NormalizeOptions::default(),
            footer_regex: RE_DEFAULT_FOOTER.clone(),
        }
    }
}
