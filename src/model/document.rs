//! Document-level types.

use super::{CleanedPage, Page};
use serde::{Deserialize, Serialize};

/// An ordered sequence of extracted pages in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Where the pages came from (file path or name)
    pub source: Option<String>,

    /// Pages in reading order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with a source label.
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            pages: Vec::new(),
        }
    }

    /// Build a document from raw page strings, numbering them from 1.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Page::new(i as u32 + 1, text))
            .collect();
        Self {
            source: None,
            pages,
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by its number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        self.pages.iter().find(|p| p.number == page_num)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// A document after normalization. Same page count and order as its source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedDocument {
    /// Source label copied from the input document
    pub source: Option<String>,

    /// Cleaned pages in reading order
    pub pages: Vec<CleanedPage>,
}

impl CleanedDocument {
    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by its number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&CleanedPage> {
        self.pages.iter().find(|p| p.number == page_num)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Cleaned page texts in order.
    pub fn texts(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert!(doc.source.is_none());
    }

    #[test]
    fn test_from_texts_numbers_pages() {
        let doc = Document::from_texts(["a", "b", "c"]);
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.pages[0].number, 1);
        assert_eq!(doc.pages[2].number, 3);
        assert_eq!(doc.get_page(2).map(|p| p.text.as_str()), Some("b"));
        assert!(doc.get_page(0).is_none());
    }

    #[test]
    fn test_get_page_by_number_after_selection() {
        let mut doc = Document::with_source("speeches.pdf");
        doc.add_page(Page::new(4, "four"));
        doc.add_page(Page::new(7, "seven"));

        assert_eq!(doc.get_page(7).map(|p| p.text.as_str()), Some("seven"));
        assert!(doc.get_page(1).is_none());
    }
}
