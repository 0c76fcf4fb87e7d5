//! Rendering options and configuration.

use crate::error::{Error, Result};
use std::ops::RangeInclusive;

/// Options for rendering cleaned pages.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Text placed between consecutive pages
    pub page_separator: String,

    /// Page selection
    pub page_selection: PageSelection,

    /// Leave out pages whose cleaned text is blank
    pub skip_empty_pages: bool,

    /// Emit a `--- page N ---` line before each page
    pub include_page_markers: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_separator = separator.into();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, selection: PageSelection) -> Self {
        self.page_selection = selection;
        self
    }

    /// Enable or disable skipping of blank pages.
    pub fn with_skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty_pages = skip;
        self
    }

    /// Enable or disable page marker lines.
    pub fn with_page_markers(mut self, include: bool) -> Self {
        self.include_page_markers = include;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_separator: "\n\n".to_string(),
            page_selection: PageSelection::All,
            skip_empty_pages: false,
            include_page_markers: false,
        }
    }
}

/// Page selection for extraction and rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// All pages
    #[default]
    All,
    /// A range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Specific pages (1-indexed)
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }

    /// First selected page that a document of `total` pages lacks.
    ///
    /// A range only counts as missing when it starts past the end.
    pub fn first_missing(&self, total: u32) -> Option<u32> {
        match self {
            PageSelection::All => None,
            PageSelection::Range(range) => Some(*range.start()).filter(|&start| start > total),
            PageSelection::Pages(pages) => pages.iter().copied().find(|&p| p > total),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        let invalid = || Error::InvalidPageRange(s.to_string());

        // Check for simple range (e.g., "1-10")
        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                let start: u32 = start.trim().parse().map_err(|_| invalid())?;
                let end: u32 = end.trim().parse().map_err(|_| invalid())?;
                if start == 0 || start > end {
                    return Err(invalid());
                }
                return Ok(PageSelection::Range(start..=end));
            }
        }

        // Parse comma-separated list with possible ranges
        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            let (start, end) = match part.split_once('-') {
                Some((start, end)) => (start.trim(), end.trim()),
                None => (part, part),
            };
            let start: u32 = start.parse().map_err(|_| invalid())?;
            let end: u32 = end.parse().map_err(|_| invalid())?;
            if start == 0 || start > end {
                return Err(invalid());
            }
            for p in start..=end {
                if !pages.contains(&p) {
                    pages.push(p);
                }
            }
        }

        pages.sort_unstable();
        Ok(PageSelection::Pages(pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_separator("\n")
            .with_skip_empty(true)
            .with_page_markers(true);

        assert_eq!(options.page_separator, "\n");
        assert!(options.skip_empty_pages);
        assert!(options.include_page_markers);
    }

    #[test]
    fn test_page_selection_includes() {
        let all = PageSelection::All;
        assert!(all.includes(1));
        assert!(all.includes(100));

        let range = PageSelection::Range(5..=10);
        assert!(!range.includes(4));
        assert!(range.includes(5));
        assert!(range.includes(10));
        assert!(!range.includes(11));

        let pages = PageSelection::Pages(vec![1, 3, 5, 7]);
        assert!(pages.includes(1));
        assert!(!pages.includes(2));
        assert!(pages.includes(3));
    }

    #[test]
    fn test_page_selection_first_missing() {
        assert_eq!(PageSelection::All.first_missing(0), None);
        assert_eq!(PageSelection::Range(2..=10).first_missing(3), None);
        assert_eq!(PageSelection::Range(4..=10).first_missing(3), Some(4));
        assert_eq!(PageSelection::Pages(vec![1, 3, 8, 9]).first_missing(5), Some(8));
        assert_eq!(PageSelection::Pages(vec![1, 5]).first_missing(5), None);
    }

    #[test]
    fn test_page_selection_parse() {
        assert_eq!(PageSelection::parse("all").unwrap(), PageSelection::All);
        assert_eq!(PageSelection::parse("1-10").unwrap(), PageSelection::Range(1..=10));
        assert_eq!(
            PageSelection::parse("10,1,3,5-7,3").unwrap(),
            PageSelection::Pages(vec![1, 3, 5, 6, 7, 10])
        );
    }

    #[test]
    fn test_page_selection_parse_invalid() {
        assert!(matches!(
            PageSelection::parse("x-3"),
            Err(Error::InvalidPageRange(_))
        ));
        assert!(PageSelection::parse("5-2").is_err());
        assert!(PageSelection::parse("0").is_err());
        assert!(PageSelection::parse("1,,2").is_err());
    }
}
