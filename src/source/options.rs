//! Extraction options and configuration.

use crate::render::PageSelection;

/// Options for reading pages from a source.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Page selection (which pages to extract)
    pub pages: PageSelection,
}

impl SourceOptions {
    /// Create new source options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (keep going past unreadable pages).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }
}

/// Error handling mode during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    #[default]
    Strict,
    /// Substitute an empty page for one that cannot be read, or decode
    /// invalid UTF-8 lossily
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_options_builder() {
        let options = SourceOptions::new()
            .lenient()
            .with_pages(PageSelection::Range(1..=3));

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(options.pages.includes(3));
        assert!(!options.pages.includes(4));
    }

    #[test]
    fn test_default_options() {
        let options = SourceOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(matches!(options.pages, PageSelection::All));
    }
}
