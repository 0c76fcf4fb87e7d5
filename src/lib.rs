//! # pagenorm
//!
//! Per-page normalization of text extracted from PDF documents.
//!
//! Text pulled out of a PDF arrives one string per page, full of irregular
//! whitespace (newlines, tabs, non-breaking spaces) and footer stamps such as
//! `& /en 12`. This crate cleans each page so it can go straight into a
//! tokenizer or corpus builder:
//!
//! 1. every run of whitespace becomes a single space
//! 2. every `& /en` marker followed by a space and a 1-3 digit page number
//!    is removed
//!
//! Pages are independent; a document keeps its page count and order.
//!
//! ## Quick Start
//!
//! ```
//! let cleaned = pagenorm::normalize_page("Article 1. Something.\n\n& /en 12 Next page text");
//! assert_eq!(cleaned, "Article 1. Something. Next page text");
//!
//! let pages = pagenorm::normalize_document(&["Hello   world\n\ttab", ""]);
//! assert_eq!(pages, vec!["Hello world tab".to_string(), String::new()]);
//! ```
//!
//! ## Files
//!
//! ```no_run
//! use pagenorm::Pagenorm;
//!
//! let text = Pagenorm::new()
//!     .lenient()
//!     .with_trim(true)
//!     .open("speeches.pdf")?
//!     .to_text()?;
//! # Ok::<(), pagenorm::Error>(())
//! ```
//!
//! Inputs may be PDF files (text extracted per page with `lopdf`),
//! form-feed separated text dumps (`pdftotext` output) or JSON arrays of
//! page strings.

pub mod detect;
pub mod error;
pub mod model;
pub mod normalize;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, InputFormat};
pub use error::{Error, Result};
pub use model::{CleanedDocument, CleanedPage, Document, Page, PageStats};
pub use normalize::{FooterPattern, NormalizeOptions, PageTextNormalizer};
pub use render::{JsonFormat, NormalizeStats, PageSelection, RenderOptions};
pub use source::{open_source, ErrorMode, PageSource, SourceOptions};

use std::path::Path;

/// Normalize the text of one page with the default rules.
///
/// Total and pure: any string is accepted, nothing else is read.
///
/// # Example
///
/// ```
/// assert_eq!(pagenorm::normalize_page(""), "");
/// assert_eq!(pagenorm::normalize_page("x & /en 1234 y"), "x 4 y");
/// ```
pub fn normalize_page(text: &str) -> String {
    PageTextNormalizer::default().normalize(text)
}

/// Normalize each page of a document with the default rules.
///
/// The output has one entry per input page, in the same order.
pub fn normalize_document<S>(pages: &[S]) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    PageTextNormalizer::default().normalize_texts(pages)
}

/// Read a file and normalize every page with the default rules.
///
/// # Example
///
/// ```no_run
/// let doc = pagenorm::clean_file("speeches.pdf")?;
/// for page in &doc.pages {
///     println!("{}: {}", page.number, page.text);
/// }
/// # Ok::<(), pagenorm::Error>(())
/// ```
pub fn clean_file<P: AsRef<Path>>(path: P) -> Result<CleanedDocument> {
    let doc = source::extract_pages(path)?;
    Ok(PageTextNormalizer::default().normalize_document(&doc))
}

/// Read a file and return its cleaned pages joined as plain text.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = clean_file(path)?;
    render::to_text(&doc, &RenderOptions::default())
}

/// Read a file and return its cleaned pages as JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = clean_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for extracting, normalizing and rendering documents.
///
/// # Example
///
/// ```
/// use pagenorm::Pagenorm;
///
/// let result = Pagenorm::new()
///     .with_separator("\n")
///     .clean_texts(["Page one\n& /en 1", "Page two\n& /en 2"])?;
/// assert_eq!(result.to_text()?, "Page one \nPage two ");
/// # Ok::<(), pagenorm::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pagenorm {
    source_options: SourceOptions,
    normalize_options: NormalizeOptions,
    render_options: RenderOptions,
}

impl Pagenorm {
    /// Create a new Pagenorm builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep going past pages that fail to extract.
    pub fn lenient(mut self) -> Self {
        self.source_options = self.source_options.lenient();
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.normalize_options = self.normalize_options.sequential();
        self
    }

    /// Set normalization options.
    pub fn with_normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize_options = options;
        self
    }

    /// Set the footer pattern.
    pub fn with_footer(mut self, footer: FooterPattern) -> Self {
        self.normalize_options = self.normalize_options.with_footer(footer);
        self
    }

    /// Leave footer markers in place.
    pub fn keep_footers(mut self) -> Self {
        self.normalize_options = self.normalize_options.with_strip_footers(false);
        self
    }

    /// Trim the boundary space of each page.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.normalize_options = self.normalize_options.with_trim(trim);
        self
    }

    /// Set the page separator used for text output.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_separator(separator);
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.source_options = self.source_options.with_pages(pages.clone());
        self.render_options = self.render_options.with_pages(pages);
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Read a file and normalize its pages.
    pub fn open<P: AsRef<Path>>(self, path: P) -> Result<PagenormResult> {
        let source = open_source(path, self.source_options.clone())?;
        let document = source.extract()?;
        self.finish(&document)
    }

    /// Normalize pages already held in memory, numbering them from 1.
    pub fn clean_texts<I, S>(self, texts: I) -> Result<PagenormResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let document = Document::from_texts(texts);
        self.finish(&document)
    }

    /// Normalize an extracted document.
    pub fn normalize(self, document: &Document) -> Result<PagenormResult> {
        self.finish(document)
    }

    fn finish(self, document: &Document) -> Result<PagenormResult> {
        let normalizer = PageTextNormalizer::new(self.normalize_options)?;
        Ok(PagenormResult {
            document: normalizer.normalize_document(document),
            render_options: self.render_options,
        })
    }
}

/// Result of normalizing a document.
#[derive(Debug, Clone)]
pub struct PagenormResult {
    /// The cleaned document
    pub document: CleanedDocument,
    /// Render options to use
    render_options: RenderOptions,
}

impl PagenormResult {
    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Totals over all pages.
    pub fn stats(&self) -> NormalizeStats {
        NormalizeStats::from_document(&self.document)
    }

    /// Cleaned page texts in order.
    pub fn texts(&self) -> Vec<&str> {
        self.document.texts()
    }

    /// Get the document.
    pub fn document(&self) -> &CleanedDocument {
        &self.document
    }
}
