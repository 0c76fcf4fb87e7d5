//! PDF page source backed by lopdf.

use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect::{detect_format_from_path, InputFormat};
use crate::error::{Error, Result};
use crate::model::{Document, Page};

use super::options::{ErrorMode, SourceOptions};
use super::{check_selection, PageSource};

/// Per-page text extracted from a PDF document.
pub struct PdfSource {
    name: String,
    doc: LopdfDocument,
    options: SourceOptions,
}

impl PdfSource {
    /// Open a PDF file, checking its header first.
    pub fn open<P: AsRef<Path>>(path: P, options: SourceOptions) -> Result<Self> {
        let path = path.as_ref();
        match detect_format_from_path(path)? {
            InputFormat::Pdf { .. } => Self::load(path, options),
            _ => Err(Error::UnknownFormat),
        }
    }

    /// Load a file already known to be a PDF.
    pub(crate) fn load(path: &Path, options: SourceOptions) -> Result<Self> {
        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Self::from_document(path.display().to_string(), doc, options)
    }

    /// Load a PDF held in memory.
    pub fn from_bytes(name: impl Into<String>, data: &[u8], options: SourceOptions) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Self::from_document(name.into(), doc, options)
    }

    fn from_document(name: String, doc: LopdfDocument, options: SourceOptions) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { name, doc, options })
    }

    /// Total number of pages in the file, ignoring the page selection.
    pub fn total_pages(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    fn extract_page_text(&self, page_num: u32) -> Result<String> {
        self.doc
            .extract_text(&[page_num])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page_num, e)))
    }
}

impl PageSource for PdfSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self) -> Result<Document> {
        check_selection(&self.name, self.total_pages(), &self.options)?;
        let mut document = Document::with_source(self.name.clone());

        for page_num in self.doc.get_pages().keys().copied() {
            if !self.options.pages.includes(page_num) {
                continue;
            }

            match self.extract_page_text(page_num) {
                Ok(text) => document.add_page(Page::new(page_num, text)),
                Err(e) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(e);
                    }
                    // Keep the slot so page numbering and count survive.
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    document.add_page(Page::empty(page_num));
                }
            }
        }

        log::debug!(
            "Extracted {} of {} pages from {}",
            document.page_count(),
            self.total_pages(),
            self.name
        );

        Ok(document)
    }
}
