//! Page sources.
//!
//! A page source turns an input file into a [`Document`]: raw text, one
//! entry per page, in reading order. Text extraction itself is delegated
//! (to `lopdf` for PDFs, or to whatever tool produced a text or JSON dump);
//! the sources only adapt the result into pages.

mod json;
mod options;
mod pdf;
mod text;

pub use json::JsonSource;
pub use options::{ErrorMode, SourceOptions};
pub use pdf::PdfSource;
pub use text::{TextSource, PAGE_SEPARATOR};

use std::path::Path;

use crate::detect::{detect_format_from_path, InputFormat};
use crate::error::{Error, Result};
use crate::model::{Document, Page};

/// Something that yields the pages of one document.
pub trait PageSource {
    /// Label for the source (usually the file path).
    fn name(&self) -> &str;

    /// Extract all selected pages in reading order.
    fn extract(&self) -> Result<Document>;
}

/// Open a page source for a file, picking the adapter by content.
///
/// # Example
///
/// ```no_run
/// use pagenorm::source::{open_source, SourceOptions};
///
/// let source = open_source("speeches.pdf", SourceOptions::default())?;
/// let doc = source.extract()?;
/// println!("{} pages", doc.page_count());
/// # Ok::<(), pagenorm::Error>(())
/// ```
pub fn open_source<P: AsRef<Path>>(path: P, options: SourceOptions) -> Result<Box<dyn PageSource>> {
    let path = path.as_ref();
    let format = detect_format_from_path(path)?;
    log::debug!("Opening {} as {}", path.display(), format.name());

    let source: Box<dyn PageSource> = match format {
        InputFormat::Pdf { .. } => Box::new(PdfSource::load(path, options)?),
        InputFormat::Json => Box::new(JsonSource::open(path, options)?),
        InputFormat::Text => Box::new(TextSource::open(path, options)?),
    };
    Ok(source)
}

/// Extract the pages of a file with default options.
pub fn extract_pages<P: AsRef<Path>>(path: P) -> Result<Document> {
    open_source(path, SourceOptions::default())?.extract()
}

/// Build a document from page texts, numbering from 1 and keeping only
/// the selected pages.
pub(crate) fn select_pages<I>(name: &str, texts: I, options: &SourceOptions) -> Result<Document>
where
    I: IntoIterator<Item = String>,
{
    let mut doc = Document::with_source(name);
    let mut total = 0;
    for text in texts {
        total += 1;
        if options.pages.includes(total) {
            doc.add_page(Page::new(total, text));
        }
    }
    check_selection(name, total, options)?;
    Ok(doc)
}

/// Fail (strict) or warn (lenient) when the selection names a page the
/// document does not have.
pub(crate) fn check_selection(name: &str, total: u32, options: &SourceOptions) -> Result<()> {
    let Some(missing) = options.pages.first_missing(total) else {
        return Ok(());
    };
    match options.error_mode {
        ErrorMode::Strict => Err(Error::PageOutOfRange(missing, total)),
        ErrorMode::Lenient => {
            log::warn!("{} has {} pages, page {} skipped", name, total, missing);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PageSelection;

    #[test]
    fn test_select_pages_keeps_numbers() {
        let options = SourceOptions::new().with_pages(PageSelection::Pages(vec![2, 3]));
        let doc = select_pages(
            "mem",
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            &options,
        )
        .unwrap();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[0].number, 2);
        assert_eq!(doc.pages[1].text, "c");
        assert_eq!(doc.source.as_deref(), Some("mem"));
    }

    #[test]
    fn test_select_pages_out_of_range() {
        let texts = || vec!["a".to_string(), "b".to_string()];
        let strict = SourceOptions::new().with_pages(PageSelection::Pages(vec![1, 5]));
        assert!(matches!(
            select_pages("mem", texts(), &strict),
            Err(Error::PageOutOfRange(5, 2))
        ));

        let lenient = strict.lenient();
        let doc = select_pages("mem", texts(), &lenient).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.pages[0].text, "a");
    }
}
