//! Form-feed separated text dumps (the `pdftotext` output layout).

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Document;

use super::options::{ErrorMode, SourceOptions};
use super::{select_pages, PageSource};

/// Character that ends each page in a text dump.
pub const PAGE_SEPARATOR: char = '\x0C';

/// Pages read from text where each page ends with a form feed.
pub struct TextSource {
    name: String,
    content: String,
    options: SourceOptions,
}

impl TextSource {
    /// Read a text dump from disk.
    pub fn open<P: AsRef<Path>>(path: P, options: SourceOptions) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let content = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => match options.error_mode {
                ErrorMode::Strict => {
                    return Err(Error::TextExtract(format!("{}: {}", path.display(), e)))
                }
                ErrorMode::Lenient => {
                    log::warn!("{} is not valid UTF-8, decoding lossily", path.display());
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            },
        };
        Ok(Self {
            name: path.display().to_string(),
            content,
            options,
        })
    }

    /// Wrap text already in memory.
    pub fn from_text(
        name: impl Into<String>,
        content: impl Into<String>,
        options: SourceOptions,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            options,
        }
    }
}

impl PageSource for TextSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self) -> Result<Document> {
        let texts = split_pages(&self.content)
            .into_iter()
            .map(str::to_string);
        select_pages(&self.name, texts, &self.options)
    }
}

/// Split a text dump into pages.
///
/// A single trailing form feed closes the last page rather than opening
/// an empty one, so `"\x0c"` is one blank page. Empty content has no pages.
pub fn split_pages(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix(PAGE_SEPARATOR).unwrap_or(content);
    body.split(PAGE_SEPARATOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages() {
        assert_eq!(split_pages("one\x0ctwo\x0c"), vec!["one", "two"]);
        assert_eq!(split_pages("one\x0ctwo"), vec!["one", "two"]);
        assert_eq!(split_pages("only"), vec!["only"]);
    }

    #[test]
    fn test_split_pages_empty() {
        assert!(split_pages("").is_empty());
    }

    #[test]
    fn test_split_pages_blank_pages_counted() {
        assert_eq!(split_pages("\x0c"), vec![""]);
        assert_eq!(split_pages("\x0c\x0c"), vec!["", ""]);
        assert_eq!(split_pages("\x0c\x0c\x0c"), vec!["", "", ""]);
    }

    #[test]
    fn test_split_pages_keeps_blank_pages() {
        assert_eq!(split_pages("a\x0c\x0cc\x0c"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_text_source_extract() {
        let source = TextSource::from_text("dump.txt", "p1\x0cp2\x0c", SourceOptions::default());
        let doc = source.extract().unwrap();
        assert_eq!(source.name(), "dump.txt");
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[1].number, 2);
        assert_eq!(doc.pages[1].text, "p2");
    }
}
