//! Error types for pagenorm library.

use std::io;
use thiserror::Error;

/// Result type alias for pagenorm operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting, normalizing or rendering pages.
///
/// Normalizing text never fails; these variants cover the page sources,
/// custom footer patterns and the renderers.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input format is not recognized.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// A JSON page list could not be read.
    #[error("Invalid JSON page list: {0}")]
    Json(String),

    /// A footer pattern failed to compile.
    #[error("Invalid footer pattern: {0}")]
    InvalidPattern(String),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// A selected page is past the end of the document.
    #[error("Page {0} out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::InvalidPattern(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::InvalidPageRange("3-x".to_string());
        assert_eq!(err.to_string(), "Invalid page range: 3-x");

        let err = Error::PageOutOfRange(9, 4);
        assert_eq!(err.to_string(), "Page 9 out of range (document has 4 pages)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("[1, 2").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("Invalid JSON page list"));
    }

    #[test]
    fn test_regex_error_conversion() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let err: Error = regex_err.into();
        assert!(matches!(err, Error::InvalidPattern(_)));
    }
}
