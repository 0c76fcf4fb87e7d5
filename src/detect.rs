//! Input format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Format of a page-text input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFormat {
    /// A PDF document; text is extracted page by page
    Pdf {
        /// PDF version (e.g., "1.7", "2.0")
        version: String,
    },
    /// A JSON array of strings, one per page
    Json,
    /// UTF-8 text with pages separated by form feeds
    Text,
}

impl InputFormat {
    /// Short name used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            InputFormat::Pdf { .. } => "pdf",
            InputFormat::Json => "json",
            InputFormat::Text => "text",
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Pdf { version } => write!(f, "PDF {}", version),
            InputFormat::Json => write!(f, "JSON page list"),
            InputFormat::Text => write!(f, "Form-feed separated text"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Bytes read from the start of a file for sniffing.
const SNIFF_LEN: usize = 64;

/// Detect the input format of a file.
///
/// # Example
/// ```no_run
/// use pagenorm::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("speeches.pdf").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file).take(SNIFF_LEN as u64);
    let mut header = Vec::with_capacity(SNIFF_LEN);
    reader.read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the input format from the leading bytes of the content.
///
/// * `%PDF-x.y` is a PDF (an invalid version is an error)
/// * `[` followed by a string or `]` is a JSON page list
/// * anything else, including empty input and bracketed text such as
///   `[Applause]`, is form-feed separated text
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    if data.starts_with(PDF_MAGIC) {
        if data.len() < PDF_MAGIC_LEN + VERSION_LEN {
            return Err(Error::UnknownFormat);
        }

        // Extract version string (e.g., "1.7" from "%PDF-1.7")
        let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
        let version = String::from_utf8_lossy(version_bytes).to_string();

        if !is_valid_version(&version) {
            return Err(Error::UnsupportedVersion(version));
        }

        return Ok(InputFormat::Pdf { version });
    }

    if looks_like_json_page_list(data) {
        return Ok(InputFormat::Json);
    }

    Ok(InputFormat::Text)
}

/// A JSON page list opens with `[` and then a string or the closing `]`.
fn looks_like_json_page_list(data: &[u8]) -> bool {
    let mut bytes = data
        .strip_prefix(b"\xEF\xBB\xBF")
        .unwrap_or(data)
        .iter()
        .filter(|b| !b.is_ascii_whitespace());

    match (bytes.next(), bytes.next()) {
        (Some(b'['), Some(b'"' | b']')) => true,
        // Only whitespace follows within the sniffed head
        (Some(b'['), None) => true,
        _ => false,
    }
}

/// Check if a version string is valid.
fn is_valid_version(version: &str) -> bool {
    if version.len() != 3 {
        return false;
    }

    let chars: Vec<char> = version.chars().collect();
    chars[0].is_ascii_digit() && chars[1] == '.' && chars[2].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_pdf() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        let format = detect_format_from_bytes(data).unwrap();
        assert_eq!(
            format,
            InputFormat::Pdf {
                version: "1.7".to_string()
            }
        );
        assert_eq!(format.to_string(), "PDF 1.7");
    }

    #[test]
    fn test_detect_truncated_pdf_header() {
        let result = detect_format_from_bytes(b"%PDF-1");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_bad_pdf_version() {
        let result = detect_format_from_bytes(b"%PDF-x.y\n");
        assert!(matches!(result, Err(Error::UnsupportedVersion(_))));
    }

    #[test]
    fn test_detect_json() {
        assert_eq!(
            detect_format_from_bytes(b"  \n[\"page one\"]").unwrap(),
            InputFormat::Json
        );
        assert_eq!(
            detect_format_from_bytes(b"\xEF\xBB\xBF[]").unwrap(),
            InputFormat::Json
        );
    }

    #[test]
    fn test_detect_bracketed_text() {
        assert_eq!(
            detect_format_from_bytes(b"[Applause] Mr President,\n").unwrap(),
            InputFormat::Text
        );
        assert_eq!(
            detect_format_from_bytes(b"[ Translation ]\x0c").unwrap(),
            InputFormat::Text
        );
        assert_eq!(
            detect_format_from_bytes(b"[1, 2]").unwrap(),
            InputFormat::Text
        );
    }

    #[test]
    fn test_detect_text() {
        assert_eq!(
            detect_format_from_bytes(b"Plenary debate\x0cPage two").unwrap(),
            InputFormat::Text
        );
        assert_eq!(detect_format_from_bytes(b"").unwrap(), InputFormat::Text);
    }

    #[test]
    fn test_version_validation() {
        assert!(is_valid_version("1.0"));
        assert!(is_valid_version("2.0"));
        assert!(!is_valid_version("10.0"));
        assert!(!is_valid_version("abc"));
    }
}
