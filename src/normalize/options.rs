//! Normalization options and configuration.

use serde::{Deserialize, Serialize};

/// Literal footer marker stamped on every page of the source documents.
pub const DEFAULT_FOOTER_MARKER: &str = "& /en";

/// Longest page number the footer pattern consumes.
pub const DEFAULT_FOOTER_MAX_DIGITS: u8 = 3;

/// Footer marker followed by a page number, e.g. `& /en 12`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterPattern {
    /// Literal marker text (matched verbatim, not as a regex)
    pub marker: String,

    /// Maximum number of page-number digits consumed after the marker.
    /// Longer numerals keep their trailing digits.
    pub max_digits: u8,
}

impl FooterPattern {
    /// Create a footer pattern. `max_digits` is clamped to 1..=9.
    pub fn new(marker: impl Into<String>, max_digits: u8) -> Self {
        Self {
            marker: marker.into(),
            max_digits: max_digits.clamp(1, 9),
        }
    }

    /// Regex source for this pattern: escaped marker, one space, 1..=N ASCII digits.
    pub fn to_regex_source(&self) -> String {
        format!(
            "{} [0-9]{{1,{}}}",
            regex::escape(&self.marker),
            self.max_digits
        )
    }

    /// Whether this is the built-in `& /en` pattern.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for FooterPattern {
    fn default() -> Self {
        Self::new(DEFAULT_FOOTER_MARKER, DEFAULT_FOOTER_MAX_DIGITS)
    }
}

/// Options for page-text normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Replace every whitespace run with a single space
    pub collapse_whitespace: bool,

    /// Remove footer markers and their page numbers
    pub strip_footers: bool,

    /// Footer marker and page-number bound
    pub footer: FooterPattern,

    /// Trim the boundary space left at either end of a page
    pub trim: bool,

    /// Apply Unicode NFC normalization
    pub normalize_unicode: bool,

    /// Normalize pages of a document in parallel
    pub parallel: bool,
}

impl NormalizeOptions {
    /// Create new normalize options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whitespace collapsing only; footers are left in place.
    pub fn plain() -> Self {
        Self {
            strip_footers: false,
            ..Self::default()
        }
    }

    /// Enable or disable whitespace collapsing.
    pub fn with_collapse_whitespace(mut self, collapse: bool) -> Self {
        self.collapse_whitespace = collapse;
        self
    }

    /// Enable or disable footer stripping.
    pub fn with_strip_footers(mut self, strip: bool) -> Self {
        self.strip_footers = strip;
        self
    }

    /// Set the footer pattern.
    pub fn with_footer(mut self, footer: FooterPattern) -> Self {
        self.footer = footer;
        self
    }

    /// Set the footer marker, keeping the current digit bound.
    pub fn with_footer_marker(mut self, marker: impl Into<String>) -> Self {
        self.footer = FooterPattern::new(marker, self.footer.max_digits);
        self
    }

    /// Set the footer digit bound, keeping the current marker.
    pub fn with_footer_max_digits(mut self, max_digits: u8) -> Self {
        self.footer = FooterPattern::new(self.footer.marker, max_digits);
        self
    }

    /// Enable or disable boundary trimming.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
            strip_footers: true,
            footer: FooterPattern::default(),
            trim: false,
            normalize_unicode: false,
            parallel: true,
        }
    }
}
