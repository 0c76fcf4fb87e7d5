//! Page-text normalization.

mod normalizer;
mod options;

pub use normalizer::PageTextNormalizer;
pub use options::{
    FooterPattern, NormalizeOptions, DEFAULT_FOOTER_MARKER, DEFAULT_FOOTER_MAX_DIGITS,
};
