//! Page and document types.
//!
//! A [`Document`] is what a page source produces: raw per-page text in
//! reading order. A [`CleanedDocument`] is what the normalizer produces from
//! it, one [`CleanedPage`] per [`Page`].

mod document;
mod page;

pub use document::{CleanedDocument, Document};
pub use page::{CleanedPage, Page, PageStats};
