//! Plain text rendering for cleaned documents.

use crate::error::Result;
use crate::model::CleanedDocument;

use super::RenderOptions;

/// Convert a cleaned document to plain text.
///
/// Selected pages are joined in order with the configured separator.
pub fn to_text(doc: &CleanedDocument, options: &RenderOptions) -> Result<String> {
    let mut parts = Vec::with_capacity(doc.pages.len());

    for page in &doc.pages {
        if !options.page_selection.includes(page.number) {
            continue;
        }
        if options.skip_empty_pages && page.is_blank() {
            continue;
        }

        if options.include_page_markers {
            parts.push(format!("--- page {} ---\n{}", page.number, page.text));
        } else {
            parts.push(page.text.clone());
        }
    }

    Ok(parts.join(&options.page_separator))
}
