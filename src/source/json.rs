//! JSON page lists: `["page one text", "page two text", ...]`.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::Document;

use super::options::SourceOptions;
use super::{select_pages, PageSource};

/// Pages read from a JSON array of strings.
pub struct JsonSource {
    name: String,
    pages: Vec<String>,
    options: SourceOptions,
}

impl JsonSource {
    /// Read a JSON page list from disk.
    pub fn open<P: AsRef<Path>>(path: P, options: SourceOptions) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_json(path.display().to_string(), &content, options)
    }

    /// Parse a JSON page list held in memory.
    pub fn from_json(name: impl Into<String>, json: &str, options: SourceOptions) -> Result<Self> {
        let json = json.strip_prefix('\u{FEFF}').unwrap_or(json);
        let pages: Vec<String> = serde_json::from_str(json)?;
        Ok(Self {
            name: name.into(),
            pages,
            options,
        })
    }
}

impl PageSource for JsonSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self) -> Result<Document> {
        select_pages(&self.name, self.pages.iter().cloned(), &self.options)
    }
}
