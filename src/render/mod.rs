//! Rendering module for handing cleaned pages to downstream tools.

mod json;
mod options;
mod result;
mod text;

pub use json::{to_json, JsonFormat};
pub use options::{PageSelection, RenderOptions};
pub use result::NormalizeStats;
pub use text::to_text;
