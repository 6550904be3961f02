// crates/ports/src/tags.rs
use std::path::Path;

use metaextract_shared_kernel::{TagMap, ToolResult};

/// Port for embedded metadata extraction.
pub trait TagExtractor: Send + Sync {
    /// Returns `ToolError::NoMetadata` when the tool produced nothing for the file.
    fn extract_tags(&self, path: &Path) -> ToolResult<TagMap>;
}
