// crates/ports/src/file_type.rs
use std::path::Path;

use metaextract_shared_kernel::ToolResult;
use serde::{Deserialize, Serialize};

/// DTO for one candidate reported by an identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileTypeMatch {
    pub name: String,
    pub mime_type: String,
    pub extension: String,
    pub probability: f64,
}

/// Port for content based file type identification.
pub trait FileTypeIdentifier: Send + Sync {
    /// Ranked candidates, most likely first. An empty list means the file
    /// matched no known signature.
    fn identify(&self, path: &Path) -> ToolResult<Vec<FileTypeMatch>>;
}
