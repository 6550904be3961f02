// crates/ports/src/filesystem.rs
use std::path::Path;

use metaextract_shared_kernel::{FileName, FileSize, FileTimes, Result};
use serde::{Deserialize, Serialize};

/// DTO describing a single filesystem entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatDto {
    pub name: FileName,
    pub size: FileSize,
    pub times: FileTimes,
}

/// Port for stat-like filesystem queries.
///
/// Implementations report a missing entry as `FileNotFound` and any other
/// failure as `Stat`.
pub trait FileStatProvider: Send + Sync {
    fn stat(&self, path: &Path) -> Result<FileStatDto>;
}
