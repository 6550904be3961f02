// crates/infra/src/filesystem.rs
use std::path::Path;

use log::trace;
use metaextract_ports::filesystem::{FileStatDto, FileStatProvider};
use metaextract_shared_kernel::{FileName, FileSize, FileTimes, MetaExtractError, Result};

use crate::platform::{DefaultPlatformTimes, PlatformTimes, default_platform_times, to_local};

/// Filesystem adapter implementing the `FileStatProvider` port with `std::fs::metadata`.
///
/// Symlinks are followed, so the reported size and times belong to the target.
#[derive(Debug, Clone)]
pub struct StdFileStatProvider {
    platform: DefaultPlatformTimes,
}

impl StdFileStatProvider {
    pub fn new() -> Self {
        Self { platform: default_platform_times() }
    }

    pub fn read_times(&self, metadata: &std::fs::Metadata) -> FileTimes {
        FileTimes {
            modified: metadata.modified().ok().map(to_local),
            accessed: metadata.accessed().ok().map(to_local),
            changed: self.platform.changed(metadata),
            created: self.platform.created(metadata),
        }
    }
}

impl Default for StdFileStatProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStatProvider for StdFileStatProvider {
    fn stat(&self, path: &Path) -> Result<FileStatDto> {
        let metadata = std::fs::metadata(path).map_err(|err| MetaExtractError::from_stat(path, err))?;
        let times = self.read_times(&metadata);
        trace!("stat {}: {times:?}", path.display());

        Ok(FileStatDto {
            name: FileName::from_path(path),
            size: FileSize::from(metadata.len()),
            times,
        })
    }
}
