use serde::Serialize;

use crate::{
    mismatch::extension_mismatch,
    model::FileType,
    value_objects::{FileExtension, FileName, FileSize, FileTimes, TagMap},
};

/// Everything gathered about one file.
///
/// Fields are read through accessors so that `ext_mismatch` always reflects
/// `extension` against the first entry of `types`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    name: FileName,
    extension: FileExtension,
    ext_mismatch: bool,
    size: FileSize,
    time: FileTimes,
    types: Vec<FileType>,
    tags: TagMap,
}

impl Metadata {
    pub fn new(name: FileName, size: FileSize, time: FileTimes) -> Self {
        let extension = FileExtension::from_name(name.as_str());
        Self { name, extension, size, time, ..Self::default() }
    }

    /// Store the ranked candidates and recompute the mismatch flag.
    pub fn record_types(&mut self, types: Vec<FileType>) {
        self.ext_mismatch = types
            .first()
            .is_some_and(|top| extension_mismatch(self.extension.as_str(), &top.extension));
        self.types = types;
    }

    pub fn record_tags(&mut self, tags: TagMap) {
        self.tags = tags;
    }

    pub fn name(&self) -> &FileName {
        &self.name
    }

    pub fn extension(&self) -> &FileExtension {
        &self.extension
    }

    pub fn ext_mismatch(&self) -> bool {
        self.ext_mismatch
    }

    pub fn size(&self) -> FileSize {
        self.size
    }

    pub fn time(&self) -> &FileTimes {
        &self.time
    }

    /// Candidates, most likely first.
    pub fn types(&self) -> &[FileType] {
        &self.types
    }

    pub fn top_type(&self) -> Option<&FileType> {
        self.types.first()
    }

    pub fn tags(&self) -> &TagMap {
        &self.tags
    }

    pub fn tag(&self, key: &str) -> Option<&crate::value_objects::TagValue> {
        self.tags.get(key)
    }
}
