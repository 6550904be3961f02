use std::path::Path;

use log::{debug, warn};
use metaextract_domain::{FileType, Metadata, TagMap};
use metaextract_ports::{
    file_type::{FileTypeIdentifier, FileTypeMatch},
    filesystem::FileStatProvider,
    tags::TagExtractor,
};
use metaextract_shared_kernel::{MetaExtractError, ToolError};

use crate::dto::ExtractFailure;

/// Runs one extraction: stat, type identification, mismatch check, tag
/// extraction. Each step short-circuits; failures after stat carry the
/// partially populated record.
pub struct ExtractMetadata<'a> {
    files: &'a dyn FileStatProvider,
    identifier: &'a dyn FileTypeIdentifier,
    tags: &'a dyn TagExtractor,
}

impl<'a> ExtractMetadata<'a> {
    pub fn new(
        files: &'a dyn FileStatProvider,
        identifier: &'a dyn FileTypeIdentifier,
        tags: &'a dyn TagExtractor,
    ) -> Self {
        Self { files, identifier, tags }
    }

    pub fn run(&self, path: &Path) -> Result<Metadata, ExtractFailure> {
        if path.as_os_str().is_empty() {
            return Err(ExtractFailure::new(Metadata::default(), MetaExtractError::NoFileSpecified));
        }

        let stat = self
            .files
            .stat(path)
            .map_err(|err| ExtractFailure::new(Metadata::default(), err))?;
        let mut metadata = Metadata::new(stat.name, stat.size, stat.times);
        debug!("stat {}: {} bytes", path.display(), metadata.size());

        match self.identifier.identify(path) {
            Ok(matches) => {
                metadata.record_types(matches.into_iter().map(port_to_domain_type).collect());
                debug!(
                    "identified {}: {} candidate(s), ext_mismatch={}",
                    path.display(),
                    metadata.types().len(),
                    metadata.ext_mismatch()
                );
            }
            Err(err) => {
                warn!("type identification failed for {}: {err}", path.display());
                return Err(ExtractFailure::new(metadata, MetaExtractError::TypeIdentification(err)));
            }
        }

        match self.tags.extract_tags(path) {
            Ok(tags) => metadata.record_tags(tags),
            Err(ToolError::NoMetadata) => {
                debug!("no tags extracted from {}", path.display());
                metadata.record_tags(TagMap::new());
            }
            Err(err) => {
                warn!("tag extraction failed for {}: {err}", path.display());
                return Err(ExtractFailure::new(metadata, MetaExtractError::TagExtraction(err)));
            }
        }

        Ok(metadata)
    }
}

fn port_to_domain_type(candidate: FileTypeMatch) -> FileType {
    FileType {
        name: candidate.name,
        mime_type: candidate.mime_type,
        extension: candidate.extension,
        probability: candidate.probability,
    }
}
