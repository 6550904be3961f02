use metaextract_domain::Metadata;
use metaextract_shared_kernel::{ErrorKind, MetaExtractError};
use thiserror::Error;

/// A failed extraction together with whatever was gathered before the failing step.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ExtractFailure {
    metadata: Box<Metadata>,
    #[source]
    error: MetaExtractError,
}

impl ExtractFailure {
    pub fn new(metadata: Metadata, error: MetaExtractError) -> Self {
        Self { metadata: Box::new(metadata), error }
    }

    /// Partial result; zero-valued when the failure happened before stat.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn error(&self) -> &MetaExtractError {
        &self.error
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    pub fn into_parts(self) -> (Metadata, MetaExtractError) {
        (*self.metadata, self.error)
    }

    pub fn into_error(self) -> MetaExtractError {
        self.error
    }
}

impl From<ExtractFailure> for MetaExtractError {
    fn from(failure: ExtractFailure) -> Self {
        failure.error
    }
}
